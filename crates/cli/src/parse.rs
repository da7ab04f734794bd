use anyhow::{bail, Context, Result};
use planar::prelude::Point;

/// Parse `"x,y"` (whitespace around either number is ignored).
pub fn parse_point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected a point as \"x,y\", got {s:?}");
    };
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_spaced() {
        assert_eq!(parse_point("1,2").unwrap(), Point::new(1.0, 2.0));
        assert_eq!(parse_point(" -1.5 , 3e2 ").unwrap(), Point::new(-1.5, 300.0));
    }

    #[test]
    fn rejects_malformed() {
        assert!(parse_point("1;2").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(parse_point("1,").is_err());
        assert!(parse_point("1,2,3").is_err());
    }
}
