use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use planar::prelude::*;
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod parse;

use parse::parse_point;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Area of planar figures", version = planar::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Circle from its radius
    Circle {
        #[arg(long, allow_hyphen_values = true)]
        radius: f64,
    },
    /// Circle through three points ("x,y")
    Circumcircle {
        #[arg(long, num_args = 3, required = true, allow_hyphen_values = true)]
        points: Vec<String>,
    },
    /// Triangle from three sides, or from base and height
    Triangle {
        #[arg(long, num_args = 3, allow_hyphen_values = true, conflicts_with_all = ["base", "height"])]
        sides: Option<Vec<f64>>,
        #[arg(long, allow_hyphen_values = true, requires = "height")]
        base: Option<f64>,
        #[arg(long, allow_hyphen_values = true, requires = "base")]
        height: Option<f64>,
    },
    /// Trapezoid from its parallel bases and height
    Trapezoid {
        #[arg(long, allow_hyphen_values = true)]
        base1: f64,
        #[arg(long, allow_hyphen_values = true)]
        base2: f64,
        #[arg(long, allow_hyphen_values = true)]
        height: f64,
    },
    /// Parallelogram from base and height
    Parallelogram {
        #[arg(long, allow_hyphen_values = true)]
        base: f64,
        #[arg(long, allow_hyphen_values = true)]
        height: f64,
    },
    /// Polygon from ordered vertices ("x,y")
    Polygon {
        #[arg(long, num_args = 1.., required = true, allow_hyphen_values = true)]
        points: Vec<String>,
    },
    /// Right-triangle check on three sides
    Right {
        #[arg(long, num_args = 3, required = true, allow_hyphen_values = true)]
        sides: Vec<f64>,
    },
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
enum Report {
    Area { figure: &'static str, area: f64 },
    Right { right: bool },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let report = execute(cmd.action)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn execute(action: Action) -> Result<Report> {
    tracing::info!(?action, "execute");
    let figure: Box<dyn Figure> = match action {
        Action::Circle { radius } => Box::new(Circle::new(radius)?),
        Action::Circumcircle { points } => {
            let [a, b, c] = three_points(&points)?;
            Box::new(Circle::circumscribed(a, b, c).context("circumcircle")?)
        }
        Action::Triangle {
            sides: Some(sides),
            ..
        } => Box::new(Triangle::from_sides(sides[0], sides[1], sides[2])?),
        Action::Triangle {
            base: Some(base),
            height: Some(height),
            ..
        } => Box::new(Triangle::from_base_height(base, height)?),
        Action::Triangle { .. } => bail!("triangle needs --sides or --base with --height"),
        Action::Trapezoid {
            base1,
            base2,
            height,
        } => Box::new(Trapezoid::from_bases(base1, base2, height)?),
        Action::Parallelogram { base, height } => {
            Box::new(Parallelogram::from_base_height(base, height)?)
        }
        Action::Polygon { points } => {
            let vertices = points
                .iter()
                .map(|p| parse_point(p))
                .collect::<Result<Vec<_>>>()?;
            Box::new(Polygon::new(vertices)?)
        }
        Action::Right { sides } => {
            let right = planar::calc::is_right_triangle(sides[0], sides[1], sides[2])?;
            return Ok(Report::Right { right });
        }
    };
    let area = area_of(Some(figure.as_ref()))
        .with_context(|| format!("area of {}", figure.name()))?;
    Ok(Report::Area {
        figure: figure.name(),
        area,
    })
}

fn three_points(points: &[String]) -> Result<[Point; 3]> {
    match points {
        [a, b, c] => Ok([parse_point(a)?, parse_point(b)?, parse_point(c)?]),
        _ => bail!("expected exactly 3 points, got {}", points.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<Report> {
        let cmd = Cmd::try_parse_from(std::iter::once("planar").chain(args.iter().copied()))?;
        execute(cmd.action)
    }

    fn area(report: Report) -> f64 {
        match report {
            Report::Area { area, .. } => area,
            Report::Right { .. } => panic!("expected an area report"),
        }
    }

    #[test]
    fn scalar_figures() {
        assert!((area(run(&["circle", "--radius", "2"]).unwrap()) - 12.566).abs() < 1e-3);
        assert_eq!(area(run(&["triangle", "--sides", "3", "4", "5"]).unwrap()), 6.0);
        assert_eq!(
            area(run(&["triangle", "--base", "3", "--height", "4"]).unwrap()),
            6.0
        );
        assert_eq!(
            area(run(&["trapezoid", "--base1", "4", "--base2", "6", "--height", "3"]).unwrap()),
            15.0
        );
        assert_eq!(
            area(run(&["parallelogram", "--base", "2", "--height", "3"]).unwrap()),
            6.0
        );
    }

    #[test]
    fn vertex_figures() {
        let report = run(&["polygon", "--points", "0,0", "4,0", "4,3", "0,3"]).unwrap();
        assert_eq!(
            report,
            Report::Area {
                figure: "polygon",
                area: 12.0
            }
        );
        let r = area(run(&["circumcircle", "--points", "0,0", "3,0", "0,4"]).unwrap());
        assert!((r - 6.25 * std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn right_check() {
        assert_eq!(
            run(&["right", "--sides", "3", "4", "5"]).unwrap(),
            Report::Right { right: true }
        );
    }

    #[test]
    fn invalid_inputs_surface_reason() {
        let err = run(&["circle", "--radius", "-1"]).unwrap_err();
        assert_eq!(err.to_string(), "Radius should be positive");
        let err = run(&["polygon", "--points", "1,1", "2,0", "1,1"]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
        let err = run(&["circumcircle", "--points", "0,0", "1,1", "2,2"]).unwrap_err();
        assert_eq!(format!("{err:#}"), "circumcircle: Points are collinear");
        assert!(run(&["triangle"]).is_err());
    }

    #[test]
    fn report_json_shape() {
        let json = serde_json::to_value(Report::Area {
            figure: "circle",
            area: 1.5,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"figure": "circle", "area": 1.5}));
        let json = serde_json::to_value(Report::Right { right: false }).unwrap();
        assert_eq!(json, serde_json::json!({"right": false}));
    }
}
