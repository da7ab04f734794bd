//! Triangles in three construction forms.

use crate::error::{GeomError, Result};

use super::all_positive;
use super::point::Point;
use super::polygon::Polygon;

/// Which data the triangle was built from. `area()` matches on this tag, so
/// no field ever doubles as a sentinel for another form.
#[derive(Clone, Debug, PartialEq)]
enum Form {
    Vertices(Polygon),
    Sides { a: f64, b: f64, c: f64 },
    BaseHeight { base: f64, height: f64 },
}

/// A triangle, validated at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    form: Form,
}

impl Triangle {
    /// Exactly three distinct vertices.
    ///
    /// Collinear vertices (zero shoelace area) are rejected.
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self> {
        let polygon = Polygon::new(vertices)?;
        if polygon.len() != 3 {
            return Err(GeomError::invalid("A triangle needs exactly 3 vertices"));
        }
        if polygon.area()? == 0.0 {
            return Err(GeomError::invalid("Points are collinear"));
        }
        Ok(Self {
            form: Form::Vertices(polygon),
        })
    }

    #[inline]
    pub fn from_points(a: Point, b: Point, c: Point) -> Result<Self> {
        Self::from_vertices(vec![a, b, c])
    }

    /// Three side lengths; each positive, none longer than the semi-perimeter.
    pub fn from_sides(a: f64, b: f64, c: f64) -> Result<Self> {
        if !all_positive(&[a, b, c]) {
            return Err(GeomError::invalid("Sides should be positive"));
        }
        let p = (a + b + c) / 2.0;
        if p < a || p < b || p < c {
            return Err(GeomError::invalid(
                "Half of the perimeter should be more than any side of triangle",
            ));
        }
        Ok(Self {
            form: Form::Sides { a, b, c },
        })
    }

    pub fn from_base_height(base: f64, height: f64) -> Result<Self> {
        if !all_positive(&[base, height]) {
            return Err(GeomError::invalid("Base and height should be positive"));
        }
        Ok(Self {
            form: Form::BaseHeight { base, height },
        })
    }

    pub fn area(&self) -> Result<f64> {
        match &self.form {
            Form::Vertices(polygon) => polygon.area(),
            Form::Sides { a, b, c } => Ok(heron(*a, *b, *c)),
            Form::BaseHeight { base, height } => Ok(0.5 * base * height),
        }
    }

    /// Side lengths, when the form determines them.
    pub fn sides(&self) -> Option<[f64; 3]> {
        match &self.form {
            Form::Vertices(polygon) => {
                let v = polygon.vertices();
                Some([
                    v[0].distance_to(&v[1]),
                    v[1].distance_to(&v[2]),
                    v[0].distance_to(&v[2]),
                ])
            }
            Form::Sides { a, b, c } => Some([*a, *b, *c]),
            Form::BaseHeight { .. } => None,
        }
    }

    /// Vertices, for the vertex form only.
    pub fn vertices(&self) -> Option<&[Point]> {
        match &self.form {
            Form::Vertices(polygon) => Some(polygon.vertices()),
            _ => None,
        }
    }

    /// Exact Pythagorean test on the sorted sides.
    ///
    /// No tolerance is applied: sides obtained from irrational computations
    /// (e.g. vertex distances) may give false negatives.
    pub fn is_right_triangle(&self) -> Result<bool> {
        let sides = self.sides().ok_or_else(|| {
            GeomError::invalid("Side lengths are unknown for a base/height triangle")
        })?;
        Ok(is_pythagorean(sides))
    }
}

/// Heron's formula via the semi-perimeter.
///
/// Sides are first scaled by a power of two near the longest side, so the
/// four-factor product neither overflows nor underflows. Power-of-two scaling
/// is exact, so results for well-scaled inputs are bit-identical to the plain formula.
pub(crate) fn heron(a: f64, b: f64, c: f64) -> f64 {
    let longest = a.max(b).max(c);
    let exp = (longest.log2().floor() as i32).clamp(-1000, 1000);
    let down = 2f64.powi(-exp);
    let (a, b, c) = (a * down, b * down, c * down);
    let p = (a + b + c) / 2.0;
    let unit = (p * (p - a) * (p - b) * (p - c)).sqrt();
    let up = 2f64.powi(exp);
    unit * up * up
}

/// `c² == a² + b²` for the largest side `c`, compared exactly.
pub(crate) fn is_pythagorean(mut sides: [f64; 3]) -> bool {
    sides.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let [a, b, c] = sides;
    c * c == a * a + b * b
}
