//! Planar figures and their area algorithms.
//!
//! Purpose
//! - Immutable figure values, validated at construction (fail-fast).
//! - One capability, [`Figure::area`], shared by every variant; [`area_of`]
//!   forwards to it for callers holding an optional trait object.
//!
//! Formulas
//! - Polygon: shoelace sum over consecutive vertices, absolute value / 2.
//! - Triangle: shoelace (vertex form), Heron (side form), `b·h/2` (base/height form).
//! - Circle: `π r²`; the three-point form derives `r = |AB||BC||AC| / (4·area)`.
//! - Trapezoid `(b1+b2)·h/2`, parallelogram `b·h`, or shoelace for vertex forms.

mod cfg;
mod circle;
mod figure;
mod point;
mod polygon;
mod quad;
mod triangle;

pub use cfg::GeomCfg;
pub use circle::Circle;
pub use figure::{area_of, Figure};
pub use point::Point;
pub use polygon::Polygon;
pub use quad::{Parallelogram, Trapezoid};
pub use triangle::Triangle;
pub(crate) use triangle::is_pythagorean;

/// Reject anything that is not a finite, strictly positive number (NaN included).
#[inline]
pub(crate) fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0 && v.is_finite())
}
