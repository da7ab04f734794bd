//! Curated surface for callers that want every figure and the facade in one import.
//!
//! Prefer these re-exports over reaching into `shapes` submodules.

pub use crate::calc;
pub use crate::error::{GeomError, Result};
pub use crate::shapes::{
    area_of, Circle, Figure, GeomCfg, Parallelogram, Point, Polygon, Trapezoid, Triangle,
};

/// Area of any figure held by value or reference.
///
/// Shorthand for [`area_of`] when the figure is known to be present.
#[inline]
pub fn area<F: Figure + ?Sized>(figure: &F) -> Result<f64> {
    figure.area()
}
