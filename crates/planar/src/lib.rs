//! Area of planar figures.
//!
//! Figures are immutable values validated at construction: `Point`, `Polygon`,
//! `Circle`, `Triangle`, `Trapezoid`, `Parallelogram`. Every figure implements
//! [`Figure`](shapes::Figure), so callers can ask for an area without knowing
//! the concrete variant. The [`calc`] module offers the same formulas as plain
//! functions over scalars.
//!
//! Errors
//! - Every failure is a [`GeomError::InvalidArgument`] carrying a readable reason.
//! - Nothing panics on bad input; constructors and `area()` return [`Result`].

pub mod api;
pub mod calc;
pub mod error;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeomError, Result};
    pub use crate::shapes::{
        area_of, Circle, Figure, GeomCfg, Parallelogram, Point, Polygon, Trapezoid, Triangle,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise. One shoelace term.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
