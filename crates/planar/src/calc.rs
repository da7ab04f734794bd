//! Stateless area formulas over plain scalars.
//!
//! Same contracts and reason strings as the figure types, without building a
//! figure value first.

use crate::error::{GeomError, Result};
use crate::shapes::{all_positive, Circle, Parallelogram, Trapezoid, Triangle};

/// `π r²`.
pub fn circle(radius: f64) -> Result<f64> {
    Circle::new(radius)?.area()
}

/// Heron's formula.
pub fn triangle(a: f64, b: f64, c: f64) -> Result<f64> {
    Triangle::from_sides(a, b, c)?.area()
}

/// `base · height / 2`.
pub fn triangle_base_height(base: f64, height: f64) -> Result<f64> {
    Triangle::from_base_height(base, height)?.area()
}

/// `base · height`.
pub fn parallelogram(base: f64, height: f64) -> Result<f64> {
    Parallelogram::from_base_height(base, height)?.area()
}

/// `(b + c) · height / 2` for parallel sides `b` and `c`.
pub fn trapezoid(b: f64, c: f64, height: f64) -> Result<f64> {
    Trapezoid::from_bases(b, c, height)?.area()
}

/// Exact Pythagorean test on the largest side. Only positivity is checked;
/// side triples violating the triangle inequality simply return `false`.
pub fn is_right_triangle(a: f64, b: f64, c: f64) -> Result<bool> {
    if !all_positive(&[a, b, c]) {
        return Err(GeomError::invalid("Sides should be positive"));
    }
    Ok(crate::shapes::is_pythagorean([a, b, c]))
}
