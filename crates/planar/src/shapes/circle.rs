//! Circles from a radius, a center and boundary point, or three boundary points.

use std::f64::consts::PI;

use crate::error::{require, GeomError, Result};

use super::cfg::GeomCfg;
use super::point::Point;
use super::triangle::Triangle;

/// A circle, stored by radius only.
///
/// Invariants:
/// - `radius > 0` for circles built by [`new`](Self::new) or the three-point forms.
/// - [`from_center_and_point`](Self::from_center_and_point) accepts coinciding
///   points (radius 0); [`area`](Self::area) then fails.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        check_radius(radius)?;
        Ok(Self { radius })
    }

    /// Radius is the distance from `center` to `point`.
    #[inline]
    pub fn from_center_and_point(center: Point, point: Point) -> Self {
        Self {
            radius: center.distance_to(&point),
        }
    }

    pub fn try_from_center_and_point(center: Option<Point>, point: Option<Point>) -> Result<Self> {
        let center = require(center, "Point must not be null")?;
        let point = require(point, "Point must not be null")?;
        Ok(Self::from_center_and_point(center, point))
    }

    /// Circle through three points, with default tolerances.
    #[inline]
    pub fn circumscribed(a: Point, b: Point, c: Point) -> Result<Self> {
        Self::circumscribed_with(a, b, c, &GeomCfg::default())
    }

    /// Circle through three points: `R = |AB|·|BC|·|AC| / (4·area(ABC))`.
    ///
    /// Collinear (or nearly collinear, per `cfg`) points fail instead of
    /// producing an infinite or NaN radius.
    pub fn circumscribed_with(a: Point, b: Point, c: Point, cfg: &GeomCfg) -> Result<Self> {
        let triangle = Triangle::from_points(a, b, c)?;
        let area = triangle.area()?;
        let (ab, bc, ac) = (a.distance_to(&b), b.distance_to(&c), a.distance_to(&c));
        let longest = ab.max(bc).max(ac);
        if cfg.is_degenerate(area, longest) {
            tracing::debug!(area, longest, "rejecting collinear circumcircle points");
            return Err(GeomError::invalid("Points are collinear"));
        }
        // Divide before the second multiplication; the cubic product overflows first.
        let radius = ab * (bc / (4.0 * area)) * ac;
        if !radius.is_finite() {
            tracing::debug!(radius, "circumradius is not finite");
            return Err(GeomError::invalid("Points are collinear"));
        }
        Self::new(radius)
    }

    pub fn try_circumscribed(a: Option<Point>, b: Option<Point>, c: Option<Point>) -> Result<Self> {
        let a = require(a, "Point must not be null")?;
        let b = require(b, "Point must not be null")?;
        let c = require(c, "Point must not be null")?;
        Self::circumscribed(a, b, c)
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    #[inline]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// `π r²`; re-checks the radius.
    pub fn area(&self) -> Result<f64> {
        check_radius(self.radius)?;
        Ok(PI * self.radius * self.radius)
    }
}

#[inline]
fn check_radius(radius: f64) -> Result<()> {
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        Err(GeomError::invalid("Radius should be positive"))
    }
}
