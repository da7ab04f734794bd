//! Simple polygons given by an ordered vertex list.

use crate::error::{require, GeomError, Result};
use crate::parallelogram_area;

use super::point::Point;

/// Ordered vertex list; order defines the traversal for the shoelace sum.
///
/// Invariants:
/// - No two vertices are equal (exact coordinate equality).
/// - Self-intersection is not detected; such input yields a deterministic but
///   meaningless area.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Validate finiteness and uniqueness of the vertices. The vertex count is
    /// checked by [`area`](Self::area).
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if !vertices.iter().all(|p| p.x().is_finite() && p.y().is_finite()) {
            return Err(GeomError::invalid(
                "The list of vertices must contain only finite coordinates",
            ));
        }
        if has_duplicates(&vertices) {
            return Err(GeomError::invalid(
                "The list of vertices must not contain duplicate points",
            ));
        }
        Ok(Self { vertices })
    }

    /// Construct from a possibly absent list of possibly absent vertices.
    pub fn try_new(vertices: Option<Vec<Option<Point>>>) -> Result<Self> {
        let vertices = require(vertices, "The list of vertices must not be null")?;
        let vertices = vertices
            .into_iter()
            .collect::<Option<Vec<Point>>>()
            .ok_or_else(|| {
                GeomError::invalid("The list of vertices must not contain null elements")
            })?;
        Self::new(vertices)
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shoelace sum / 2 with sign: positive for counterclockwise order.
    pub fn signed_area(&self) -> Result<f64> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(GeomError::invalid("A polygon needs at least 3 vertices"));
        }
        // Anchor at the first vertex; the sum is translation invariant and the
        // smaller magnitudes lose less to cancellation.
        let origin = self.vertices[0].to_vector();
        let twice: f64 = (1..n - 1)
            .map(|i| {
                let p = self.vertices[i].to_vector() - origin;
                let q = self.vertices[i + 1].to_vector() - origin;
                parallelogram_area(p, q)
            })
            .sum();
        if !twice.is_finite() {
            return Err(GeomError::invalid("Polygon area is not representable"));
        }
        Ok(twice / 2.0)
    }

    /// Unsigned area; independent of winding order.
    #[inline]
    pub fn area(&self) -> Result<f64> {
        Ok(self.signed_area()?.abs())
    }

    /// Sum of edge lengths including the closing edge.
    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| self.vertices[i].distance_to(&self.vertices[(i + 1) % n]))
            .sum()
    }
}

/// All-pairs scan; order-independent and exact.
fn has_duplicates(points: &[Point]) -> bool {
    points
        .iter()
        .enumerate()
        .any(|(i, p)| points[i + 1..].iter().any(|q| p == q))
}
