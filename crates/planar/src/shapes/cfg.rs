//! Numeric tolerances.
//!
//! Only the circumcircle constructor consults a tolerance. Equality of points
//! and the right-triangle predicate stay exact.

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Three points count as collinear when their triangle area is at most
    /// `eps_degenerate * longest_side²`.
    pub eps_degenerate: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_degenerate: 1e-12,
        }
    }
}

impl GeomCfg {
    /// Scale-free collinearity test for a triangle of the given area and longest side.
    #[inline]
    pub fn is_degenerate(&self, area: f64, longest_side: f64) -> bool {
        !(area > self.eps_degenerate * longest_side * longest_side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_threshold_scales_with_size() {
        let cfg = GeomCfg::default();
        assert!(cfg.is_degenerate(0.0, 1.0));
        assert!(cfg.is_degenerate(f64::NAN, 1.0));
        assert!(!cfg.is_degenerate(0.5, 1.0));
        // Same shape scaled by 1e6: area grows by 1e12, side² by 1e12.
        assert!(!cfg.is_degenerate(0.5e12, 1e6));
        assert!(cfg.is_degenerate(1e-3, 1e6));
    }
}
