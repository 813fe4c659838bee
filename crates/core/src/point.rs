//! The point entity produced by every layout generator.
//!
//! A `Point` is a plain value: position, dot radius, hue angle, and opacity.
//! Lists of points are produced fresh on every generation call and consumed
//! by the renderer within the same frame; nothing holds onto them.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A single dot in a generated layout.
///
/// Invariants are enforced at construction via [`Point::new`]:
/// `hue` is wrapped into `[0, 360)` and `alpha` is clamped to `[0, 1]`.
/// `x`, `y`, and `size` are taken as given (layouts may legitimately place
/// points slightly outside the canvas for jitter effects).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Dot radius in pixels.
    pub size: f64,
    /// Hue angle in degrees, `[0, 360)`.
    pub hue: f64,
    /// Opacity, `[0, 1]`.
    pub alpha: f64,
}

impl Point {
    /// Creates a point, wrapping `hue` into `[0, 360)` and clamping `alpha`
    /// to `[0, 1]`.
    pub fn new(x: f64, y: f64, size: f64, hue: f64, alpha: f64) -> Self {
        Self {
            x,
            y,
            size,
            hue: hue.rem_euclid(360.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Position as a vector.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// True if every component is finite and hue/alpha are in range.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.size.is_finite()
            && (0.0..360.0).contains(&self.hue)
            && (0.0..=1.0).contains(&self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_negative_hue() {
        let p = Point::new(0.0, 0.0, 1.0, -30.0, 0.5);
        assert!((p.hue - 330.0).abs() < 1e-12);
    }

    #[test]
    fn new_wraps_hue_above_360() {
        let p = Point::new(0.0, 0.0, 1.0, 725.0, 0.5);
        assert!((p.hue - 5.0).abs() < 1e-12);
    }

    #[test]
    fn new_clamps_alpha() {
        assert_eq!(Point::new(0.0, 0.0, 1.0, 0.0, 1.4).alpha, 1.0);
        assert_eq!(Point::new(0.0, 0.0, 1.0, 0.0, -0.2).alpha, 0.0);
    }

    #[test]
    fn position_returns_xy() {
        let p = Point::new(3.0, 4.0, 1.0, 0.0, 1.0);
        assert_eq!(p.position(), DVec2::new(3.0, 4.0));
    }

    #[test]
    fn is_valid_rejects_nan_position() {
        let mut p = Point::new(0.0, 0.0, 1.0, 0.0, 1.0);
        p.x = f64::NAN;
        assert!(!p.is_valid());
    }

    #[test]
    fn json_round_trip() {
        let p = Point::new(10.5, -2.0, 3.0, 120.0, 0.8);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn new_always_satisfies_invariants(
                x in -1e6_f64..1e6,
                y in -1e6_f64..1e6,
                size in 0.0_f64..100.0,
                hue in -10_000.0_f64..10_000.0,
                alpha in -2.0_f64..3.0,
            ) {
                let p = Point::new(x, y, size, hue, alpha);
                prop_assert!(p.is_valid(), "invalid point: {p:?}");
            }
        }
    }
}
