//! Color types and conversion functions.
//!
//! Every color in the animation system originates as an HSL value (the
//! layouts emit a hue, the styles pick saturation/lightness), so the core
//! model is [`Hsla`] with a pure conversion to [`Srgb`] for raster output.
//! Uses `f64` throughout.

use serde::{Deserialize, Serialize};

/// HSL color with alpha. `h` in degrees `[0, 360)`, `s`/`l`/`a` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

/// sRGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Hsla {
    /// Creates an HSL color, wrapping hue into `[0, 360)` and clamping the
    /// other components to `[0, 1]`.
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }
}

impl Srgb {
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Quantizes to 8-bit channels with rounding, clamping out-of-range
    /// components first.
    pub fn to_bytes(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

/// Converts HSL to sRGB using the standard piecewise chroma formula.
///
/// An achromatic input (`s == 0`) maps every channel to `l`, so no hue
/// indeterminacy can leak through.
pub fn hsla_to_srgb(c: Hsla) -> Srgb {
    let h = c.h.rem_euclid(360.0);
    let s = c.s.clamp(0.0, 1.0);
    let l = c.l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Srgb { r: l, g: l, b: l };
    }

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = chroma * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    Srgb {
        r: r1 + m,
        g: g1 + m,
        b: b1 + m,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn pure_red_at_hue_zero() {
        let c = hsla_to_srgb(Hsla::new(0.0, 1.0, 0.5, 1.0));
        assert!(approx_eq(c.r, 1.0), "r: {}", c.r);
        assert!(approx_eq(c.g, 0.0), "g: {}", c.g);
        assert!(approx_eq(c.b, 0.0), "b: {}", c.b);
    }

    #[test]
    fn pure_green_at_hue_120() {
        let c = hsla_to_srgb(Hsla::new(120.0, 1.0, 0.5, 1.0));
        assert!(approx_eq(c.r, 0.0));
        assert!(approx_eq(c.g, 1.0));
        assert!(approx_eq(c.b, 0.0));
    }

    #[test]
    fn pure_blue_at_hue_240() {
        let c = hsla_to_srgb(Hsla::new(240.0, 1.0, 0.5, 1.0));
        assert!(approx_eq(c.r, 0.0));
        assert!(approx_eq(c.g, 0.0));
        assert!(approx_eq(c.b, 1.0));
    }

    #[test]
    fn zero_saturation_is_gray() {
        let c = hsla_to_srgb(Hsla::new(200.0, 0.0, 0.42, 1.0));
        assert!(approx_eq(c.r, 0.42));
        assert!(approx_eq(c.g, 0.42));
        assert!(approx_eq(c.b, 0.42));
    }

    #[test]
    fn full_lightness_is_white_for_any_hue() {
        for h in [0.0, 90.0, 180.0, 270.0, 359.0] {
            let c = hsla_to_srgb(Hsla::new(h, 0.7, 1.0, 1.0));
            assert!(approx_eq(c.r, 1.0) && approx_eq(c.g, 1.0) && approx_eq(c.b, 1.0));
        }
    }

    #[test]
    fn zero_lightness_is_black_for_any_hue() {
        for h in [0.0, 45.0, 222.0] {
            let c = hsla_to_srgb(Hsla::new(h, 0.7, 0.0, 1.0));
            assert!(approx_eq(c.r, 0.0) && approx_eq(c.g, 0.0) && approx_eq(c.b, 0.0));
        }
    }

    #[test]
    fn hsla_new_wraps_and_clamps() {
        let c = Hsla::new(-90.0, 1.5, -0.5, 2.0);
        assert!(approx_eq(c.h, 270.0));
        assert_eq!(c.s, 1.0);
        assert_eq!(c.l, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn to_bytes_quantizes_with_rounding() {
        let c = Srgb {
            r: 1.0,
            g: 0.5,
            b: 0.0,
        };
        assert_eq!(c.to_bytes(), [255, 128, 0]);
    }

    #[test]
    fn to_bytes_clamps_out_of_range() {
        let c = Srgb {
            r: 1.5,
            g: -0.1,
            b: 0.5,
        };
        assert_eq!(c.to_bytes(), [255, 0, 128]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn conversion_always_in_unit_range(
                h in -720.0_f64..720.0,
                s in 0.0_f64..=1.0,
                l in 0.0_f64..=1.0,
            ) {
                let c = hsla_to_srgb(Hsla::new(h, s, l, 1.0));
                prop_assert!((0.0..=1.0).contains(&c.r), "r out of range: {}", c.r);
                prop_assert!((0.0..=1.0).contains(&c.g), "g out of range: {}", c.g);
                prop_assert!((0.0..=1.0).contains(&c.b), "b out of range: {}", c.b);
            }

            #[test]
            fn hue_rotation_by_360_is_identity(
                h in 0.0_f64..360.0,
                s in 0.0_f64..=1.0,
                l in 0.0_f64..=1.0,
            ) {
                let a = hsla_to_srgb(Hsla::new(h, s, l, 1.0));
                let b = hsla_to_srgb(Hsla::new(h + 360.0, s, l, 1.0));
                prop_assert!((a.r - b.r).abs() < 1e-9);
                prop_assert!((a.g - b.g).abs() < 1e-9);
                prop_assert!((a.b - b.b).abs() < 1e-9);
            }
        }
    }
}
