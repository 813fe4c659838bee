//! Animation configuration and reproducible scene descriptions.
//!
//! [`AnimationConfig`] replaces the ambient per-frame globals of a UI
//! (density/speed sliders, pattern size, selected star pattern) with an
//! explicit immutable value that callers pass into generation and rendering.
//! [`Scene`] captures everything needed to re-render a clip byte-for-byte.

use crate::error::StarweaveError;
use crate::params::{param_f64, param_string, param_usize};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default speed slider position; `speed / 50` is the time multiplier, so 50
/// means real time.
pub const DEFAULT_SPEED: f64 = 50.0;
/// Default density multiplier (the UI's 100%).
pub const DEFAULT_DENSITY: f64 = 1.0;
/// Density ceiling; the UI slider tops out at 200%.
pub const MAX_DENSITY: f64 = 2.0;
/// Default block size for text patterns.
pub const DEFAULT_PATTERN_SIZE: usize = 8;
/// Star pattern used when none is configured.
pub const DEFAULT_STAR_PATTERN: &str = "rightTriangle";

/// Per-frame animation settings.
///
/// `density` scales point/tile counts across all layouts and is kept in
/// `(0, 2]`; `speed` is a percentage where 50 is real time; `pattern_size`
/// is the row count for text block patterns; `star_pattern` names the
/// visibility-mask variant shared by the text builder and the
/// triangle-patterns render style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub density: f64,
    pub speed: f64,
    pub pattern_size: usize,
    pub star_pattern: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            speed: DEFAULT_SPEED,
            pattern_size: DEFAULT_PATTERN_SIZE,
            star_pattern: DEFAULT_STAR_PATTERN.to_owned(),
        }
    }
}

impl AnimationConfig {
    /// Builds a config from a loose JSON object, falling back to defaults
    /// for missing or mistyped keys, then clamping into valid ranges.
    pub fn from_json(params: &Value) -> Self {
        Self {
            density: param_f64(params, "density", DEFAULT_DENSITY),
            speed: param_f64(params, "speed", DEFAULT_SPEED),
            pattern_size: param_usize(params, "pattern_size", DEFAULT_PATTERN_SIZE),
            star_pattern: param_string(params, "star_pattern", DEFAULT_STAR_PATTERN),
        }
        .clamped()
    }

    /// Returns a copy with `density` in `(0, 2]`, `speed` positive, and
    /// `pattern_size` at least 1.
    pub fn clamped(mut self) -> Self {
        if !self.density.is_finite() || self.density <= 0.0 {
            self.density = DEFAULT_DENSITY;
        }
        self.density = self.density.min(MAX_DENSITY);
        if !self.speed.is_finite() || self.speed <= 0.0 {
            self.speed = DEFAULT_SPEED;
        }
        self.pattern_size = self.pattern_size.max(1);
        self
    }

    /// The multiplier applied to elapsed time before generation/rendering.
    pub fn time_scale(&self) -> f64 {
        self.speed / 50.0
    }
}

/// Reproducible description of a rendered clip.
///
/// Two identical `Scene` values fed to the same binary produce identical
/// frames: the PRNG seed pins the matrix/explosion randomness and everything
/// else is deterministic in (layout, style, size, time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub layout: String,
    pub style: String,
    pub width: f64,
    pub height: f64,
    pub config: AnimationConfig,
    pub seed: u64,
    pub frames: usize,
}

impl Scene {
    /// Creates a scene with the default config and a single frame.
    pub fn new(layout: &str, style: &str, width: f64, height: f64, seed: u64) -> Self {
        Self {
            layout: layout.to_owned(),
            style: style.to_owned(),
            width,
            height,
            config: AnimationConfig::default(),
            seed,
            frames: 1,
        }
    }

    /// Validates dimensions and frame count.
    pub fn validate(&self) -> Result<(), StarweaveError> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(StarweaveError::InvalidDimensions);
        }
        if self.frames == 0 {
            return Err(StarweaveError::InvalidScene("frames must be >= 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_config_is_real_time_full_density() {
        let c = AnimationConfig::default();
        assert!((c.density - 1.0).abs() < f64::EPSILON);
        assert!((c.time_scale() - 1.0).abs() < f64::EPSILON);
        assert_eq!(c.pattern_size, 8);
        assert_eq!(c.star_pattern, "rightTriangle");
    }

    #[test]
    fn from_json_reads_all_fields() {
        let c = AnimationConfig::from_json(&json!({
            "density": 0.5,
            "speed": 100.0,
            "pattern_size": 4,
            "star_pattern": "diamond",
        }));
        assert!((c.density - 0.5).abs() < f64::EPSILON);
        assert!((c.time_scale() - 2.0).abs() < f64::EPSILON);
        assert_eq!(c.pattern_size, 4);
        assert_eq!(c.star_pattern, "diamond");
    }

    #[test]
    fn from_json_defaults_missing_fields() {
        let c = AnimationConfig::from_json(&json!({}));
        assert_eq!(c, AnimationConfig::default());
    }

    #[test]
    fn clamped_rejects_zero_and_negative_density() {
        for bad in [0.0, -1.0, f64::NAN] {
            let c = AnimationConfig {
                density: bad,
                ..AnimationConfig::default()
            }
            .clamped();
            assert!((c.density - DEFAULT_DENSITY).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn clamped_caps_density_at_two() {
        let c = AnimationConfig {
            density: 9.0,
            ..AnimationConfig::default()
        }
        .clamped();
        assert!((c.density - MAX_DENSITY).abs() < f64::EPSILON);
    }

    #[test]
    fn clamped_floors_pattern_size_at_one() {
        let c = AnimationConfig {
            pattern_size: 0,
            ..AnimationConfig::default()
        }
        .clamped();
        assert_eq!(c.pattern_size, 1);
    }

    #[test]
    fn time_scale_halves_at_speed_25() {
        let c = AnimationConfig {
            speed: 25.0,
            ..AnimationConfig::default()
        };
        assert!((c.time_scale() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn scene_json_round_trip() {
        let mut s = Scene::new("fibonacci", "spiral", 800.0, 600.0, 42);
        s.frames = 120;
        let json = serde_json::to_string(&s).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn scene_validate_rejects_bad_dimensions() {
        assert!(Scene::new("grid", "waves", 0.0, 100.0, 1).validate().is_err());
        assert!(Scene::new("grid", "waves", 100.0, -5.0, 1)
            .validate()
            .is_err());
        assert!(Scene::new("grid", "waves", 100.0, f64::NAN, 1)
            .validate()
            .is_err());
    }

    #[test]
    fn scene_validate_rejects_zero_frames() {
        let mut s = Scene::new("grid", "waves", 100.0, 100.0, 1);
        s.frames = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn scene_validate_accepts_sane_scene() {
        assert!(Scene::new("grid", "waves", 640.0, 480.0, 7).validate().is_ok());
    }
}
