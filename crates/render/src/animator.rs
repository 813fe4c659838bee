//! The animation driver: one instance per animation, ticked once per frame.
//!
//! Owns the pausable clock, the current layout/style selection, the config,
//! and the renderer. Every selection change resets the time origin and the
//! renderer's transient state; pausing freezes the adjusted time fed to
//! generation and rendering so the paused wall-clock interval never shows up
//! on screen.

use crate::surface::Surface;
use crate::{Renderer, StyleKind};
use starweave_core::{AnimationClock, AnimationConfig, Point, Srgb};
use starweave_layouts::LayoutKind;
use starweave_text::{showcase_frame, TextPatternKind};

/// Style name selecting the text showcase output path instead of a canvas
/// style.
pub const TEXT_SHOWCASE: &str = "textPattern";

/// Single-threaded animation driver.
pub struct Animator {
    layout: LayoutKind,
    style_name: String,
    star_pattern: TextPatternKind,
    config: AnimationConfig,
    clock: AnimationClock,
    renderer: Renderer,
}

impl Animator {
    /// Creates a driver starting its clock at `now` (milliseconds).
    ///
    /// Unknown layout names fall back to the grid; unknown style names
    /// render nothing until changed.
    pub fn new(layout: &str, style: &str, config: AnimationConfig, seed: u64, now: f64) -> Self {
        let config = config.clamped();
        let star_pattern = TextPatternKind::from_name(&config.star_pattern);
        Self {
            layout: LayoutKind::from_name(layout),
            style_name: style.to_owned(),
            star_pattern,
            config,
            clock: AnimationClock::new(now),
            renderer: Renderer::new(seed),
        }
    }

    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    pub fn style_name(&self) -> &str {
        &self.style_name
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Adjusted animation time at `now`: paused-gap-free elapsed time scaled
    /// by the speed multiplier.
    pub fn adjusted_time(&self, now: f64) -> f64 {
        self.clock.elapsed(now) * self.config.time_scale()
    }

    /// Switches the layout; resets time and transient render state.
    pub fn set_layout(&mut self, name: &str, now: f64) {
        self.layout = LayoutKind::from_name(name);
        self.reset(now);
    }

    /// Switches the style; resets time and transient render state.
    pub fn set_style(&mut self, name: &str, now: f64) {
        self.style_name = name.to_owned();
        self.reset(now);
    }

    /// Switches the star pattern; resets time and transient render state.
    pub fn set_star_pattern(&mut self, name: &str, now: f64) {
        self.star_pattern = TextPatternKind::from_name(name);
        self.config.star_pattern = name.to_owned();
        self.reset(now);
    }

    /// Replaces the config (sliders); does not reset the clock, matching
    /// live slider adjustment.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config.clamped();
        self.star_pattern = TextPatternKind::from_name(&self.config.star_pattern);
    }

    /// Freezes the animation at `now`.
    pub fn pause(&mut self, now: f64) {
        self.clock.pause(now);
    }

    /// Resumes at `now`; the paused interval is excluded from elapsed time.
    pub fn resume(&mut self, now: f64) {
        self.clock.resume(now);
    }

    /// Restarts the clock at zero and clears all transient render state.
    pub fn reset(&mut self, now: f64) {
        self.clock.reset(now);
        self.renderer.reset();
    }

    /// Generates this frame's point list without drawing (inspection path).
    pub fn generate_points(&self, now: f64, width: f64, height: f64) -> Vec<Point> {
        starweave_layouts::generate(
            self.layout,
            width,
            height,
            self.adjusted_time(now),
            self.config.density,
        )
    }

    /// Runs one frame at wall-clock `now` against a `width`×`height` canvas.
    ///
    /// Returns `Some(text)` when the selected style is the text showcase
    /// (the canvas is cleared and the block pattern is the frame's output);
    /// `None` for canvas styles. A frame always runs to completion.
    pub fn frame(
        &mut self,
        now: f64,
        width: f64,
        height: f64,
        surface: &mut dyn Surface,
    ) -> Option<String> {
        let time = self.adjusted_time(now);

        if self.style_name == TEXT_SHOWCASE {
            surface.clear(Srgb::BLACK);
            return Some(showcase_frame(time, self.config.pattern_size));
        }

        let points =
            starweave_layouts::generate(self.layout, width, height, time, self.config.density);
        if let Some(style) = StyleKind::from_name(&self.style_name) {
            self.renderer
                .render(style, &points, time, width, height, self.star_pattern, surface);
        }
        None
    }
}
