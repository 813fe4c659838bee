//! The drawing surface abstraction.
//!
//! Styles emit four kinds of drawing operations; where those pixels land is
//! the surface's business. [`Recording`] captures the operations for tests
//! and inspection, [`PixelSurface`](crate::pixel::PixelSurface) rasterizes
//! them into an RGBA buffer.

use starweave_core::{Hsla, Srgb};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Full clear to an opaque color.
    Clear { color: Srgb },
    /// Low-alpha overlay of `color`, producing motion trails.
    Fade { color: Srgb, alpha: f64 },
    /// Filled circle.
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Hsla,
    },
    /// A glyph with a vertical fade trail of `trail` pixels above it.
    Glyph {
        glyph: char,
        x: f64,
        y: f64,
        size: f64,
        color: Hsla,
        trail: f64,
    },
}

/// Receiver of style drawing operations.
///
/// Object-safe so the animation driver can hold `&mut dyn Surface`.
pub trait Surface {
    fn clear(&mut self, color: Srgb);
    fn fade(&mut self, color: Srgb, alpha: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Hsla);
    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, size: f64, color: Hsla, trail: f64);
}

/// Surface that records every operation instead of drawing.
#[derive(Debug, Default)]
pub struct Recording {
    commands: Vec<DrawCmd>,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands, in emission order.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Number of recorded circle fills.
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Circle { .. }))
            .count()
    }

    /// Number of recorded glyph draws.
    pub fn glyph_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Glyph { .. }))
            .count()
    }

    /// Drops all recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for Recording {
    fn clear(&mut self, color: Srgb) {
        self.commands.push(DrawCmd::Clear { color });
    }

    fn fade(&mut self, color: Srgb, alpha: f64) {
        self.commands.push(DrawCmd::Fade { color, alpha });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Hsla) {
        self.commands.push(DrawCmd::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64, size: f64, color: Hsla, trail: f64) {
        self.commands.push(DrawCmd::Glyph {
            glyph,
            x,
            y,
            size,
            color,
            trail,
        });
    }
}
