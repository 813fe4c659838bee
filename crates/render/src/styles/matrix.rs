//! Matrix rain style: one falling star glyph per layout point.
//!
//! Drops are created lazily from the first point list seen after a reset
//! (x kept from the layout, y randomized) and persist across frames, unlike
//! every other style's per-frame point consumption.

use crate::surface::Surface;
use starweave_core::{Hsla, Point, Srgb, Xorshift64};

/// The glyph alphabet drops cycle through.
pub const MATRIX_GLYPHS: &[char] = &[
    '★', '✦', '✧', '✩', '✪', '✫', '✬', '✭', '✮', '✯', '✰', '✱', '✲', '✳', '✴', '✵', '✶',
    '✷', '✸', '✹', '✺', '✻', '✼', '✽', '✾', '✿', '❀', '❁', '❂', '❃', '❄', '❅', '❆', '❇',
    '❈', '❉', '❊', '❋',
];

/// Glyph cell size in pixels; fall speed is measured in cells per frame.
pub const FONT_SIZE: f64 = 20.0;
/// Length of the fading trail above each glyph.
const TRAIL: f64 = 100.0;
/// Chance per frame that an off-screen drop resets to the top.
const RESET_PROBABILITY: f64 = 0.025;

/// One falling glyph.
#[derive(Debug, Clone)]
pub struct MatrixDrop {
    pub x: f64,
    pub y: f64,
    /// Cells per frame.
    pub speed: f64,
    pub glyph: char,
}

fn random_glyph(rng: &mut Xorshift64) -> char {
    MATRIX_GLYPHS[rng.next_usize(MATRIX_GLYPHS.len())]
}

/// Builds one drop per layout point: x pinned to the point, y scattered
/// over the full height.
pub(crate) fn init_drops(points: &[Point], height: f64, rng: &mut Xorshift64) -> Vec<MatrixDrop> {
    points
        .iter()
        .map(|p| MatrixDrop {
            x: p.x,
            y: rng.next_f64() * height,
            speed: rng.next_f64() * 3.0 + 1.0,
            glyph: random_glyph(rng),
        })
        .collect()
}

pub(crate) fn render(
    drops: &mut Vec<MatrixDrop>,
    rng: &mut Xorshift64,
    height: f64,
    surface: &mut dyn Surface,
) {
    surface.fade(Srgb::BLACK, 0.1);
    let green = Hsla::new(120.0, 1.0, 0.5, 1.0);

    for drop in drops.iter_mut() {
        surface.draw_glyph(drop.glyph, drop.x, drop.y, FONT_SIZE, green, TRAIL);

        drop.y += drop.speed * FONT_SIZE;
        if drop.y > height && rng.next_f64() > 1.0 - RESET_PROBABILITY {
            drop.y = 0.0;
            drop.glyph = random_glyph(rng);
        }
    }
}
