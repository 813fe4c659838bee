//! Morphing style: point visibility morphs triangle → square → diamond →
//! circle over four 3-second phases.

use crate::styles::masks::{ease_in_out, morphing_visible, MORPH_PHASE_MS};
use crate::surface::Surface;
use starweave_core::{Hsla, Point, Srgb};

pub(crate) fn render(points: &[Point], time: f64, surface: &mut dyn Surface) {
    surface.clear(Srgb::BLACK);

    let phase = ((time / MORPH_PHASE_MS).floor() as i64).rem_euclid(4) as usize;
    let t = (time / MORPH_PHASE_MS).rem_euclid(1.0);
    let ease = ease_in_out(t);

    for (index, p) in points.iter().enumerate() {
        if morphing_visible(index, phase, ease) {
            surface.fill_circle(p.x, p.y, p.size, Hsla::new(p.hue, 0.7, 0.6, p.alpha));
        }
    }
}
