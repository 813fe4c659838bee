//! Triangle-patterns style: the star-pattern visibility sweeps applied to
//! the point list on canvas.

use crate::styles::masks::triangle_pattern_visible;
use crate::surface::Surface;
use starweave_core::{Hsla, Point, Srgb};
use starweave_text::TextPatternKind;

pub(crate) fn render(
    points: &[Point],
    time: f64,
    star_pattern: TextPatternKind,
    surface: &mut dyn Surface,
) {
    surface.clear(Srgb::BLACK);

    for (index, p) in points.iter().enumerate() {
        if triangle_pattern_visible(star_pattern, index, time) {
            surface.fill_circle(p.x, p.y, p.size, Hsla::new(p.hue, 0.7, 0.6, p.alpha));
        }
    }
}
