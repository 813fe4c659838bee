//! Spiral galaxy style: each point's polar angle around the canvas center
//! gains an offset growing with time and with distance, twisting any layout
//! into swirling arms. Brightness falls off toward the rim.

use crate::surface::Surface;
use glam::DVec2;
use starweave_core::{Hsla, Point, Srgb};

/// Deep blue fade color for the trailing effect.
const SPACE_BLUE: Srgb = Srgb {
    r: 0.0,
    g: 0.0,
    b: 20.0 / 255.0,
};

pub(crate) fn render(
    points: &[Point],
    time: f64,
    width: f64,
    height: f64,
    surface: &mut dyn Surface,
) {
    surface.fade(SPACE_BLUE, 0.1);
    let center = DVec2::new(width / 2.0, height / 2.0);
    let rim = width.min(height) / 2.0;

    for p in points {
        let offset = p.position() - center;
        let distance = offset.length();
        let angle = offset.y.atan2(offset.x) + time * 0.001 + distance * 0.01;
        let swirled = center + DVec2::from_angle(angle) * distance;

        let brightness = (1.0 - distance / rim).max(0.2);

        surface.fill_circle(
            swirled.x,
            swirled.y,
            p.size * brightness,
            Hsla::new(p.hue, 0.7, brightness * 0.6 + 0.2, p.alpha * brightness),
        );
    }
}
