//! Wave interference style: two axis-aligned oscillators plus one radial
//! wave from the canvas center; points draw only where the combined
//! amplitude magnitude clears a threshold.

use crate::surface::Surface;
use starweave_core::{Hsla, Point, Srgb};

/// Minimum |amplitude| for a point to draw.
const THRESHOLD: f64 = 0.3;

pub(crate) fn render(
    points: &[Point],
    time: f64,
    width: f64,
    height: f64,
    surface: &mut dyn Surface,
) {
    surface.clear(Srgb::BLACK);
    let (cx, cy) = (width / 2.0, height / 2.0);

    for p in points {
        let wave1 = ((p.x - width * 0.3) * 0.02 + time * 0.005).sin()
            * ((p.y - height * 0.3) * 0.02 + time * 0.005).sin();
        let wave2 = ((p.x - width * 0.7) * 0.02 + time * 0.003).sin()
            * ((p.y - height * 0.7) * 0.02 + time * 0.003).sin();
        let distance = ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt();
        let wave3 = (distance * 0.02 - time * 0.01).sin();

        let amplitude = (wave1 + wave2 + wave3) / 3.0;
        if amplitude.abs() > THRESHOLD {
            surface.fill_circle(
                p.x,
                p.y,
                amplitude.abs() * p.size * 3.0,
                Hsla::new(
                    amplitude * 180.0 + p.hue + time / 10.0,
                    0.8,
                    amplitude.abs() * 0.7 + 0.3,
                    p.alpha,
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCmd, Recording};

    fn spread_points(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let f = i as f64;
                Point::new((f * 37.0) % 640.0, (f * 53.0) % 480.0, 3.0, 180.0, 0.8)
            })
            .collect()
    }

    #[test]
    fn threshold_suppresses_some_points() {
        let points = spread_points(200);
        let mut surface = Recording::new();
        render(&points, 400.0, 640.0, 480.0, &mut surface);
        let drawn = surface.circle_count();
        assert!(drawn > 0, "interference should light up some points");
        assert!(drawn < points.len(), "and suppress others");
    }

    #[test]
    fn drawn_sizes_scale_with_amplitude_bound() {
        // |amplitude| <= 1, so radius <= size * 3.
        let points = spread_points(200);
        let mut surface = Recording::new();
        render(&points, 1234.0, 640.0, 480.0, &mut surface);
        for cmd in surface.commands() {
            if let DrawCmd::Circle { radius, color, .. } = cmd {
                // radius = |amp| * size * 3 with size 3 and |amp| > 0.3.
                assert!(*radius > THRESHOLD * 9.0 * 0.999, "radius {radius}");
                assert!(*radius <= 9.0 + 1e-9, "radius {radius}");
                assert!(color.l >= 0.3 - 1e-9 && color.l <= 1.0);
            }
        }
    }

    #[test]
    fn clears_to_black_every_frame() {
        let mut surface = Recording::new();
        render(&[], 0.0, 640.0, 480.0, &mut surface);
        assert_eq!(surface.commands().len(), 1);
        assert_eq!(surface.commands()[0], DrawCmd::Clear { color: Srgb::BLACK });
    }
}
