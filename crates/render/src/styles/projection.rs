//! Pseudo-3D style: rotates the flat point cloud in 3D and projects it back
//! with a simple perspective divide.
//!
//! Depth comes from a sine of the point's own x position, yaw spins with
//! time, pitch rocks gently. Size and brightness scale with projected depth.

use crate::surface::Surface;
use glam::{DMat3, DVec3};
use starweave_core::{Hsla, Point, Srgb};

/// Perspective focal length in pixels.
const FOCAL: f64 = 500.0;
/// Amplitude of the per-point depth wave.
const DEPTH_AMPLITUDE: f64 = 50.0;

pub(crate) fn render(
    points: &[Point],
    time: f64,
    width: f64,
    height: f64,
    surface: &mut dyn Surface,
) {
    surface.clear(Srgb::BLACK);

    let yaw = time / 1000.0;
    let pitch = (time / 2000.0).sin() * 0.3;
    // from_rotation_y(-yaw) then from_rotation_x(pitch) reproduces the
    // yaw-then-pitch frame: x' = x·cos − z·sin, z' = x·sin + z·cos, then
    // y'' = y·cos − z'·sin, z'' = y·sin + z'·cos.
    let rotation = DMat3::from_rotation_x(pitch) * DMat3::from_rotation_y(-yaw);
    let (cx, cy) = (width / 2.0, height / 2.0);

    for p in points {
        let v = DVec3::new(
            p.x - cx,
            p.y - cy,
            (time * 0.001 + p.x * 0.01).sin() * DEPTH_AMPLITUDE,
        );
        let r = rotation * v;
        if r.z <= -FOCAL {
            // Behind the camera plane; the perspective divide would flip.
            continue;
        }
        let scale = FOCAL / (FOCAL + r.z);
        let x2d = cx + r.x * scale;
        let y2d = cy + r.y * scale;
        let brightness = ((r.z + 200.0) / 400.0).clamp(0.3, 1.0);

        surface.fill_circle(
            x2d,
            y2d,
            p.size * scale,
            Hsla::new(p.hue, 0.7, brightness * 0.6, p.alpha * brightness),
        );
    }
}
