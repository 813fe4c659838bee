//! Radial-family layouts: concentric rings, mandala petals, and the
//! phyllotaxis spiral.

use crate::count;
use starweave_core::Point;
use std::f64::consts::{PI, TAU};

/// Golden angle `π(3 − √5)`, the divergence angle of phyllotaxis spirals.
pub const GOLDEN_ANGLE: f64 = PI * (3.0 - 2.236_067_977_499_79);

/// Step between points along a mandala petal, in pixels.
const PETAL_STEP: f64 = 15.0;

/// Concentric rings with ring-count proportional to density, per-ring point
/// count proportional to circumference, and rotation rate proportional to
/// ring index.
pub fn circular(width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    let center = (width / 2.0, height / 2.0);
    let max_radius = width.min(height) / 2.0 - 20.0;
    let rings = count(8.0 * density);
    if max_radius <= 0.0 {
        return Vec::new();
    }
    let mut points = Vec::new();

    for ring in 1..=rings {
        let rf = ring as f64;
        let radius = rf / rings as f64 * max_radius;
        let in_ring = count(TAU * radius / 20.0).max(6);

        for i in 0..in_ring {
            let angle = i as f64 / in_ring as f64 * TAU + time * 0.001 * rf;
            points.push(Point::new(
                center.0 + angle.cos() * radius,
                center.1 + angle.sin() * radius,
                3.0 + (time * 0.002 + rf).sin() * 2.0,
                time * 0.1 + rf * 30.0 + i as f64 * 10.0,
                0.8,
            ));
        }
    }
    points
}

/// Mandala: `floor(6·density)` layers, `8·layer` petals per layer, points
/// marching outward along each petal with a sine-modulated radius, so dot
/// density swells mid-petal and grows with the layer index.
pub fn mandala(width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    let center = (width / 2.0, height / 2.0);
    let max_radius = width.min(height) / 2.0 - 20.0;
    let layers = count(6.0 * density);
    if max_radius <= 0.0 {
        return Vec::new();
    }
    let mut points = Vec::new();

    for layer in 1..=layers {
        let lf = layer as f64;
        let radius = lf / layers as f64 * max_radius;
        if radius <= 0.0 {
            continue;
        }
        let petals = layer * 8;

        for petal in 0..petals {
            let pf = petal as f64;
            let angle = pf / petals as f64 * TAU + time * 0.001 * lf;

            let mut r = 0.0;
            while r <= radius {
                let petal_radius = r * (r / radius * PI).sin();
                points.push(Point::new(
                    center.0 + angle.cos() * petal_radius,
                    center.1 + angle.sin() * petal_radius,
                    2.0 + (time * 0.002 + lf + pf).sin() * 1.5,
                    time * 0.1 + lf * 45.0 + pf * 5.0,
                    0.7,
                ));
                r += PETAL_STEP;
            }
        }
    }
    points
}

/// Fibonacci (phyllotaxis) spiral: point `i` at angle `i·goldenAngle + t` and
/// radius `8·√i`; generation stops once the radius leaves the inscribed
/// half-extent.
pub fn fibonacci(width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    let center = (width / 2.0, height / 2.0);
    let max_points = count(300.0 * density);
    let max_radius = width.min(height) / 2.0;
    let mut points = Vec::new();

    for i in 0..max_points {
        let fi = i as f64;
        let angle = fi * GOLDEN_ANGLE + time * 0.001;
        let radius = fi.sqrt() * 8.0;
        if radius > max_radius {
            break;
        }

        points.push(Point::new(
            center.0 + angle.cos() * radius,
            center.1 + angle.sin() * radius,
            2.0 + (time * 0.002 + fi * 0.1).sin() * 2.0,
            fi * 5.0 + time * 0.1,
            0.8,
        ));
    }
    points
}
