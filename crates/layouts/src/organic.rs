//! Irregular layouts: hash-scattered points, the flow field, the sampled
//! voronoi approximation, and the recursive fractal burst.

use crate::{count, hash::index_hash};
use glam::DVec2;
use starweave_core::Point;
use std::f64::consts::TAU;

/// Salt offsets decorrelating the x and y hash streams.
const SALT_X: u64 = 0;
const SALT_Y: u64 = 1000;

/// Hash-scattered points with a small circular time drift.
///
/// Base positions come from [`index_hash`], so the scatter is identical
/// every frame; only the drift term animates.
pub fn scatter(width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    let n = count(200.0 * density);
    let mut points = Vec::with_capacity(n);

    for i in 0..n {
        let fi = i as f64;
        let x = index_hash(i as u64, SALT_X) * width;
        let y = index_hash(i as u64, SALT_Y) * height;
        let drift_x = (time * 0.001 + fi * 0.1).sin() * 20.0;
        let drift_y = (time * 0.001 + fi * 0.1).cos() * 20.0;

        points.push(Point::new(
            x + drift_x,
            y + drift_y,
            2.0 + (time * 0.002 + fi).sin() * 2.0,
            time * 0.1 + fi * 10.0,
            0.6 + (time * 0.001 + fi).sin() * 0.3,
        ));
    }
    points
}

/// Grid of points displaced 20 px along a direction field
/// `angle = sin(x·0.01 + t)·cos(y·0.01 + t)·2π`; hue encodes the local
/// flow angle.
pub fn flow_field(width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    let spacing = (30.0 * density).max(15.0);
    let cols = count(width / spacing);
    let rows = count(height / spacing);
    let mut points = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let (c, r) = (col as f64, row as f64);
            let x = c * spacing;
            let y = r * spacing;
            let angle =
                (x * 0.01 + time * 0.001).sin() * (y * 0.01 + time * 0.001).cos() * TAU;
            let flow = DVec2::new(x, y) + DVec2::from_angle(angle) * 20.0;

            points.push(Point::new(
                flow.x,
                flow.y,
                2.0 + (time * 0.002 + c + r).sin() * 1.5,
                angle.to_degrees() + time * 0.1,
                0.7,
            ));
        }
    }
    points
}

/// A voronoi seed site: hash-positioned, hue spread evenly over the wheel.
struct VoronoiSeed {
    x: f64,
    y: f64,
    hue: f64,
}

/// Spacing of the voronoi sample grid, in pixels.
const VORONOI_SAMPLE_SPACING: f64 = 20.0;

/// Sampled voronoi approximation: every 20 px grid sample takes the hue of
/// its nearest seed site (linear scan; seed counts stay tiny).
///
/// This deliberately approximates cells by sampling rather than computing
/// true boundaries. Zero seeds (density rounding down) yields an empty list.
pub fn voronoi(width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    let seed_count = count(20.0 * density);
    if seed_count == 0 {
        return Vec::new();
    }
    let seeds: Vec<VoronoiSeed> = (0..seed_count)
        .map(|i| VoronoiSeed {
            x: index_hash(i as u64, SALT_X) * width,
            y: index_hash(i as u64, SALT_Y) * height,
            hue: (i as f64 * 360.0 / seed_count as f64 + time * 0.1).rem_euclid(360.0),
        })
        .collect();

    let cols = count(width / VORONOI_SAMPLE_SPACING);
    let rows = count(height / VORONOI_SAMPLE_SPACING);
    let mut points = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let (c, r) = (col as f64, row as f64);
            let x = c * VORONOI_SAMPLE_SPACING;
            let y = r * VORONOI_SAMPLE_SPACING;

            let mut nearest = &seeds[0];
            let mut min_distance = f64::INFINITY;
            for seed in &seeds {
                let d = ((x - seed.x).powi(2) + (y - seed.y).powi(2)).sqrt();
                if d < min_distance {
                    min_distance = d;
                    nearest = seed;
                }
            }

            points.push(Point::new(
                x + (time * 0.001 + c * 0.1).sin() * 5.0,
                y + (time * 0.001 + r * 0.1).cos() * 5.0,
                2.0 + (time * 0.002 + min_distance * 0.01).sin(),
                nearest.hue,
                0.6 + (time * 0.001 + min_distance * 0.01).sin() * 0.3,
            ));
        }
    }
    points
}

/// Branching factor of the fractal burst.
const FRACTAL_BRANCHES: usize = 5;
/// Starting size of the root fractal point.
const FRACTAL_ROOT_SIZE: f64 = 30.0;

/// Recursive fractal burst from the canvas center: each level emits a point
/// and spawns five children at evenly spaced angles, 0.6× the size, until
/// depth or size runs out. A child outside the canvas prunes only its own
/// branch.
pub fn fractal(width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    let max_depth = count(4.0 * density) as i32;
    let mut points = Vec::new();
    fractal_branch(
        &mut points,
        width,
        height,
        time,
        DVec2::new(width / 2.0, height / 2.0),
        FRACTAL_ROOT_SIZE,
        max_depth,
    );
    points
}

fn fractal_branch(
    points: &mut Vec<Point>,
    width: f64,
    height: f64,
    time: f64,
    at: DVec2,
    size: f64,
    depth: i32,
) {
    if depth <= 0 || size < 2.0 {
        return;
    }
    points.push(Point::new(
        at.x,
        at.y,
        size * 0.5,
        time * 0.1 + depth as f64 * 60.0,
        0.6 + depth as f64 * 0.1,
    ));

    for i in 0..FRACTAL_BRANCHES {
        let angle = i as f64 / FRACTAL_BRANCHES as f64 * TAU + time * 0.001;
        let child = at + DVec2::from_angle(angle) * size * 2.0;
        if (0.0..=width).contains(&child.x) && (0.0..=height).contains(&child.y) {
            fractal_branch(points, width, height, time, child, size * 0.6, depth - 1);
        }
    }
}
