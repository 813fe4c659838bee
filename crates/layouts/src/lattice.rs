//! Lattice-family layouts: regular tilings of the canvas.
//!
//! Grid, hexagonal, and triangular are centered tilings with a sinusoidal
//! positional jitter; tessellation rotates a three-point triangular motif
//! inside each tile; pyramid stacks centered rows from the canvas bottom.

use crate::count;
use glam::DVec2;
use starweave_core::Point;

/// Square grid, centered, with shared x/y jitter per cell.
pub fn grid(width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    let spacing = (60.0 * density).max(20.0);
    let cols = count(width / spacing);
    let rows = count(height / spacing);
    let mut points = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let (c, r) = (col as f64, row as f64);
            let x = (c + 0.5) * spacing + (width - cols as f64 * spacing) / 2.0;
            let y = (r + 0.5) * spacing + (height - rows as f64 * spacing) / 2.0;
            let wave = (time * 0.001 + c * 0.5 + r * 0.5).sin() * 10.0;

            points.push(Point::new(
                x + wave,
                y + wave,
                3.0 + (time * 0.002 + c + r).sin() * 2.0,
                time * 0.1 + c * 20.0 + r * 20.0,
                0.8,
            ));
        }
    }
    points
}

/// Hexagonal tiling: odd columns shifted by half a hex height, points
/// falling outside the canvas discarded.
pub fn hexagonal(width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    let spacing = (50.0 * density).max(25.0);
    let hex_height = spacing * 3.0_f64.sqrt();
    let cols = count(width / (spacing * 1.5));
    let rows = count(height / hex_height);
    let mut points = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            let (c, r) = (col as f64, row as f64);
            let x = c * spacing * 1.5 + (width - cols as f64 * spacing * 1.5) / 2.0;
            let y = r * hex_height
                + (col % 2) as f64 * hex_height / 2.0
                + (height - rows as f64 * hex_height) / 2.0;

            if (0.0..=width).contains(&x) && (0.0..=height).contains(&y) {
                let wave = (time * 0.001 + c * 0.3 + r * 0.3).sin() * 5.0;
                points.push(Point::new(
                    x + wave,
                    y + wave,
                    3.0 + (time * 0.002 + c + r).sin() * 2.0,
                    time * 0.1 + c * 25.0 + r * 25.0,
                    0.8,
                ));
            }
        }
    }
    points
}

/// Triangular lattice: alternate rows shifted by half the spacing.
pub fn triangular(width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    let spacing = (50.0 * density).max(25.0);
    let row_height = spacing * 3.0_f64.sqrt() / 2.0;
    let cols = count(width / spacing);
    let rows = count(height / row_height);
    let mut points = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            let (c, r) = (col as f64, row as f64);
            let x = c * spacing
                + (row % 2) as f64 * spacing / 2.0
                + (width - cols as f64 * spacing) / 2.0;
            let y = r * row_height + (height - rows as f64 * row_height) / 2.0;

            if (0.0..=width).contains(&x) && (0.0..=height).contains(&y) {
                let wave = (time * 0.001 + c * 0.4 + r * 0.4).sin() * 8.0;
                points.push(Point::new(
                    x + wave,
                    y + wave,
                    3.0 + (time * 0.002 + c + r).sin() * 2.0,
                    time * 0.1 + c * 30.0 + r * 30.0,
                    0.8,
                ));
            }
        }
    }
    points
}

/// Offsets of the triangular motif inside one tessellation tile, as
/// fractions of the tile size.
const MOTIF: [DVec2; 3] = [
    DVec2::new(0.0, -1.0 / 3.0),
    DVec2::new(-1.0 / 3.0, 1.0 / 6.0),
    DVec2::new(1.0 / 3.0, 1.0 / 6.0),
];

/// Tiled three-point motif, rotated in unison around each tile center by a
/// time- and position-dependent angle.
pub fn tessellation(width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    let tile = (60.0 * density).max(30.0);
    let cols = count(width / tile);
    let rows = count(height / tile);
    let mut points = Vec::with_capacity(rows * cols * MOTIF.len());

    for row in 0..rows {
        for col in 0..cols {
            let (c, r) = (col as f64, row as f64);
            let center = DVec2::new(c * tile + tile / 2.0, r * tile + tile / 2.0);
            let rotation = DVec2::from_angle(time * 0.001 + c * 0.1 + r * 0.1);

            for (i, offset) in MOTIF.iter().enumerate() {
                let p = center + rotation.rotate(*offset * tile);
                points.push(Point::new(
                    p.x,
                    p.y,
                    3.0 + (time * 0.002 + i as f64).sin(),
                    time * 0.1 + c * 30.0 + r * 30.0 + i as f64 * 120.0,
                    0.8,
                ));
            }
        }
    }
    points
}

/// Pyramid of centered rows stacked from the canvas bottom: row `r` holds
/// `r + 1` points.
pub fn pyramid(width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    let rows = count(12.0 * density);
    if rows == 0 {
        return Vec::new();
    }
    let spacing = width.min(height) / (rows as f64 * 2.0);
    let center_x = width / 2.0;
    let mut points = Vec::with_capacity(rows * (rows + 1) / 2);

    for row in 0..rows {
        let r = row as f64;
        let in_row = row + 1;
        let row_width = in_row as f64 * spacing;
        let start_x = center_x - row_width / 2.0;

        for col in 0..in_row {
            let c = col as f64;
            let x = start_x + c * spacing + spacing / 2.0;
            let y = height - (r + 1.0) * spacing + (height - rows as f64 * spacing) / 2.0;
            let wave = (time * 0.001 + c * 0.3 + r * 0.3).sin() * 10.0;

            points.push(Point::new(
                x + wave,
                y + wave,
                3.0 + (time * 0.002 + c + r).sin() * 2.0,
                time * 0.1 + r * 40.0 + c * 20.0,
                0.8,
            ));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_count_is_rows_times_cols() {
        // 640x480 at density 1.0: spacing 60 -> 10 cols, 8 rows.
        let points = grid(640.0, 480.0, 0.0, 1.0);
        assert_eq!(points.len(), 80);
    }

    #[test]
    fn grid_spacing_floor_prevents_runaway_counts() {
        // Tiny density clamps spacing to 20: 32 cols, 24 rows.
        let points = grid(640.0, 480.0, 0.0, 0.001);
        assert_eq!(points.len(), 32 * 24);
    }

    #[test]
    fn grid_jitter_is_bounded() {
        // Jitter amplitude is 10, so no point strays more than 10 px from
        // its cell center on either axis.
        let calm = grid(640.0, 480.0, 0.0, 1.0);
        let jittered = grid(640.0, 480.0, 777.0, 1.0);
        assert_eq!(calm.len(), jittered.len());
        for (a, b) in calm.iter().zip(&jittered) {
            assert!((a.x - b.x).abs() <= 20.0);
            assert!((a.y - b.y).abs() <= 20.0);
        }
    }

    #[test]
    fn hexagonal_points_stay_in_bounds_before_jitter() {
        // The bounds check runs on the raw lattice position; jitter can
        // push a point at most 5 px outside.
        for p in hexagonal(500.0, 400.0, 321.0, 1.0) {
            assert!(p.x >= -5.0 && p.x <= 505.0, "x: {}", p.x);
            assert!(p.y >= -5.0 && p.y <= 405.0, "y: {}", p.y);
        }
    }

    #[test]
    fn triangular_alternate_rows_are_offset_by_half_spacing() {
        // At time 0 the jitter term is sin(col*0.4 + row*0.4)*8, which is
        // awkward to cancel, so compare column 0 of rows 0 and 1 after
        // subtracting each row's jitter.
        let (width, height, density) = (500.0, 400.0, 1.0);
        let spacing = 50.0 * density;
        let points = triangular(width, height, 0.0, density);
        let cols = (width / spacing).floor() as usize;

        let row0_x = points[0].x - (0.0_f64).sin() * 8.0;
        let row1_x = points[cols].x - (0.4_f64).sin() * 8.0;
        assert!(
            ((row1_x - row0_x) - spacing / 2.0).abs() < 1e-9,
            "offset was {}",
            row1_x - row0_x
        );
    }

    #[test]
    fn tessellation_emits_three_points_per_tile() {
        // 600x300, density 1.0: tile 60 -> 10x5 tiles.
        let points = tessellation(600.0, 300.0, 0.0, 1.0);
        assert_eq!(points.len(), 10 * 5 * 3);
    }

    #[test]
    fn tessellation_motif_hues_are_split_by_120_degrees() {
        let points = tessellation(600.0, 300.0, 0.0, 1.0);
        let (a, b, c) = (points[0].hue, points[1].hue, points[2].hue);
        assert!(((b - a).rem_euclid(360.0) - 120.0).abs() < 1e-9);
        assert!(((c - b).rem_euclid(360.0) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn pyramid_count_is_triangular_number() {
        // density 1.0 -> 12 rows -> 12*13/2 points.
        let points = pyramid(640.0, 480.0, 0.0, 1.0);
        assert_eq!(points.len(), 78);
    }

    #[test]
    fn pyramid_zero_rows_is_empty_not_a_division_by_zero() {
        let points = pyramid(640.0, 480.0, 0.0, 0.05);
        assert!(points.is_empty());
    }

    #[test]
    fn pyramid_rows_widen_downward() {
        // The bottom row (first emitted) has 1 point, the last has `rows`.
        let points = pyramid(640.0, 480.0, 0.0, 1.0);
        let top_y = points.last().unwrap().y;
        let bottom_y = points[0].y;
        assert!(bottom_y > top_y, "rows should stack upward");
    }
}
