//! Visibility predicates shared by the morphing and triangle-pattern styles.
//!
//! The morphing style maps every point index onto a conceptual 8x8 grid
//! (regardless of the actual layout) and tests one of four geometric masks
//! against that grid cell. The triangle-pattern style works on `index mod
//! 10` instead, sweeping a threshold over a 2-second cycle.

use starweave_text::TextPatternKind;

/// Side length of the conceptual morphing grid.
pub const MORPH_GRID: usize = 8;
/// Morphing phase duration in milliseconds.
pub const MORPH_PHASE_MS: f64 = 3000.0;
/// Triangle-pattern cycle duration in milliseconds.
pub const TRIANGLE_CYCLE_MS: f64 = 2000.0;

/// The four mask shapes, in phase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphMask {
    Triangle,
    Square,
    Diamond,
    Circle,
}

impl MorphMask {
    /// The mask a phase morphs *from*; the next phase's mask is what it
    /// morphs *to*.
    pub fn for_phase(phase: usize) -> MorphMask {
        match phase % 4 {
            0 => MorphMask::Triangle,
            1 => MorphMask::Square,
            2 => MorphMask::Diamond,
            _ => MorphMask::Circle,
        }
    }

    /// Whether the grid cell `(row, col)` is inside this mask.
    pub fn contains(self, row: usize, col: usize) -> bool {
        let half = MORPH_GRID as f64 / 2.0;
        let (r, c) = (row as f64, col as f64);
        match self {
            MorphMask::Triangle => col <= row,
            MorphMask::Square => {
                row == 0 || row == MORPH_GRID - 1 || col == 0 || col == MORPH_GRID - 1
            }
            MorphMask::Diamond => (r - half).abs() + (c - half).abs() <= half,
            MorphMask::Circle => ((r - half).powi(2) + (c - half).powi(2)).sqrt() <= half,
        }
    }
}

/// Cubic ease-in-out: `2t²` below the midpoint, `1 − (−2t+2)³/2` above.
pub fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Morphing visibility for a point index during `phase` at eased blend `ease`.
///
/// The handoff happens at the 0.5 blend threshold, so at `ease = 0` the
/// visible set is exactly the phase's own mask and as `ease → 1` it is
/// exactly the next phase's mask; the mask transition is continuous across
/// phase boundaries.
pub fn morphing_visible(index: usize, phase: usize, ease: f64) -> bool {
    // row = index / 8 deliberately keeps growing past the grid for large
    // indices; points beyond the conceptual grid only ever match the
    // triangle mask (col <= row) and the square's side columns.
    let row = index / MORPH_GRID;
    let col = index % MORPH_GRID;
    let from = MorphMask::for_phase(phase);
    let to = MorphMask::for_phase(phase + 1);
    if ease < 0.5 {
        from.contains(row, col)
    } else {
        to.contains(row, col)
    }
}

/// Triangle-pattern visibility for a point index at animation time `time`.
///
/// Only the six named variants have dedicated sweeps; every other star
/// pattern falls back to a time shimmer.
pub fn triangle_pattern_visible(kind: TextPatternKind, index: usize, time: f64) -> bool {
    let cycle = ((time / TRIANGLE_CYCLE_MS).floor() as i64).rem_euclid(4);
    let t = (time / TRIANGLE_CYCLE_MS).rem_euclid(1.0);
    let slot = (index % 10) as f64;

    match kind {
        TextPatternKind::RightTriangle => slot <= (t * 10.0).floor(),
        TextPatternKind::LeftTriangle => slot >= ((1.0 - t) * 10.0).floor(),
        TextPatternKind::ReverseRightTriangle => slot >= (t * 10.0).floor(),
        TextPatternKind::ReverseLeftTriangle => slot <= ((1.0 - t) * 10.0).floor(),
        TextPatternKind::Pyramid => (slot - 5.0).abs() <= (t * 5.0).floor(),
        TextPatternKind::Diamond => {
            let distance = (slot - 5.0).abs();
            if cycle < 2 {
                distance <= (t * 5.0).floor()
            } else {
                distance >= (t * 5.0).floor()
            }
        }
        _ => (time * 0.01 + index as f64 * 0.1).sin() > 0.0,
    }
}
