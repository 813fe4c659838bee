#![deny(unsafe_code)]
//! Text block-pattern builder: fixed star-glyph shapes with a typewriter
//! cursor overlay.
//!
//! Every pattern is a deterministic, pure function of `(kind, size)` with no
//! time dependency; animation comes solely from [`typewriter_frame`], which
//! overlays a cursor glyph at a position cycling through the pattern.
//!
//! Two cell conventions coexist: the triangle family writes two-character
//! `"★ "` cells (with double-space indents), the pyramid family writes
//! single `"★"` glyphs with single-space indents.

/// The glyph every shape is drawn with.
pub const STAR: char = '★';
/// The typewriter cursor glyph.
pub const CURSOR: char = '█';

/// Cursor interval for the dedicated star-pattern mode, in milliseconds.
pub const CURSOR_INTERVAL_MS: f64 = 150.0;
/// Cursor interval for the rotating showcase mode, in milliseconds.
pub const SHOWCASE_CURSOR_INTERVAL_MS: f64 = 200.0;
/// How long the showcase dwells on each shape, in milliseconds.
pub const SHOWCASE_DWELL_MS: f64 = 5000.0;

/// All text pattern names, in showcase rotation order.
pub const TEXT_PATTERN_NAMES: &[&str] = &[
    "rightTriangle",
    "leftTriangle",
    "pyramid",
    "diamond",
    "hollowSquare",
    "reverseRightTriangle",
    "reverseLeftTriangle",
    "leftHalfPyramid",
    "rightHalfPyramid",
    "hollowTriangle",
    "doubleTriangle",
    "zigzagTriangle",
];

/// The twelve fixed block shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextPatternKind {
    RightTriangle,
    LeftTriangle,
    Pyramid,
    Diamond,
    HollowSquare,
    ReverseRightTriangle,
    ReverseLeftTriangle,
    LeftHalfPyramid,
    RightHalfPyramid,
    HollowTriangle,
    DoubleTriangle,
    ZigzagTriangle,
}

impl TextPatternKind {
    /// Resolves a pattern by name; unknown names fall back to
    /// [`RightTriangle`].
    ///
    /// [`RightTriangle`]: TextPatternKind::RightTriangle
    pub fn from_name(name: &str) -> Self {
        match name {
            "rightTriangle" => TextPatternKind::RightTriangle,
            "leftTriangle" => TextPatternKind::LeftTriangle,
            "pyramid" => TextPatternKind::Pyramid,
            "diamond" => TextPatternKind::Diamond,
            "hollowSquare" => TextPatternKind::HollowSquare,
            "reverseRightTriangle" => TextPatternKind::ReverseRightTriangle,
            "reverseLeftTriangle" => TextPatternKind::ReverseLeftTriangle,
            "leftHalfPyramid" => TextPatternKind::LeftHalfPyramid,
            "rightHalfPyramid" => TextPatternKind::RightHalfPyramid,
            "hollowTriangle" => TextPatternKind::HollowTriangle,
            "doubleTriangle" => TextPatternKind::DoubleTriangle,
            "zigzagTriangle" => TextPatternKind::ZigzagTriangle,
            _ => TextPatternKind::RightTriangle,
        }
    }

    /// The canonical name of this pattern.
    pub fn name(self) -> &'static str {
        match self {
            TextPatternKind::RightTriangle => "rightTriangle",
            TextPatternKind::LeftTriangle => "leftTriangle",
            TextPatternKind::Pyramid => "pyramid",
            TextPatternKind::Diamond => "diamond",
            TextPatternKind::HollowSquare => "hollowSquare",
            TextPatternKind::ReverseRightTriangle => "reverseRightTriangle",
            TextPatternKind::ReverseLeftTriangle => "reverseLeftTriangle",
            TextPatternKind::LeftHalfPyramid => "leftHalfPyramid",
            TextPatternKind::RightHalfPyramid => "rightHalfPyramid",
            TextPatternKind::HollowTriangle => "hollowTriangle",
            TextPatternKind::DoubleTriangle => "doubleTriangle",
            TextPatternKind::ZigzagTriangle => "zigzagTriangle",
        }
    }

    /// All kinds, in showcase order.
    pub fn all() -> impl Iterator<Item = TextPatternKind> {
        TEXT_PATTERN_NAMES.iter().map(|n| TextPatternKind::from_name(n))
    }
}

/// Builds the block pattern for `kind` at the given row count.
///
/// `size` of 0 yields an empty string. Every line ends with `\n`.
pub fn build_pattern(kind: TextPatternKind, size: usize) -> String {
    match kind {
        TextPatternKind::RightTriangle | TextPatternKind::RightHalfPyramid => {
            right_triangle(size)
        }
        TextPatternKind::LeftTriangle | TextPatternKind::LeftHalfPyramid => left_triangle(size),
        TextPatternKind::Pyramid => pyramid(size),
        TextPatternKind::Diamond => diamond(size),
        TextPatternKind::HollowSquare => hollow_square(size),
        TextPatternKind::ReverseRightTriangle => reverse_right_triangle(size),
        TextPatternKind::ReverseLeftTriangle => reverse_left_triangle(size),
        TextPatternKind::HollowTriangle => hollow_triangle(size),
        TextPatternKind::DoubleTriangle => double_triangle(size),
        TextPatternKind::ZigzagTriangle => zigzag_triangle(size),
    }
}

/// Builds the pattern by name, falling back to the right triangle for
/// unknown names.
pub fn build_pattern_named(name: &str, size: usize) -> String {
    build_pattern(TextPatternKind::from_name(name), size)
}

/// Overlays the typewriter cursor on a pattern.
///
/// The cursor replaces the character at `floor(time / interval) mod len`,
/// cycling continuously; an empty pattern or non-positive interval is
/// returned unchanged. Positions are character positions, so the multi-byte
/// star glyph counts as one cell.
pub fn typewriter_frame(pattern: &str, time: f64, interval: f64) -> String {
    let len = pattern.chars().count();
    if len == 0 || !(interval > 0.0) || !time.is_finite() || time < 0.0 {
        return pattern.to_owned();
    }
    let cursor = (time / interval).floor() as usize % len;
    pattern
        .chars()
        .enumerate()
        .map(|(i, c)| if i == cursor { CURSOR } else { c })
        .collect()
}

/// One frame of the rotating showcase: picks the shape for the current
/// 5-second dwell window and overlays the 200 ms cursor.
pub fn showcase_frame(time: f64, size: usize) -> String {
    if !time.is_finite() || time < 0.0 {
        return typewriter_frame(&right_triangle(size), 0.0, SHOWCASE_CURSOR_INTERVAL_MS);
    }
    let index = (time / SHOWCASE_DWELL_MS).floor() as usize % TEXT_PATTERN_NAMES.len();
    let kind = TextPatternKind::from_name(TEXT_PATTERN_NAMES[index]);
    typewriter_frame(
        &build_pattern(kind, size),
        time,
        SHOWCASE_CURSOR_INTERVAL_MS,
    )
}

fn right_triangle(size: usize) -> String {
    let mut pattern = String::new();
    for i in 1..=size {
        for _ in 0..i {
            pattern.push(STAR);
            pattern.push(' ');
        }
        pattern.push('\n');
    }
    pattern
}

fn left_triangle(size: usize) -> String {
    let mut pattern = String::new();
    for i in 1..=size {
        for _ in 0..size - i {
            pattern.push_str("  ");
        }
        for _ in 0..i {
            pattern.push(STAR);
            pattern.push(' ');
        }
        pattern.push('\n');
    }
    pattern
}

fn pyramid(size: usize) -> String {
    let mut pattern = String::new();
    for i in 1..=size {
        pyramid_row(&mut pattern, size, i);
    }
    pattern
}

/// One centered pyramid row: `size - i` spaces then `2i - 1` stars.
fn pyramid_row(pattern: &mut String, size: usize, i: usize) {
    for _ in 0..size - i {
        pattern.push(' ');
    }
    for _ in 0..2 * i - 1 {
        pattern.push(STAR);
    }
    pattern.push('\n');
}

fn diamond(size: usize) -> String {
    let mut pattern = String::new();
    for i in 1..=size {
        pyramid_row(&mut pattern, size, i);
    }
    for i in (1..size).rev() {
        pyramid_row(&mut pattern, size, i);
    }
    pattern
}

fn hollow_square(size: usize) -> String {
    let mut pattern = String::new();
    for i in 1..=size {
        for j in 1..=size {
            if i == 1 || i == size || j == 1 || j == size {
                pattern.push(STAR);
                pattern.push(' ');
            } else {
                pattern.push_str("  ");
            }
        }
        pattern.push('\n');
    }
    pattern
}

fn reverse_right_triangle(size: usize) -> String {
    let mut pattern = String::new();
    for i in (1..=size).rev() {
        for _ in 0..i {
            pattern.push(STAR);
            pattern.push(' ');
        }
        pattern.push('\n');
    }
    pattern
}

fn reverse_left_triangle(size: usize) -> String {
    let mut pattern = String::new();
    for i in (1..=size).rev() {
        for _ in 0..size - i {
            pattern.push_str("  ");
        }
        for _ in 0..i {
            pattern.push(STAR);
            pattern.push(' ');
        }
        pattern.push('\n');
    }
    pattern
}

fn hollow_triangle(size: usize) -> String {
    let mut pattern = String::new();
    for i in 1..=size {
        for _ in 0..size - i {
            pattern.push(' ');
        }
        for k in 1..=2 * i - 1 {
            if k == 1 || k == 2 * i - 1 || i == size {
                pattern.push(STAR);
            } else {
                pattern.push(' ');
            }
        }
        pattern.push('\n');
    }
    pattern
}

fn double_triangle(size: usize) -> String {
    let mut pattern = pyramid(size);
    for i in (1..size).rev() {
        pyramid_row(&mut pattern, size, i);
    }
    pattern
}

fn zigzag_triangle(size: usize) -> String {
    let mut pattern = String::new();
    for i in 1..=size {
        if i % 2 == 0 {
            for _ in 0..size - i {
                pattern.push_str("  ");
            }
        }
        for _ in 0..i {
            pattern.push(STAR);
            pattern.push(' ');
        }
        pattern.push('\n');
    }
    pattern
}
