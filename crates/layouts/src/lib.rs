#![deny(unsafe_code)]
//! Layout generation engine: twelve independent algorithms, each a pure
//! function of `(width, height, time, density)` producing a list of
//! [`Point`]s.
//!
//! All "randomness" here is the deterministic [`index_hash`]: regenerating
//! a layout with identical inputs yields identical output. Degenerate inputs
//! (non-positive canvas or density) yield an empty list, never an error, and
//! an unrecognized layout name falls back to the grid.

mod hash;
mod lattice;
mod organic;
mod radial;

pub use hash::index_hash;

use starweave_core::Point;

/// All layout names, in selection order.
pub const LAYOUT_NAMES: &[&str] = &[
    "grid",
    "circular",
    "hexagonal",
    "fractal",
    "mandala",
    "tessellation",
    "scatter",
    "flowField",
    "fibonacci",
    "voronoi",
    "triangular",
    "pyramid",
];

/// The twelve point-layout algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Grid,
    Circular,
    Hexagonal,
    Fractal,
    Mandala,
    Tessellation,
    Scatter,
    FlowField,
    Fibonacci,
    Voronoi,
    Triangular,
    Pyramid,
}

impl LayoutKind {
    /// Resolves a layout by name. Unknown names fall back to [`Grid`].
    ///
    /// [`Grid`]: LayoutKind::Grid
    pub fn from_name(name: &str) -> Self {
        match name {
            "grid" => LayoutKind::Grid,
            "circular" => LayoutKind::Circular,
            "hexagonal" => LayoutKind::Hexagonal,
            "fractal" => LayoutKind::Fractal,
            "mandala" => LayoutKind::Mandala,
            "tessellation" => LayoutKind::Tessellation,
            "scatter" => LayoutKind::Scatter,
            "flowField" => LayoutKind::FlowField,
            "fibonacci" => LayoutKind::Fibonacci,
            "voronoi" => LayoutKind::Voronoi,
            "triangular" => LayoutKind::Triangular,
            "pyramid" => LayoutKind::Pyramid,
            _ => LayoutKind::Grid,
        }
    }

    /// The canonical name of this layout.
    pub fn name(self) -> &'static str {
        match self {
            LayoutKind::Grid => "grid",
            LayoutKind::Circular => "circular",
            LayoutKind::Hexagonal => "hexagonal",
            LayoutKind::Fractal => "fractal",
            LayoutKind::Mandala => "mandala",
            LayoutKind::Tessellation => "tessellation",
            LayoutKind::Scatter => "scatter",
            LayoutKind::FlowField => "flowField",
            LayoutKind::Fibonacci => "fibonacci",
            LayoutKind::Voronoi => "voronoi",
            LayoutKind::Triangular => "triangular",
            LayoutKind::Pyramid => "pyramid",
        }
    }

    /// All kinds, in [`LAYOUT_NAMES`] order.
    pub fn all() -> impl Iterator<Item = LayoutKind> {
        LAYOUT_NAMES.iter().map(|n| LayoutKind::from_name(n))
    }
}

/// Generates the point layout for one animation frame.
///
/// `time` is in milliseconds of adjusted animation time; `density` is the
/// count/spacing multiplier in `(0, 2]`. A non-positive canvas dimension,
/// non-positive density, or non-finite input produces an empty list.
pub fn generate(kind: LayoutKind, width: f64, height: f64, time: f64, density: f64) -> Vec<Point> {
    if !(width > 0.0 && height > 0.0 && density > 0.0) || !time.is_finite() {
        return Vec::new();
    }
    match kind {
        LayoutKind::Grid => lattice::grid(width, height, time, density),
        LayoutKind::Circular => radial::circular(width, height, time, density),
        LayoutKind::Hexagonal => lattice::hexagonal(width, height, time, density),
        LayoutKind::Fractal => organic::fractal(width, height, time, density),
        LayoutKind::Mandala => radial::mandala(width, height, time, density),
        LayoutKind::Tessellation => lattice::tessellation(width, height, time, density),
        LayoutKind::Scatter => organic::scatter(width, height, time, density),
        LayoutKind::FlowField => organic::flow_field(width, height, time, density),
        LayoutKind::Fibonacci => radial::fibonacci(width, height, time, density),
        LayoutKind::Voronoi => organic::voronoi(width, height, time, density),
        LayoutKind::Triangular => lattice::triangular(width, height, time, density),
        LayoutKind::Pyramid => lattice::pyramid(width, height, time, density),
    }
}

/// Floors `value` to a count, clamping negatives to zero.
pub(crate) fn count(value: f64) -> usize {
    value.floor().max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_every_listed_name() {
        for &name in LAYOUT_NAMES {
            assert_eq!(LayoutKind::from_name(name).name(), name);
        }
    }

    #[test]
    fn unknown_name_falls_back_to_grid() {
        assert_eq!(LayoutKind::from_name("lava-lamp"), LayoutKind::Grid);
        assert_eq!(LayoutKind::from_name(""), LayoutKind::Grid);
    }

    #[test]
    fn all_yields_twelve_distinct_kinds() {
        let kinds: Vec<_> = LayoutKind::all().collect();
        assert_eq!(kinds.len(), 12);
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn degenerate_canvas_yields_empty_list() {
        for kind in LayoutKind::all() {
            assert!(generate(kind, 0.0, 480.0, 100.0, 1.0).is_empty());
            assert!(generate(kind, 640.0, -10.0, 100.0, 1.0).is_empty());
            assert!(generate(kind, 640.0, 480.0, 100.0, 0.0).is_empty());
            assert!(generate(kind, f64::NAN, 480.0, 100.0, 1.0).is_empty());
        }
    }

    #[test]
    fn every_kind_produces_points_at_default_density() {
        for kind in LayoutKind::all() {
            let points = generate(kind, 640.0, 480.0, 500.0, 1.0);
            assert!(!points.is_empty(), "{} produced no points", kind.name());
        }
    }

    #[test]
    fn every_point_satisfies_the_data_model_invariants() {
        for kind in LayoutKind::all() {
            for &time in &[0.0, 1234.5, 99_999.0] {
                for points in [
                    generate(kind, 640.0, 480.0, time, 0.3),
                    generate(kind, 640.0, 480.0, time, 1.0),
                    generate(kind, 640.0, 480.0, time, 2.0),
                ] {
                    for p in &points {
                        assert!(p.is_valid(), "{}: invalid point {p:?}", kind.name());
                    }
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        for kind in LayoutKind::all() {
            let a = generate(kind, 800.0, 600.0, 4321.0, 1.3);
            let b = generate(kind, 800.0, 600.0, 4321.0, 1.3);
            assert_eq!(a, b, "{} not deterministic", kind.name());
        }
    }

    #[test]
    fn point_counts_are_monotone_in_density() {
        // Density widens the spacing of the spacing-based lattices (fewer,
        // larger cells) and widens the count of the count-based layouts.
        // Either way the mapping must be monotone and deterministic.
        let spacing_based = [
            LayoutKind::Grid,
            LayoutKind::Hexagonal,
            LayoutKind::Triangular,
        ];
        let count_based = [
            LayoutKind::Pyramid,
            LayoutKind::Scatter,
            LayoutKind::Fibonacci,
        ];
        for step in 1..20 {
            let lo = step as f64 * 0.1;
            let hi = lo + 0.1;
            for kind in spacing_based {
                let n_lo = generate(kind, 640.0, 480.0, 0.0, lo).len();
                let n_hi = generate(kind, 640.0, 480.0, 0.0, hi).len();
                assert!(
                    n_hi <= n_lo,
                    "{}: count rose from {n_lo} to {n_hi} between density {lo} and {hi}",
                    kind.name()
                );
            }
            for kind in count_based {
                let n_lo = generate(kind, 640.0, 480.0, 0.0, lo).len();
                let n_hi = generate(kind, 640.0, 480.0, 0.0, hi).len();
                assert!(
                    n_hi >= n_lo,
                    "{}: count fell from {n_lo} to {n_hi} between density {lo} and {hi}",
                    kind.name()
                );
            }
        }
    }

    #[test]
    fn count_clamps_negatives() {
        assert_eq!(count(-3.7), 0);
        assert_eq!(count(0.9), 0);
        assert_eq!(count(4.9), 4);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_kind() -> impl Strategy<Value = LayoutKind> {
            (0..LAYOUT_NAMES.len()).prop_map(|i| LayoutKind::from_name(LAYOUT_NAMES[i]))
        }

        proptest! {
            #[test]
            fn points_always_valid(
                kind in any_kind(),
                width in 1.0_f64..2000.0,
                height in 1.0_f64..2000.0,
                time in 0.0_f64..1e7,
                density in 0.01_f64..=2.0,
            ) {
                for p in generate(kind, width, height, time, density) {
                    prop_assert!(p.is_valid(), "{}: {p:?}", kind.name());
                }
            }
        }
    }
}
