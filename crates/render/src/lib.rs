#![deny(unsafe_code)]
//! Pattern renderer: consumes a point list and a time value, draws one of
//! seven animation styles onto a [`Surface`].
//!
//! The [`Renderer`] owns every piece of transient style state (matrix
//! drops, the explosion particle pool and burst timer, the shared PRNG),
//! and [`Renderer::reset`] returns all of it to the post-construction state
//! whenever the driver switches layout, style, or star pattern.

pub mod animator;
pub mod pixel;
pub mod styles;
pub mod surface;

#[cfg(feature = "png")]
pub mod snapshot;

pub use animator::Animator;
pub use pixel::PixelSurface;
pub use surface::{DrawCmd, Recording, Surface};

use starweave_core::{Point, Xorshift64};
use starweave_text::TextPatternKind;
use styles::explosion::ExplosionState;
use styles::matrix::MatrixDrop;

/// All style names, in selection order.
pub const STYLE_NAMES: &[&str] = &[
    "morphing",
    "pyramid3d",
    "waves",
    "matrix",
    "explosion",
    "spiral",
    "trianglePatterns",
];

/// The seven render styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Morphing,
    Pyramid3d,
    Waves,
    Matrix,
    Explosion,
    Spiral,
    TrianglePatterns,
}

impl StyleKind {
    /// Resolves a style by name. Unknown names yield `None`; rendering an
    /// unknown style is a no-op frame, not an error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "morphing" => Some(StyleKind::Morphing),
            "pyramid3d" => Some(StyleKind::Pyramid3d),
            "waves" => Some(StyleKind::Waves),
            "matrix" => Some(StyleKind::Matrix),
            "explosion" => Some(StyleKind::Explosion),
            "spiral" => Some(StyleKind::Spiral),
            "trianglePatterns" => Some(StyleKind::TrianglePatterns),
            _ => None,
        }
    }

    /// The canonical name of this style.
    pub fn name(self) -> &'static str {
        match self {
            StyleKind::Morphing => "morphing",
            StyleKind::Pyramid3d => "pyramid3d",
            StyleKind::Waves => "waves",
            StyleKind::Matrix => "matrix",
            StyleKind::Explosion => "explosion",
            StyleKind::Spiral => "spiral",
            StyleKind::TrianglePatterns => "trianglePatterns",
        }
    }

    /// All styles, in [`STYLE_NAMES`] order.
    pub fn all() -> impl Iterator<Item = StyleKind> {
        STYLE_NAMES.iter().filter_map(|n| StyleKind::from_name(n))
    }
}

/// Stateful renderer for the animation styles.
pub struct Renderer {
    seed: u64,
    rng: Xorshift64,
    matrix_drops: Option<Vec<MatrixDrop>>,
    explosion: ExplosionState,
}

impl Renderer {
    /// Creates a renderer whose matrix/explosion randomness is pinned to
    /// `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Xorshift64::new(seed),
            matrix_drops: None,
            explosion: ExplosionState::default(),
        }
    }

    /// Clears all transient style state and restarts the PRNG stream, as if
    /// freshly constructed.
    pub fn reset(&mut self) {
        self.rng = Xorshift64::new(self.seed);
        self.matrix_drops = None;
        self.explosion = ExplosionState::default();
    }

    /// Current explosion particle count (diagnostics and tests).
    pub fn particle_count(&self) -> usize {
        self.explosion.particles.len()
    }

    /// Renders one frame of `style` for the given points at animation time
    /// `time` (milliseconds) onto `surface`.
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        style: StyleKind,
        points: &[Point],
        time: f64,
        width: f64,
        height: f64,
        star_pattern: TextPatternKind,
        surface: &mut dyn Surface,
    ) {
        match style {
            StyleKind::Morphing => styles::morphing::render(points, time, surface),
            StyleKind::Pyramid3d => {
                styles::projection::render(points, time, width, height, surface)
            }
            StyleKind::Waves => styles::waves::render(points, time, width, height, surface),
            StyleKind::Matrix => {
                let drops = self.matrix_drops.get_or_insert_with(|| {
                    styles::matrix::init_drops(points, height, &mut self.rng)
                });
                styles::matrix::render(drops, &mut self.rng, height, surface);
            }
            StyleKind::Explosion => {
                styles::explosion::render(&mut self.explosion, &mut self.rng, points, time, surface)
            }
            StyleKind::Spiral => styles::spiral::render(points, time, width, height, surface),
            StyleKind::TrianglePatterns => {
                styles::triangle_patterns::render(points, time, star_pattern, surface)
            }
        }
    }

    /// Renders by style name; an unrecognized name draws nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn render_named(
        &mut self,
        name: &str,
        points: &[Point],
        time: f64,
        width: f64,
        height: f64,
        star_pattern: TextPatternKind,
        surface: &mut dyn Surface,
    ) {
        if let Some(style) = StyleKind::from_name(name) {
            self.render(style, points, time, width, height, star_pattern, surface);
        }
    }
}
