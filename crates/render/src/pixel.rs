//! CPU rasterizer: a [`Surface`] backed by an RGBA8 pixel buffer.
//!
//! Circles are scanned over their bounding box, glyphs become solid blocks
//! with a fading column for the trail. Blending is plain source-over on
//! 8-bit channels, which is all the animation styles need.

use crate::surface::Surface;
use starweave_core::{color::hsla_to_srgb, Hsla, Srgb, StarweaveError};

/// RGBA8 raster surface.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelSurface {
    /// Creates a black opaque surface.
    ///
    /// Returns `StarweaveError::InvalidDimensions` for a zero dimension or
    /// a `width * height` overflow.
    pub fn new(width: usize, height: usize) -> Result<Self, StarweaveError> {
        if width == 0 || height == 0 {
            return Err(StarweaveError::InvalidDimensions);
        }
        let pixels = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(StarweaveError::InvalidDimensions)?;
        let mut data = vec![0u8; pixels];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw RGBA8 buffer, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reads one pixel as `[r, g, b, a]`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Source-over blend of `color` at `alpha` into one pixel.
    fn blend_pixel(&mut self, x: usize, y: usize, color: Srgb, alpha: f64) {
        let [sr, sg, sb] = color.to_bytes();
        let a = alpha.clamp(0.0, 1.0);
        let i = (y * self.width + x) * 4;
        for (offset, src) in [sr, sg, sb].into_iter().enumerate() {
            let dst = self.data[i + offset] as f64;
            self.data[i + offset] = (src as f64 * a + dst * (1.0 - a)).round() as u8;
        }
        self.data[i + 3] = 255;
    }

    /// Blends an axis-aligned rectangle, clipped to the surface.
    fn blend_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Srgb, alpha: f64) {
        if alpha <= 0.0 || x1 <= x0 || y1 <= y0 {
            return;
        }
        let xs = x0.floor().max(0.0) as usize;
        let ys = y0.floor().max(0.0) as usize;
        let xe = (x1.ceil() as isize).clamp(0, self.width as isize) as usize;
        let ye = (y1.ceil() as isize).clamp(0, self.height as isize) as usize;
        for y in ys..ye {
            for x in xs..xe {
                self.blend_pixel(x, y, color, alpha);
            }
        }
    }
}

impl Surface for PixelSurface {
    fn clear(&mut self, color: Srgb) {
        let [r, g, b] = color.to_bytes();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[r, g, b, 255]);
        }
    }

    fn fade(&mut self, color: Srgb, alpha: f64) {
        let (w, h) = (self.width as f64, self.height as f64);
        self.blend_rect(0.0, 0.0, w, h, color, alpha);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Hsla) {
        if !(radius > 0.0) || !cx.is_finite() || !cy.is_finite() {
            return;
        }
        let srgb = hsla_to_srgb(color);
        let xs = ((cx - radius).floor().max(0.0)) as usize;
        let ys = ((cy - radius).floor().max(0.0)) as usize;
        let xe = (((cx + radius).ceil() as isize).clamp(0, self.width as isize)) as usize;
        let ye = (((cy + radius).ceil() as isize).clamp(0, self.height as isize)) as usize;
        let r2 = radius * radius;

        for y in ys..ye {
            for x in xs..xe {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(x, y, srgb, color.a);
                }
            }
        }
    }

    fn draw_glyph(&mut self, _glyph: char, x: f64, y: f64, size: f64, color: Hsla, trail: f64) {
        if !(size > 0.0) || !x.is_finite() || !y.is_finite() {
            return;
        }
        let srgb = hsla_to_srgb(color);
        // Trail: fading strip above the glyph cell, brightest at the glyph.
        if trail > 0.0 {
            let steps = (trail / size).ceil().max(1.0) as usize;
            for step in 0..steps {
                let top = y - size - (step + 1) as f64 * size;
                let strength = 1.0 - (step + 1) as f64 / (steps + 1) as f64;
                self.blend_rect(
                    x,
                    top,
                    x + size,
                    top + size,
                    srgb,
                    color.a * strength * 0.8,
                );
            }
        }
        // The glyph cell itself; `y` is the text baseline, the block sits
        // above it.
        self.blend_rect(x, y - size, x + size, y, srgb, color.a);
    }
}
