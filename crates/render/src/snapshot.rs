//! PNG snapshot of a [`PixelSurface`].
//!
//! Feature-gated behind `png` (default on) so embedders that only need the
//! drawing abstraction can skip the `image` dependency.

use crate::pixel::PixelSurface;
use starweave_core::StarweaveError;
use std::path::Path;

/// Writes the surface contents as a PNG image.
///
/// Returns `StarweaveError::InvalidDimensions` if the surface dimensions
/// overflow `u32`, or `StarweaveError::Io` on write failure.
pub fn write_png(surface: &PixelSurface, path: &Path) -> Result<(), StarweaveError> {
    let w = u32::try_from(surface.width()).map_err(|_| StarweaveError::InvalidDimensions)?;
    let h = u32::try_from(surface.height()).map_err(|_| StarweaveError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, surface.data().to_vec())
        .ok_or_else(|| StarweaveError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| StarweaveError::Io(e.to_string()))
}
