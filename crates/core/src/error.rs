//! Error types for the starweave core.
//!
//! Note the narrow surface: unknown layout/style/text-pattern names are
//! handled by silent fallbacks, not errors, so the only failures left are
//! degenerate surfaces, bad scene descriptions, and snapshot I/O.

use thiserror::Error;

/// Errors produced by starweave operations.
#[derive(Debug, Error)]
pub enum StarweaveError {
    /// Width or height was non-positive when a positive size was required
    /// (surface creation, scene validation).
    #[error("invalid dimensions: width and height must be positive")]
    InvalidDimensions,

    /// A scene description failed validation.
    #[error("invalid scene: {0}")]
    InvalidScene(String),

    /// A snapshot could not be written.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_message_mentions_both_axes() {
        let msg = StarweaveError::InvalidDimensions.to_string();
        assert!(msg.contains("width") && msg.contains("height"), "{msg}");
    }

    #[test]
    fn invalid_scene_includes_detail() {
        let msg = StarweaveError::InvalidScene("frames must be >= 1".into()).to_string();
        assert!(msg.contains("frames"), "{msg}");
    }

    #[test]
    fn io_includes_detail() {
        let msg = StarweaveError::Io("disk full".into()).to_string();
        assert!(msg.contains("disk full"), "{msg}");
    }

    #[test]
    fn error_is_send_sync_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<StarweaveError>();
    }
}
