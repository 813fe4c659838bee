#![deny(unsafe_code)]
//! Core types for the starweave pattern animation system.
//!
//! Provides the [`Point`] data model shared by the layout and render crates,
//! HSL/sRGB color types, the [`AnimationConfig`]/[`Scene`] configuration
//! surface, the pausable [`AnimationClock`], the [`Xorshift64`] PRNG, and
//! loose-JSON parameter helpers.

pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod params;
pub mod point;
pub mod prng;

pub use clock::AnimationClock;
pub use color::{Hsla, Srgb};
pub use config::{AnimationConfig, Scene};
pub use error::StarweaveError;
pub use point::Point;
pub use prng::Xorshift64;
