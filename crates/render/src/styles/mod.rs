//! The seven render styles and their shared visibility predicates.

pub mod explosion;
pub mod masks;
pub mod matrix;
pub mod morphing;
pub mod projection;
pub mod spiral;
pub mod triangle_patterns;
pub mod waves;
