//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! This is the shared random source consumed by the stateful render styles
//! (matrix drop speeds and glyphs, explosion particle bursts). Layout
//! generation never touches it; layouts use a deterministic index hash so
//! regenerating a frame is reproducible. Same seed, same sequence, on every
//! platform.

use serde::{Deserialize, Serialize};

/// Xorshift64 PRNG with the standard (13, 7, 17) shift parameters.
///
/// A seed of 0 is replaced with a non-zero fallback, since 0 is a fixed
/// point of the xorshift recurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_0F57_A44B_17E5;

    /// Creates a new PRNG with the given seed (0 maps to a fixed fallback).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in `[0, 1)`, using the upper 53 bits for full mantissa
    /// precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in `[min, max)`.
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform usize in `[0, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0.
    pub fn next_usize(&mut self, max: usize) -> usize {
        (self.next_u64() as usize) % max
    }
}
