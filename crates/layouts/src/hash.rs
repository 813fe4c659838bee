//! Deterministic per-index position hash.
//!
//! Scatter and voronoi need "random" positions that are stable across
//! frames without carrying a PRNG stream: the same index always lands in
//! the same place, and animation comes from a separate time-based drift.
//! The linear-congruential constants (9301, 49297, 233280) are the classic
//! tiny-LCG triple; `12345` spreads consecutive indices apart.

/// Hash of a point index to `[0, 1)`.
///
/// `salt` decorrelates the axes: callers use 0 for x and 1000 for y.
/// Pure integer arithmetic, so the result is bit-stable everywhere.
pub fn index_hash(index: u64, salt: u64) -> f64 {
    let seed = index.wrapping_mul(12345);
    let mixed = seed
        .wrapping_mul(9301)
        .wrapping_add(49297)
        .wrapping_add(salt);
    (mixed % 233280) as f64 / 233280.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_index_same_value() {
        for i in 0..500 {
            assert_eq!(index_hash(i, 0).to_bits(), index_hash(i, 0).to_bits());
            assert_eq!(
                index_hash(i, 1000).to_bits(),
                index_hash(i, 1000).to_bits()
            );
        }
    }

    #[test]
    fn always_in_unit_interval() {
        for i in 0..10_000 {
            let v = index_hash(i, 0);
            assert!((0.0..1.0).contains(&v), "index {i}: {v}");
        }
    }

    #[test]
    fn salt_decorrelates_axes() {
        // If x and y used the same stream, every point would sit on the
        // diagonal. At least some indices must differ between salts.
        let differs = (0..100).any(|i| index_hash(i, 0) != index_hash(i, 1000));
        assert!(differs);
    }

    #[test]
    fn zero_index_matches_the_closed_form() {
        // index 0: (49297 % 233280) / 233280
        let expected = 49297.0 / 233280.0;
        assert!((index_hash(0, 0) - expected).abs() < 1e-15);
    }

    #[test]
    fn large_index_does_not_panic() {
        let v = index_hash(u64::MAX, 1000);
        assert!((0.0..1.0).contains(&v));
    }
}
