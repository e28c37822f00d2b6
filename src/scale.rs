//! Maps map-widget zoom levels to "nice" round print scales.
//!
//! The ladder is anchored at a 1:100 million scale on zoom level 2 and
//! halves per zoom level; the approximation is then bucketed into the
//! fixed set of scales offered by the host's scale selector.

use crate::core::constants::BASE_SCALE;

/// Upper approximation bound per ladder step and the rounded scale it
/// maps to. Approximations past the last bound saturate at 1:10 million.
const SCALE_LADDER: [(f64, u32); 22] = [
    (10_000.0, 5_000),
    (15_000.0, 10_000),
    (20_000.0, 15_000),
    (25_000.0, 20_000),
    (30_000.0, 25_000),
    (35_000.0, 30_000),
    (40_000.0, 35_000),
    (50_000.0, 40_000),
    (75_000.0, 50_000),
    (100_000.0, 75_000),
    (150_000.0, 100_000),
    (200_000.0, 150_000),
    (300_000.0, 200_000),
    (400_000.0, 300_000),
    (500_000.0, 400_000),
    (750_000.0, 500_000),
    (1_000_000.0, 750_000),
    (1_500_000.0, 1_000_000),
    (2_000_000.0, 1_500_000),
    (2_500_000.0, 2_000_000),
    (5_000_000.0, 2_500_000),
    (10_000_000.0, 5_000_000),
];

/// Exact (unrounded) scale for a zoom level
pub fn approximate_scale_for_zoom(level: u8) -> f64 {
    BASE_SCALE / 2_f64.powi(i32::from(level) - 1)
}

/// Rounded print scale for a zoom level
pub fn scale_for_zoom(level: u8) -> u32 {
    let approximate = approximate_scale_for_zoom(level);
    for (limit, scale) in SCALE_LADDER {
        if approximate < limit {
            return scale;
        }
    }
    10_000_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approximation_halves_per_level() {
        assert_eq!(approximate_scale_for_zoom(1), BASE_SCALE);
        assert_eq!(
            approximate_scale_for_zoom(10),
            approximate_scale_for_zoom(9) / 2.0
        );
    }

    #[test]
    fn test_ladder_extremes() {
        // Very deep zooms floor at 1:5000
        assert_eq!(scale_for_zoom(30), 5_000);
        // Very shallow zooms saturate at 1:10 million
        assert_eq!(scale_for_zoom(1), 10_000_000);
        assert_eq!(scale_for_zoom(0), 10_000_000);
    }

    #[test]
    fn test_ladder_is_monotone() {
        for level in 1..=25u8 {
            assert!(
                scale_for_zoom(level + 1) <= scale_for_zoom(level),
                "ladder not monotone at zoom {}",
                level
            );
        }
    }

    #[test]
    fn test_known_buckets() {
        // zoom 8 → 100M / 2^7 ≈ 781250 → bucket 750000
        assert_eq!(scale_for_zoom(8), 750_000);
        // zoom 12 → ≈ 48828 → bucket 40000
        assert_eq!(scale_for_zoom(12), 40_000);
        // zoom 15 → ≈ 6104 → bucket 5000
        assert_eq!(scale_for_zoom(15), 5_000);
    }
}
