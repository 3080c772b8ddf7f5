// ABOUTME: Whole-gram and one-decimal rounding used by every solver calculation
// ABOUTME: Rounds to nearest with ties toward positive infinity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Rounding helpers.
//!
//! Ties round toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`), which is
//! not what `f64::round` does for negative values. Non-finite values pass
//! through unchanged.

/// Round to the nearest whole gram, ties toward positive infinity
#[must_use]
pub fn round_grams(value: f64) -> f64 {
    let floor = value.floor();
    // value - floor is exact for every finite f64
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one decimal place with the same tie rule as [`round_grams`]
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    round_grams(value * 10.0) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_grams_ties_go_up() {
        assert!((round_grams(2.5) - 3.0).abs() < f64::EPSILON);
        assert!((round_grams(-2.5) - -2.0).abs() < f64::EPSILON);
        assert!((round_grams(20.34) - 20.0).abs() < f64::EPSILON);
        assert!((round_grams(762.75) - 763.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_grams_just_below_half() {
        assert!(round_grams(0.499_999_999_999_999_94).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_grams_non_finite_passthrough() {
        assert!(round_grams(f64::NAN).is_nan());
        assert!(round_grams(f64::INFINITY).is_infinite());
    }

    #[test]
    fn test_round_to_tenth() {
        assert!((round_to_tenth(15.04) - 15.0).abs() < 1e-9);
        assert!((round_to_tenth(14.96) - 15.0).abs() < 1e-9);
        assert!((round_to_tenth(12.36) - 12.4).abs() < 1e-9);
        assert!((round_to_tenth(12.34) - 12.3).abs() < 1e-9);
    }
}
