// ABOUTME: Zwift duration converter for a single numeric value and a distance-based flag
// ABOUTME: Only strictly positive values are durations; everything else is open or zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::models::Duration;

/// Decode a Zwift duration value.
///
/// `is_distance_based` selects meters over seconds. Zero, negative, non-finite
/// and absent values are `open`.
#[must_use]
pub fn decode_duration(value: Option<f64>, is_distance_based: bool) -> Duration {
    match value.filter(|v| v.is_finite() && *v > 0.0) {
        Some(meters) if is_distance_based => Duration::Distance { meters },
        Some(seconds) => Duration::Time { seconds },
        None => Duration::Open,
    }
}

/// Encode a duration as a Zwift value.
///
/// Yields `0` for `open`, for any variant Zwift cannot express, for a
/// variant that does not match `is_distance_based` and for magnitudes that
/// are not strictly positive.
#[must_use]
pub fn encode_duration(duration: &Duration, is_distance_based: bool) -> f64 {
    let value = match *duration {
        Duration::Distance { meters } if is_distance_based => meters,
        Duration::Time { seconds } if !is_distance_based => seconds,
        _ => return 0.0,
    };
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_selects_variant() {
        assert_eq!(
            decode_duration(Some(600.0), false),
            Duration::Time { seconds: 600.0 }
        );
        assert_eq!(decode_duration(None, true), Duration::Open);
        assert_eq!(decode_duration(Some(f64::NAN), false), Duration::Open);
    }

    #[test]
    fn test_mismatch_encodes_zero() {
        let time = Duration::Time { seconds: 300.0 };
        assert!(encode_duration(&time, true).abs() < f64::EPSILON);
        assert!((encode_duration(&time, false) - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_magnitude_encodes_zero() {
        let infinite = Duration::Time {
            seconds: f64::INFINITY,
        };
        assert!(encode_duration(&infinite, false).abs() < f64::EPSILON);
    }
}
