// ABOUTME: Unit conversion constants for distance, time, and other measurements
// ABOUTME: Provides named constants to eliminate magic numbers in target conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Percent represented by a fraction of 1.0
pub const PERCENT_PER_UNIT: f64 = 100.0;

/// Convert a pace in minutes per kilometer to meters per second
#[must_use]
pub fn min_per_km_to_mps(min_per_km: f64) -> f64 {
    METERS_PER_KM / (min_per_km * SECONDS_PER_MINUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_minute_kilometer() {
        let mps = min_per_km_to_mps(5.0);
        assert!((mps - 3.333_333).abs() < 1e-5);
    }
}
