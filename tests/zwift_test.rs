// ABOUTME: Integration tests for the Zwift duration and power scalars
// ABOUTME: Covers the distance flag, open fallback and FTP fraction conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

#![cfg(feature = "format-zwift")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use krd_convert::formats::zwift::{decode_duration, decode_power, encode_duration, encode_power};
use krd_convert::models::{Duration, PowerValue, Target};

#[test]
fn test_time_and_distance_values() {
    assert_eq!(decode_duration(Some(300.0), false), Duration::Time { seconds: 300.0 });
    assert_eq!(
        decode_duration(Some(5000.0), true),
        Duration::Distance { meters: 5000.0 }
    );
}

#[test]
fn test_non_positive_values_are_open() {
    for value in [Some(0.0), Some(-30.0), None, Some(f64::INFINITY)] {
        assert_eq!(decode_duration(value, false), Duration::Open);
        assert_eq!(decode_duration(value, true), Duration::Open);
    }
}

#[test]
fn test_encode_yields_zero_for_inexpressible() {
    assert!((encode_duration(&Duration::Time { seconds: 420.0 }, false) - 420.0).abs() < f64::EPSILON);
    assert!((encode_duration(&Duration::Distance { meters: 800.0 }, true) - 800.0).abs() < f64::EPSILON);

    for duration in [
        Duration::Open,
        Duration::Calories { calories: 200 },
        Duration::Distance { meters: 800.0 },
        Duration::Time { seconds: -10.0 },
        Duration::Time { seconds: 0.0 },
    ] {
        assert!(encode_duration(&duration, false).abs() < f64::EPSILON);
    }
    for duration in [
        Duration::Distance { meters: 0.0 },
        Duration::Distance { meters: -400.0 },
    ] {
        assert!(encode_duration(&duration, true).abs() < f64::EPSILON);
    }
}

#[test]
fn test_duration_round_trip() {
    for (duration, distance_based) in [
        (Duration::Time { seconds: 45.0 }, false),
        (Duration::Distance { meters: 1200.0 }, true),
        (Duration::Open, false),
    ] {
        let value = encode_duration(&duration, distance_based);
        assert_eq!(decode_duration(Some(value), distance_based), duration);
    }
}

#[test]
fn test_power_fraction_round_trip() {
    let target = decode_power(Some(0.88));
    let Target::Power {
        value: PowerValue::PercentFtp { value },
    } = target
    else {
        panic!("expected a percent FTP target, got {target:?}");
    };
    assert!((value - 88.0).abs() < 1e-9);
    let fraction = encode_power(&target).unwrap();
    assert!((fraction - 0.88).abs() < 1e-9);

    assert_eq!(encode_power(&Target::Open), None);
    assert_eq!(decode_power(Some(-0.5)), Target::Open);
}
