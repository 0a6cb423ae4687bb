// ABOUTME: Integration tests for the TCX duration converter and its extension side-channel
// ABOUTME: Extended conditions decode to open and restore the original element on encode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

#![cfg(feature = "format-tcx")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use krd_convert::formats::tcx::constants::extension_keys;
use krd_convert::formats::tcx::{
    decode_duration, encode_duration, TcxDurationData, TcxDurationExtensions,
};
use krd_convert::models::Duration;
use serde_json::json;

fn data(value: serde_json::Value) -> TcxDurationData {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_calories_round_trip_through_extension() {
    let decoded = decode_duration(&data(json!({"durationType": "CaloriesBurned", "calories": 500})));
    assert_eq!(decoded.duration, Duration::Open);

    let extensions = decoded.extensions.unwrap();
    assert_eq!(
        serde_json::to_value(&extensions).unwrap(),
        json!({ extension_keys::CALORIES_BURNED: 500 })
    );

    let element = encode_duration(&decoded.duration, Some(&extensions));
    assert_eq!(
        serde_json::to_value(&element).unwrap(),
        json!({"@_xsi:type": "CaloriesBurned_t", "Calories": 500})
    );
}

#[test]
fn test_heart_rate_conditions_round_trip() {
    for (literal, xsi_type, key) in [
        ("HeartRateAbove", "HeartRateAbove_t", extension_keys::HEART_RATE_ABOVE),
        ("HeartRateBelow", "HeartRateBelow_t", extension_keys::HEART_RATE_BELOW),
    ] {
        let decoded = decode_duration(&data(json!({"durationType": literal, "bpm": 150})));
        assert_eq!(decoded.duration, Duration::Open);
        let extensions = decoded.extensions.unwrap();
        assert_eq!(serde_json::to_value(&extensions).unwrap(), json!({ key: 150 }));

        let element = encode_duration(&Duration::Open, Some(&extensions));
        assert_eq!(
            serde_json::to_value(&element).unwrap(),
            json!({
                "@_xsi:type": xsi_type,
                "HeartRate": {"@_xsi:type": "HeartRateInBeatsPerMinute_t", "Value": 150}
            })
        );
    }
}

#[test]
fn test_native_durations() {
    assert_eq!(
        decode_duration(&data(json!({"durationType": "Time", "seconds": 300}))).duration,
        Duration::Time { seconds: 300.0 }
    );
    assert_eq!(
        decode_duration(&data(json!({"durationType": "Distance", "meters": 400}))).duration,
        Duration::Distance { meters: 400.0 }
    );
    assert_eq!(
        decode_duration(&data(json!({"durationType": "LapButton"}))).duration,
        Duration::Open
    );
    assert_eq!(
        decode_duration(&data(json!({"durationType": "Time", "seconds": 0}))).duration,
        Duration::Open
    );
}

#[test]
fn test_malformed_records_are_plain_open() {
    for value in [
        json!({}),
        json!({"durationType": null}),
        json!({"durationType": 7}),
        json!({"durationType": "Steps", "seconds": 60}),
        json!({"durationType": "CaloriesBurned"}),
    ] {
        let decoded = decode_duration(&data(value));
        assert_eq!(decoded.duration, Duration::Open);
        assert_eq!(decoded.extensions, None);
    }
}

#[test]
fn test_encode_without_extensions() {
    let time = encode_duration(&Duration::Time { seconds: 90.0 }, None);
    assert_eq!(
        serde_json::to_value(&time).unwrap(),
        json!({"@_xsi:type": "Time_t", "Seconds": 90.0})
    );

    for duration in [
        Duration::Open,
        Duration::Calories { calories: 300 },
        Duration::HeartRateLessThan { bpm: 120 },
        Duration::PowerGreaterThan { watts: 250.0 },
    ] {
        assert_eq!(encode_duration(&duration, None).xsi_type, "LapButton_t");
    }
}

#[test]
fn test_extension_precedence() {
    let extensions = TcxDurationExtensions {
        heart_rate_above: None,
        heart_rate_below: Some(110),
        calories_burned: Some(200),
    };
    let element = encode_duration(&Duration::Open, Some(&extensions));
    assert_eq!(element.xsi_type, "HeartRateBelow_t");

    let empty = TcxDurationExtensions::default();
    assert!(empty.is_empty());
    let element = encode_duration(&Duration::Distance { meters: 800.0 }, Some(&empty));
    assert_eq!(element.xsi_type, "Distance_t");
}
