// ABOUTME: Integration tests for KRD model validation and untyped record parsing
// ABOUTME: Covers closed tagged unions, constraint errors and the notes length limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use krd_convert::errors::ValidationError;
use krd_convert::models::{
    Duration, DurationType, Krd, PaceValue, RepetitionBlock, Sport, Target, TargetType, Workout,
};
use serde_json::json;

#[test]
fn test_duration_records_are_closed() {
    assert_eq!(
        Duration::from_value(&json!({"type": "distance", "meters": 5000})).unwrap(),
        Duration::Distance { meters: 5000.0 }
    );
    assert!(matches!(
        Duration::from_value(&json!({"type": "steps", "count": 3})),
        Err(ValidationError::InvalidShape { .. })
    ));
    assert!(matches!(
        Duration::from_value(&json!({"type": "time"})),
        Err(ValidationError::InvalidShape { .. })
    ));
    assert!(matches!(
        Duration::from_value(&json!({"type": "time", "seconds": 0})),
        Err(ValidationError::NonPositive { .. })
    ));
}

#[test]
fn test_target_records_are_closed() {
    assert_eq!(
        Target::from_value(&json!({"type": "pace", "value": {"unit": "mps", "value": 3.9}}))
            .unwrap(),
        Target::Pace {
            value: PaceValue::Mps { value: 3.9 }
        }
    );
    assert!(Target::from_value(&json!({"type": "power", "value": {"unit": "kj", "value": 3}}))
        .is_err());
    assert_eq!(Target::from_value(&json!({"type": "open"})).unwrap(), Target::Open);
}

#[test]
fn test_type_tags_follow_payloads() {
    let step = common::time_step(0, 120.0);
    assert_eq!(step.duration_type, DurationType::Time);
    assert_eq!(step.target_type, TargetType::Open);
    assert!(step.validate().is_ok());
}

#[test]
fn test_notes_limit_and_shape_check() {
    let step = common::time_step(0, 120.0).with_notes("n".repeat(257));
    assert!(matches!(
        step.validate(),
        Err(ValidationError::NotesTooLong {
            length: 257,
            max: 256,
            ..
        })
    ));
    assert!(step.validate_shape().is_ok());

    let krd = common::krd_for(Workout::new(Sport::Running, vec![step.into()]));
    assert!(krd.validate().is_err());
    assert!(krd.validate_shape().is_ok());
}

#[test]
fn test_empty_block_rejected() {
    let workout = Workout::new(Sport::Cycling, vec![RepetitionBlock::new(3, Vec::new()).into()]);
    assert_eq!(workout.validate(), Err(ValidationError::EmptyRepetitionBlock));
}

#[test]
fn test_krd_json_round_trip() {
    let krd = common::krd_for(common::interval_workout());
    let value = serde_json::to_value(&krd).unwrap();

    assert_eq!(value["version"], json!("1.0"));
    assert_eq!(value["type"], json!("workout"));
    assert_eq!(value["extensions"]["workout"]["steps"][1]["repeatCount"], json!(4));

    let parsed = Krd::from_value(&value).unwrap();
    assert_eq!(parsed, krd);
}
