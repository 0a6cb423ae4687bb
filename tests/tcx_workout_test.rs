// ABOUTME: Integration tests for whole-document TCX conversion
// ABOUTME: Covers repeats, step ids, sports, intensities, targets and extension round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

#![cfg(feature = "format-tcx")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use krd_convert::config::FixedClock;
use krd_convert::errors::ErrorCode;
use krd_convert::formats::tcx::constants::MAX_REPEAT_NESTING;
use krd_convert::formats::tcx::{TcxConverter, TcxStepEntry, TcxWorkout};
use krd_convert::formats::WorkoutFormat;
use krd_convert::models::{
    Duration, HeartRateValue, Intensity, PaceValue, PowerValue, RepetitionBlock, Sport, Target,
    Workout, WorkoutElement, WorkoutStep,
};
use serde_json::json;

fn converter() -> TcxConverter<FixedClock> {
    common::init_test_logging();
    TcxConverter::new(common::config(), common::fixed_clock())
}

fn active(step_index: u32, seconds: f64) -> WorkoutStep {
    common::time_step(step_index, seconds).with_intensity(Intensity::Active)
}

fn run_workout() -> Workout {
    let work = WorkoutStep::new(
        1,
        Duration::Distance { meters: 400.0 },
        Target::HeartRate {
            value: HeartRateValue::Range { min: 160, max: 172 },
        },
    )
    .with_intensity(Intensity::Active)
    .with_name("400m");
    let rest = common::time_step(2, 90.0).with_intensity(Intensity::Rest);
    let mut workout = Workout::new(
        Sport::Running,
        vec![
            active(0, 600.0).into(),
            RepetitionBlock::new(6, vec![work, rest]).into(),
            active(3, 300.0).into(),
        ],
    );
    workout.name = Some("Track 6x400".to_owned());
    workout
}

#[test]
fn test_workout_round_trip() {
    let workout = run_workout();
    let converter = converter();

    let document = converter.from_krd(&common::krd_for(workout.clone())).unwrap();
    let decoded = converter.to_krd(&document).unwrap();

    assert_eq!(decoded.metadata.created, common::fixed_time());
    assert_eq!(decoded.metadata.sport, Sport::Running);
    assert_eq!(decoded.extensions.workout, Some(workout));
}

#[test]
fn test_step_ids_are_one_based_and_sequential() {
    let document = converter().from_krd(&common::krd_for(run_workout())).unwrap();

    assert_eq!(document.sport, "Running");
    assert_eq!(document.steps.len(), 3);
    let TcxStepEntry::Repeat(repeat) = &document.steps[1] else {
        panic!("expected a repeat entry");
    };
    assert_eq!(repeat.step_id, 2);
    assert_eq!(repeat.repetitions, 6);
    let child_ids: Vec<u32> = repeat
        .children
        .iter()
        .map(|child| match child {
            TcxStepEntry::Step(step) => step.step_id,
            TcxStepEntry::Repeat(nested) => nested.step_id,
        })
        .collect();
    assert_eq!(child_ids, vec![3, 4]);
    let TcxStepEntry::Step(last) = &document.steps[2] else {
        panic!("expected a step entry");
    };
    assert_eq!(last.step_id, 5);
}

#[test]
fn test_xml_object_form_decodes() {
    let value = json!({
        "@_Sport": "Biking",
        "Name": "Threshold",
        "Step": [
            {
                "@_xsi:type": "Step_t",
                "StepId": 1,
                "Duration": {"@_xsi:type": "Time_t", "Seconds": 900},
                "Intensity": "Active",
                "Target": {"@_xsi:type": "None_t"}
            },
            {
                "@_xsi:type": "Repeat_t",
                "StepId": 2,
                "Repetitions": 3,
                "Child": {
                    "@_xsi:type": "Step_t",
                    "StepId": 3,
                    "Duration": {"@_xsi:type": "HeartRateAbove_t", "HeartRate": {"@_xsi:type": "HeartRateInBeatsPerMinute_t", "Value": 165}},
                    "Intensity": "Active",
                    "Target": {
                        "@_xsi:type": "Speed_t",
                        "SpeedZone": {"@_xsi:type": "PredefinedSpeedZone_t", "Number": 4}
                    }
                }
            }
        ]
    });
    let document: TcxWorkout = serde_json::from_value(value).unwrap();
    let krd = converter().decode(&document).unwrap();
    let workout = krd.extensions.workout.unwrap();

    assert_eq!(workout.sport, Sport::Cycling);
    assert_eq!(workout.name.as_deref(), Some("Threshold"));
    assert_eq!(workout.steps.len(), 2);
    let WorkoutElement::Block(block) = &workout.steps[1] else {
        panic!("expected a repetition block");
    };
    assert_eq!(block.repeat_count, 3);
    let step = &block.steps[0];
    assert_eq!(step.step_index, 1);
    assert_eq!(step.duration, Duration::Open);
    assert_eq!(step.extension("tcx"), Some(&json!({"heartRateAbove": 165})));
    assert_eq!(
        step.target,
        Target::Pace {
            value: PaceValue::Zone { value: 4 }
        }
    );
}

#[test]
fn test_extension_survives_krd_json() {
    let document: TcxWorkout = serde_json::from_value(json!({
        "@_Sport": "Running",
        "Step": {
            "@_xsi:type": "Step_t",
            "StepId": 1,
            "Duration": {"@_xsi:type": "CaloriesBurned_t", "Calories": 250},
            "Intensity": "Active"
        }
    }))
    .unwrap();
    let converter = converter();
    let krd = converter.to_krd(&document).unwrap();

    let wire = serde_json::to_value(&krd).unwrap();
    let reparsed = krd_convert::models::Krd::from_value(&wire).unwrap();
    let encoded = converter.from_krd(&reparsed).unwrap();

    let TcxStepEntry::Step(step) = &encoded.steps[0] else {
        panic!("expected a step entry");
    };
    assert_eq!(
        serde_json::to_value(&step.duration).unwrap(),
        json!({"@_xsi:type": "CaloriesBurned_t", "Calories": 250})
    );
}

#[test]
fn test_unknown_sport_uses_default() {
    let document = TcxWorkout {
        sport: "Rowing".to_owned(),
        name: None,
        steps: Vec::new(),
    };
    let config = common::config().with_default_sport(Sport::Generic);
    let krd = TcxConverter::new(config, common::fixed_clock())
        .to_krd(&document)
        .unwrap();
    assert_eq!(krd.metadata.sport, Sport::Generic);
}

#[test]
fn test_single_repetition_stays_top_level() {
    let document: TcxWorkout = serde_json::from_value(json!({
        "@_Sport": "Running",
        "Step": {
            "@_xsi:type": "Repeat_t",
            "StepId": 1,
            "Repetitions": 1,
            "Child": [
                {"@_xsi:type": "Step_t", "StepId": 2, "Duration": {"@_xsi:type": "Time_t", "Seconds": 60}},
                {"@_xsi:type": "Step_t", "StepId": 3, "Duration": {"@_xsi:type": "LapButton_t"}}
            ]
        }
    }))
    .unwrap();

    let workout = converter().to_krd(&document).unwrap().extensions.workout.unwrap();
    assert_eq!(workout.steps.len(), 2);
    assert!(workout
        .steps
        .iter()
        .all(|element| matches!(element, WorkoutElement::Step(_))));
}

#[test]
fn test_deep_repeat_nesting_is_bounded() {
    let step = |id: usize| {
        json!({"@_xsi:type": "Step_t", "StepId": id, "Duration": {"@_xsi:type": "Time_t", "Seconds": 30}})
    };
    let levels = MAX_REPEAT_NESTING + 4;
    let mut nested = step(levels + 1);
    for level in (0..levels).rev() {
        nested = json!({
            "@_xsi:type": "Repeat_t",
            "StepId": level + 1,
            "Repetitions": 2,
            "Child": [step(100 + level), nested]
        });
    }
    let document: TcxWorkout = serde_json::from_value(json!({
        "@_Sport": "Biking",
        "Step": nested
    }))
    .unwrap();

    let workout = converter().to_krd(&document).unwrap().extensions.workout.unwrap();
    assert_eq!(workout.steps.len(), 1);
    let WorkoutElement::Block(block) = &workout.steps[0] else {
        panic!("expected a repetition block");
    };
    assert_eq!(block.repeat_count, 2);
    assert_eq!(block.steps.len(), MAX_REPEAT_NESTING + 1);
}

#[test]
fn test_inexpressible_target_becomes_none() {
    let step = WorkoutStep::new(
        0,
        Duration::Time { seconds: 1200.0 },
        Target::Power {
            value: PowerValue::PercentFtp { value: 95.0 },
        },
    );
    let krd = common::krd_for(Workout::new(Sport::Cycling, vec![step.into()]));

    let document = converter().from_krd(&krd).unwrap();
    let TcxStepEntry::Step(encoded) = &document.steps[0] else {
        panic!("expected a step entry");
    };
    assert_eq!(encoded.target.as_ref().unwrap().xsi_type, "None_t");
    assert_eq!(encoded.intensity.as_deref(), Some("Active"));
}

#[test]
fn test_missing_workout_payload_is_typed_error() {
    let mut krd = common::krd_for(run_workout());
    krd.extensions.workout = None;
    let error = converter().from_krd(&krd).unwrap_err();
    assert_eq!(error.code(), ErrorCode::MissingWorkout);
}
