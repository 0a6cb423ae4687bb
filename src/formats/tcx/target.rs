// ABOUTME: TCX target converter for heart-rate, speed and cadence targets
// ABOUTME: Targets TCX cannot express (power, stroke, relative heart rate) encode as None_t
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::models::{CadenceValue, HeartRateValue, PaceValue, Target};
use tracing::warn;

use super::constants::{xsi_types, SPEED_VIEW_AS_PACE};
use super::models::{TcxHeartRateValue, TcxTargetElement, TcxZone};
use crate::constants::units::min_per_km_to_mps;

fn decode_heart_rate(zone: &TcxZone) -> Option<HeartRateValue> {
    match zone.xsi_type.as_str() {
        xsi_types::PREDEFINED_HEART_RATE_ZONE => {
            zone.number.map(|value| HeartRateValue::Zone { value })
        }
        xsi_types::CUSTOM_HEART_RATE_ZONE => {
            let (low, high) = zone.low.as_ref().zip(zone.high.as_ref())?;
            Some(HeartRateValue::Range {
                min: low.value,
                max: high.value,
            })
        }
        _ => None,
    }
}

fn decode_speed(zone: &TcxZone) -> Option<PaceValue> {
    match zone.xsi_type.as_str() {
        xsi_types::PREDEFINED_SPEED_ZONE => zone.number.map(|value| PaceValue::Zone { value }),
        xsi_types::CUSTOM_SPEED_ZONE => {
            let (min, max) = zone
                .low_in_meters_per_second
                .zip(zone.high_in_meters_per_second)?;
            Some(PaceValue::Range { min, max })
        }
        _ => None,
    }
}

fn decode_cadence(target: &TcxTargetElement) -> Option<CadenceValue> {
    let (min, max) = target.low.zip(target.high)?;
    if (min - max).abs() < f64::EPSILON {
        Some(CadenceValue::Rpm { value: min })
    } else {
        Some(CadenceValue::Range { min, max })
    }
}

/// Decode a step's `Target` element; a missing or unusable target is `open`
#[must_use]
pub fn decode_target(target: Option<&TcxTargetElement>) -> Target {
    let Some(target) = target else {
        return Target::Open;
    };
    let decoded = match target.xsi_type.as_str() {
        xsi_types::TARGET_HEART_RATE => target
            .heart_rate_zone
            .as_ref()
            .and_then(decode_heart_rate)
            .map(|value| Target::HeartRate { value }),
        xsi_types::TARGET_SPEED => target
            .speed_zone
            .as_ref()
            .and_then(decode_speed)
            .map(|value| Target::Pace { value }),
        xsi_types::TARGET_CADENCE => {
            decode_cadence(target).map(|value| Target::Cadence { value })
        }
        _ => None,
    };
    decoded.unwrap_or(Target::Open)
}

fn heart_rate_range(min: u32, max: u32) -> TcxTargetElement {
    TcxTargetElement {
        heart_rate_zone: Some(TcxZone {
            low: Some(TcxHeartRateValue::bpm(min)),
            high: Some(TcxHeartRateValue::bpm(max)),
            ..TcxZone::of_type(xsi_types::CUSTOM_HEART_RATE_ZONE)
        }),
        ..TcxTargetElement::of_type(xsi_types::TARGET_HEART_RATE)
    }
}

fn speed_range(min: f64, max: f64) -> TcxTargetElement {
    TcxTargetElement {
        speed_zone: Some(TcxZone {
            view_as: Some(SPEED_VIEW_AS_PACE.to_owned()),
            low_in_meters_per_second: Some(min),
            high_in_meters_per_second: Some(max),
            ..TcxZone::of_type(xsi_types::CUSTOM_SPEED_ZONE)
        }),
        ..TcxTargetElement::of_type(xsi_types::TARGET_SPEED)
    }
}

fn cadence_range(min: f64, max: f64) -> TcxTargetElement {
    TcxTargetElement {
        low: Some(min),
        high: Some(max),
        ..TcxTargetElement::of_type(xsi_types::TARGET_CADENCE)
    }
}

fn unsupported(step_index: u32, target: &Target) -> TcxTargetElement {
    warn!(
        step_index,
        target_type = target.kind().as_str(),
        "Target has no TCX encoding, written as None_t"
    );
    TcxTargetElement::none()
}

/// Encode a KRD target as a `Target` element.
///
/// Single values become a custom zone whose bounds are equal.
#[must_use]
pub fn encode_target(target: &Target, step_index: u32) -> TcxTargetElement {
    match *target {
        Target::HeartRate { value } => match value {
            HeartRateValue::Bpm { value } => heart_rate_range(value, value),
            HeartRateValue::Range { min, max } => heart_rate_range(min, max),
            HeartRateValue::Zone { value } => TcxTargetElement {
                heart_rate_zone: Some(TcxZone {
                    number: Some(value),
                    ..TcxZone::of_type(xsi_types::PREDEFINED_HEART_RATE_ZONE)
                }),
                ..TcxTargetElement::of_type(xsi_types::TARGET_HEART_RATE)
            },
            HeartRateValue::PercentMax { .. } => unsupported(step_index, target),
        },
        Target::Pace { value } => match value {
            PaceValue::Mps { value } => speed_range(value, value),
            PaceValue::MinPerKm { value } => {
                let mps = min_per_km_to_mps(value);
                speed_range(mps, mps)
            }
            PaceValue::Range { min, max } => speed_range(min, max),
            PaceValue::Zone { value } => TcxTargetElement {
                speed_zone: Some(TcxZone {
                    number: Some(value),
                    ..TcxZone::of_type(xsi_types::PREDEFINED_SPEED_ZONE)
                }),
                ..TcxTargetElement::of_type(xsi_types::TARGET_SPEED)
            },
        },
        Target::Cadence { value } => match value {
            CadenceValue::Rpm { value } | CadenceValue::Spm { value } => {
                cadence_range(value, value)
            }
            CadenceValue::Range { min, max } => cadence_range(min, max),
            CadenceValue::Zone { .. } => unsupported(step_index, target),
        },
        Target::Power { .. } | Target::StrokeType { .. } => unsupported(step_index, target),
        Target::Open => TcxTargetElement::none(),
    }
}
