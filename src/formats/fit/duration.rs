// ABOUTME: FIT duration converter between durationType field groups and the KRD Duration taxonomy
// ABOUTME: Unknown literals and missing or non-positive required fields decode to open
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::models::Duration;

use super::constants::duration_types;
use super::models::FitDurationFields;

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

fn positive_count(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}

/// Decode the duration fields of a step message.
///
/// `repeatUntilHrGreaterThan` reads its threshold from `repeatHr` while every
/// other heart-rate condition reads `durationHr`; both names are part of the
/// FIT profile.
#[must_use]
pub fn decode_duration(fields: &FitDurationFields) -> Duration {
    let Some(duration_type) = fields.duration_type.as_deref() else {
        return Duration::Open;
    };

    let time = || positive(fields.duration_time);
    let distance = || positive(fields.duration_distance);
    let calories = || positive_count(fields.duration_calories);
    let hr = || positive_count(fields.duration_hr);
    let power = || positive(fields.duration_power);
    let step = fields.duration_step;

    let decoded = match duration_type {
        duration_types::TIME => time().map(|seconds| Duration::Time { seconds }),
        duration_types::DISTANCE => distance().map(|meters| Duration::Distance { meters }),
        duration_types::CALORIES => calories().map(|calories| Duration::Calories { calories }),
        duration_types::HR_LESS_THAN => hr().map(|bpm| Duration::HeartRateLessThan { bpm }),
        duration_types::POWER_LESS_THAN => power().map(|watts| Duration::PowerLessThan { watts }),
        duration_types::POWER_GREATER_THAN => {
            power().map(|watts| Duration::PowerGreaterThan { watts })
        }
        duration_types::REPEAT_UNTIL_TIME => time()
            .zip(step)
            .map(|(seconds, repeat_from)| Duration::RepeatUntilTime {
                seconds,
                repeat_from,
            }),
        duration_types::REPEAT_UNTIL_DISTANCE => {
            distance()
                .zip(step)
                .map(|(meters, repeat_from)| Duration::RepeatUntilDistance {
                    meters,
                    repeat_from,
                })
        }
        duration_types::REPEAT_UNTIL_CALORIES => {
            calories()
                .zip(step)
                .map(|(calories, repeat_from)| Duration::RepeatUntilCalories {
                    calories,
                    repeat_from,
                })
        }
        duration_types::REPEAT_UNTIL_HR_LESS_THAN => {
            hr().zip(step)
                .map(|(bpm, repeat_from)| Duration::RepeatUntilHeartRateLessThan {
                    bpm,
                    repeat_from,
                })
        }
        duration_types::REPEAT_UNTIL_HR_GREATER_THAN => positive_count(fields.repeat_hr)
            .zip(step)
            .map(|(bpm, repeat_from)| Duration::RepeatUntilHeartRateGreaterThan {
                bpm,
                repeat_from,
            }),
        duration_types::REPEAT_UNTIL_POWER_LESS_THAN => {
            power()
                .zip(step)
                .map(|(watts, repeat_from)| Duration::RepeatUntilPowerLessThan {
                    watts,
                    repeat_from,
                })
        }
        duration_types::REPEAT_UNTIL_POWER_GREATER_THAN => {
            power()
                .zip(step)
                .map(|(watts, repeat_from)| Duration::RepeatUntilPowerGreaterThan {
                    watts,
                    repeat_from,
                })
        }
        _ => None,
    };

    decoded.unwrap_or(Duration::Open)
}

/// Encode a KRD duration as step message duration fields
#[must_use]
pub fn encode_duration(duration: &Duration) -> FitDurationFields {
    let typed = |literal: &str| FitDurationFields {
        duration_type: Some(literal.to_owned()),
        ..FitDurationFields::default()
    };

    match *duration {
        Duration::Time { seconds } => FitDurationFields {
            duration_time: Some(seconds),
            ..typed(duration_types::TIME)
        },
        Duration::Distance { meters } => FitDurationFields {
            duration_distance: Some(meters),
            ..typed(duration_types::DISTANCE)
        },
        Duration::Calories { calories } => FitDurationFields {
            duration_calories: Some(calories),
            ..typed(duration_types::CALORIES)
        },
        Duration::HeartRateLessThan { bpm } => FitDurationFields {
            duration_hr: Some(bpm),
            ..typed(duration_types::HR_LESS_THAN)
        },
        Duration::PowerLessThan { watts } => FitDurationFields {
            duration_power: Some(watts),
            ..typed(duration_types::POWER_LESS_THAN)
        },
        Duration::PowerGreaterThan { watts } => FitDurationFields {
            duration_power: Some(watts),
            ..typed(duration_types::POWER_GREATER_THAN)
        },
        Duration::RepeatUntilTime {
            seconds,
            repeat_from,
        } => FitDurationFields {
            duration_time: Some(seconds),
            duration_step: Some(repeat_from),
            ..typed(duration_types::REPEAT_UNTIL_TIME)
        },
        Duration::RepeatUntilDistance {
            meters,
            repeat_from,
        } => FitDurationFields {
            duration_distance: Some(meters),
            duration_step: Some(repeat_from),
            ..typed(duration_types::REPEAT_UNTIL_DISTANCE)
        },
        Duration::RepeatUntilCalories {
            calories,
            repeat_from,
        } => FitDurationFields {
            duration_calories: Some(calories),
            duration_step: Some(repeat_from),
            ..typed(duration_types::REPEAT_UNTIL_CALORIES)
        },
        Duration::RepeatUntilHeartRateLessThan { bpm, repeat_from } => FitDurationFields {
            duration_hr: Some(bpm),
            duration_step: Some(repeat_from),
            ..typed(duration_types::REPEAT_UNTIL_HR_LESS_THAN)
        },
        Duration::RepeatUntilHeartRateGreaterThan { bpm, repeat_from } => FitDurationFields {
            repeat_hr: Some(bpm),
            duration_step: Some(repeat_from),
            ..typed(duration_types::REPEAT_UNTIL_HR_GREATER_THAN)
        },
        Duration::RepeatUntilPowerLessThan { watts, repeat_from } => FitDurationFields {
            duration_power: Some(watts),
            duration_step: Some(repeat_from),
            ..typed(duration_types::REPEAT_UNTIL_POWER_LESS_THAN)
        },
        Duration::RepeatUntilPowerGreaterThan { watts, repeat_from } => FitDurationFields {
            duration_power: Some(watts),
            duration_step: Some(repeat_from),
            ..typed(duration_types::REPEAT_UNTIL_POWER_GREATER_THAN)
        },
        Duration::Open => typed(duration_types::OPEN),
    }
}
