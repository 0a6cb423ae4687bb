// ABOUTME: KRD step duration taxonomy: the 14 conditions that can end a workout step
// ABOUTME: Closed tagged union with shape validation and a discriminant enum for type tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_positive, ValidationError};

/// The condition that ends a workout step.
///
/// Serialized with an inline `type` tag, e.g. `{"type":"time","seconds":300}`.
/// The `repeat_until_*` variants mark the end of a conditional repeat and
/// carry `repeatFrom`, the message index of the step the repeat jumps back to.
///
/// Every variant except `Open` requires all of its fields. Adapters never build
/// a partially populated variant: incomplete external input becomes `Open`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Duration {
    /// Elapsed time
    Time {
        /// Seconds, strictly positive
        seconds: f64,
    },
    /// Covered distance
    Distance {
        /// Meters, strictly positive
        meters: f64,
    },
    /// Burned energy
    Calories {
        /// Kilocalories, strictly positive
        calories: u32,
    },
    /// Heart rate drops below a threshold
    HeartRateLessThan {
        /// Beats per minute, strictly positive
        bpm: u32,
    },
    /// Power drops below a threshold
    PowerLessThan {
        /// Watts, strictly positive
        watts: f64,
    },
    /// Power rises above a threshold
    PowerGreaterThan {
        /// Watts, strictly positive
        watts: f64,
    },
    /// Repeat from `repeat_from` until the total time is reached
    RepeatUntilTime {
        /// Seconds, strictly positive
        seconds: f64,
        /// Message index the repeat jumps back to
        #[serde(rename = "repeatFrom")]
        repeat_from: u32,
    },
    /// Repeat from `repeat_from` until the total distance is reached
    RepeatUntilDistance {
        /// Meters, strictly positive
        meters: f64,
        /// Message index the repeat jumps back to
        #[serde(rename = "repeatFrom")]
        repeat_from: u32,
    },
    /// Repeat from `repeat_from` until the energy target is reached
    RepeatUntilCalories {
        /// Kilocalories, strictly positive
        calories: u32,
        /// Message index the repeat jumps back to
        #[serde(rename = "repeatFrom")]
        repeat_from: u32,
    },
    /// Repeat from `repeat_from` until heart rate drops below a threshold
    RepeatUntilHeartRateLessThan {
        /// Beats per minute, strictly positive
        bpm: u32,
        /// Message index the repeat jumps back to
        #[serde(rename = "repeatFrom")]
        repeat_from: u32,
    },
    /// Repeat from `repeat_from` until heart rate rises above a threshold
    RepeatUntilHeartRateGreaterThan {
        /// Beats per minute, strictly positive
        bpm: u32,
        /// Message index the repeat jumps back to
        #[serde(rename = "repeatFrom")]
        repeat_from: u32,
    },
    /// Repeat from `repeat_from` until power drops below a threshold
    RepeatUntilPowerLessThan {
        /// Watts, strictly positive
        watts: f64,
        /// Message index the repeat jumps back to
        #[serde(rename = "repeatFrom")]
        repeat_from: u32,
    },
    /// Repeat from `repeat_from` until power rises above a threshold
    RepeatUntilPowerGreaterThan {
        /// Watts, strictly positive
        watts: f64,
        /// Message index the repeat jumps back to
        #[serde(rename = "repeatFrom")]
        repeat_from: u32,
    },
    /// No condition: the athlete advances manually
    Open,
}

/// Discriminant of a [`Duration`], serialized as the `durationType` tag of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationType {
    /// See [`Duration::Time`]
    Time,
    /// See [`Duration::Distance`]
    Distance,
    /// See [`Duration::Calories`]
    Calories,
    /// See [`Duration::HeartRateLessThan`]
    HeartRateLessThan,
    /// See [`Duration::PowerLessThan`]
    PowerLessThan,
    /// See [`Duration::PowerGreaterThan`]
    PowerGreaterThan,
    /// See [`Duration::RepeatUntilTime`]
    RepeatUntilTime,
    /// See [`Duration::RepeatUntilDistance`]
    RepeatUntilDistance,
    /// See [`Duration::RepeatUntilCalories`]
    RepeatUntilCalories,
    /// See [`Duration::RepeatUntilHeartRateLessThan`]
    RepeatUntilHeartRateLessThan,
    /// See [`Duration::RepeatUntilHeartRateGreaterThan`]
    RepeatUntilHeartRateGreaterThan,
    /// See [`Duration::RepeatUntilPowerLessThan`]
    RepeatUntilPowerLessThan,
    /// See [`Duration::RepeatUntilPowerGreaterThan`]
    RepeatUntilPowerGreaterThan,
    /// See [`Duration::Open`]
    Open,
}

impl DurationType {
    /// KRD literal of this tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Distance => "distance",
            Self::Calories => "calories",
            Self::HeartRateLessThan => "heart_rate_less_than",
            Self::PowerLessThan => "power_less_than",
            Self::PowerGreaterThan => "power_greater_than",
            Self::RepeatUntilTime => "repeat_until_time",
            Self::RepeatUntilDistance => "repeat_until_distance",
            Self::RepeatUntilCalories => "repeat_until_calories",
            Self::RepeatUntilHeartRateLessThan => "repeat_until_heart_rate_less_than",
            Self::RepeatUntilHeartRateGreaterThan => "repeat_until_heart_rate_greater_than",
            Self::RepeatUntilPowerLessThan => "repeat_until_power_less_than",
            Self::RepeatUntilPowerGreaterThan => "repeat_until_power_greater_than",
            Self::Open => "open",
        }
    }

    /// Whether this tag marks a conditional repeat
    #[must_use]
    pub const fn is_repeat(&self) -> bool {
        matches!(
            self,
            Self::RepeatUntilTime
                | Self::RepeatUntilDistance
                | Self::RepeatUntilCalories
                | Self::RepeatUntilHeartRateLessThan
                | Self::RepeatUntilHeartRateGreaterThan
                | Self::RepeatUntilPowerLessThan
                | Self::RepeatUntilPowerGreaterThan
        )
    }
}

impl Duration {
    /// Discriminant of this duration
    #[must_use]
    pub const fn kind(&self) -> DurationType {
        match self {
            Self::Time { .. } => DurationType::Time,
            Self::Distance { .. } => DurationType::Distance,
            Self::Calories { .. } => DurationType::Calories,
            Self::HeartRateLessThan { .. } => DurationType::HeartRateLessThan,
            Self::PowerLessThan { .. } => DurationType::PowerLessThan,
            Self::PowerGreaterThan { .. } => DurationType::PowerGreaterThan,
            Self::RepeatUntilTime { .. } => DurationType::RepeatUntilTime,
            Self::RepeatUntilDistance { .. } => DurationType::RepeatUntilDistance,
            Self::RepeatUntilCalories { .. } => DurationType::RepeatUntilCalories,
            Self::RepeatUntilHeartRateLessThan { .. } => DurationType::RepeatUntilHeartRateLessThan,
            Self::RepeatUntilHeartRateGreaterThan { .. } => {
                DurationType::RepeatUntilHeartRateGreaterThan
            }
            Self::RepeatUntilPowerLessThan { .. } => DurationType::RepeatUntilPowerLessThan,
            Self::RepeatUntilPowerGreaterThan { .. } => DurationType::RepeatUntilPowerGreaterThan,
            Self::Open => DurationType::Open,
        }
    }

    /// Message index a conditional repeat jumps back to
    #[must_use]
    pub const fn repeat_from(&self) -> Option<u32> {
        match self {
            Self::RepeatUntilTime { repeat_from, .. }
            | Self::RepeatUntilDistance { repeat_from, .. }
            | Self::RepeatUntilCalories { repeat_from, .. }
            | Self::RepeatUntilHeartRateLessThan { repeat_from, .. }
            | Self::RepeatUntilHeartRateGreaterThan { repeat_from, .. }
            | Self::RepeatUntilPowerLessThan { repeat_from, .. }
            | Self::RepeatUntilPowerGreaterThan { repeat_from, .. } => Some(*repeat_from),
            _ => None,
        }
    }

    /// Check the field constraints of this variant
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonPositive` naming the first field that is
    /// zero, negative or not finite
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Time { seconds } | Self::RepeatUntilTime { seconds, .. } => {
                ensure_positive("seconds", *seconds)
            }
            Self::Distance { meters } | Self::RepeatUntilDistance { meters, .. } => {
                ensure_positive("meters", *meters)
            }
            Self::Calories { calories } | Self::RepeatUntilCalories { calories, .. } => {
                ensure_positive("calories", f64::from(*calories))
            }
            Self::HeartRateLessThan { bpm }
            | Self::RepeatUntilHeartRateLessThan { bpm, .. }
            | Self::RepeatUntilHeartRateGreaterThan { bpm, .. } => {
                ensure_positive("bpm", f64::from(*bpm))
            }
            Self::PowerLessThan { watts }
            | Self::PowerGreaterThan { watts }
            | Self::RepeatUntilPowerLessThan { watts, .. }
            | Self::RepeatUntilPowerGreaterThan { watts, .. } => ensure_positive("watts", *watts),
            Self::Open => Ok(()),
        }
    }

    /// Build a duration from an untyped record, rejecting anything that is not
    /// exactly one valid variant
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidShape` when the record matches no variant
    /// (unknown tag, missing or mistyped field) and `ValidationError::NonPositive`
    /// when a matching variant violates its constraints
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let duration: Self = serde_json::from_value(value.clone())
            .map_err(|e| ValidationError::invalid_shape("duration", e.to_string()))?;
        duration.validate()?;
        Ok(duration)
    }
}
