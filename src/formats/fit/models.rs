// ABOUTME: FIT message records as produced and consumed by FIT SDK decoders and encoders
// ABOUTME: camelCase field names and literal strings are the wire contract and must not change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Duration fields of a workout step message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitDurationFields {
    /// Duration-type literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_type: Option<String>,
    /// Seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_time: Option<f64>,
    /// Meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_distance: Option<f64>,
    /// Beats per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_hr: Option<u32>,
    /// Kilocalories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_calories: Option<u32>,
    /// Watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_power: Option<f64>,
    /// Message index a repeat jumps back to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_step: Option<u32>,
    /// Beats per minute for `repeatUntilHrGreaterThan`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_hr: Option<u32>,
}

/// Target fields of a workout step message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitTargetFields {
    /// Target-type literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    /// Overloaded absolute or offset-relative value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
    /// Heart-rate zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_hr_zone: Option<u8>,
    /// Power zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_power_zone: Option<u8>,
    /// Cadence zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_cadence_zone: Option<u8>,
    /// Speed zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_speed_zone: Option<u8>,
    /// Swim stroke identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_stroke_type: Option<u8>,
    /// Power range lower bound in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_target_power_low: Option<f64>,
    /// Power range upper bound in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_target_power_high: Option<f64>,
    /// Heart-rate range lower bound in bpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_target_heart_rate_low: Option<u32>,
    /// Heart-rate range upper bound in bpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_target_heart_rate_high: Option<u32>,
    /// Cadence range lower bound in rpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_target_cadence_low: Option<f64>,
    /// Cadence range upper bound in rpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_target_cadence_high: Option<f64>,
    /// Speed range lower bound in m/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_target_speed_low: Option<f64>,
    /// Speed range upper bound in m/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_target_speed_high: Option<f64>,
}

/// One `workoutStepMesgs` entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitWorkoutStep {
    /// Position in the message sequence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_index: Option<u32>,
    /// Step name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wkt_step_name: Option<String>,
    /// Duration fields
    #[serde(flatten)]
    pub duration: FitDurationFields,
    /// Target fields
    #[serde(flatten)]
    pub target: FitTargetFields,
    /// Repeat count of a `repeatUntilStepsCmplt` terminator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_steps: Option<u32>,
    /// Intensity literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Equipment literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
}

impl FitWorkoutStep {
    /// Whether this message closes a repetition block
    #[must_use]
    pub fn is_repeat_terminator(&self) -> bool {
        self.duration.duration_type.as_deref()
            == Some(super::constants::duration_types::REPEAT_UNTIL_STEPS_COMPLETE)
    }
}

/// One `fileIdMesgs` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitFileId {
    /// File type literal, `workout` for workout files
    #[serde(rename = "type")]
    pub file_type: String,
    /// Manufacturer literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Product name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Numeric serial number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<u32>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
}

/// One `workoutMesgs` entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitWorkout {
    /// Workout name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wkt_name: Option<String>,
    /// Sport literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    /// Sub-sport literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_sport: Option<String>,
    /// Number of step messages, terminators included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_valid_steps: Option<u32>,
    /// Pool length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_length: Option<f64>,
    /// Pool length display unit literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_length_unit: Option<String>,
}

/// Decoded FIT workout file as message arrays keyed by message kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitMessages {
    /// File identity messages
    #[serde(rename = "fileIdMesgs", default)]
    pub file_id_mesgs: Vec<FitFileId>,
    /// Workout summary messages
    #[serde(rename = "workoutMesgs", default)]
    pub workout_mesgs: Vec<FitWorkout>,
    /// Step and terminator messages in message-index order
    #[serde(rename = "workoutStepMesgs", default)]
    pub workout_step_mesgs: Vec<FitWorkoutStep>,
}
