// ABOUTME: TCX workout records in XML-object form (attributes as `@_` keys, PascalCase elements)
// ABOUTME: Single-child elements are accepted either as an object or as an array
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use serde::{Deserialize, Deserializer, Serialize};

use super::constants::xsi_types;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items,
    })
}

/// Heart-rate value element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcxHeartRateValue {
    /// Always `HeartRateInBeatsPerMinute_t`
    #[serde(rename = "@_xsi:type")]
    pub xsi_type: String,
    /// Beats per minute
    #[serde(rename = "Value")]
    pub value: u32,
}

impl TcxHeartRateValue {
    /// Value element for `bpm`
    #[must_use]
    pub fn bpm(value: u32) -> Self {
        Self {
            xsi_type: xsi_types::HEART_RATE_BPM.to_owned(),
            value,
        }
    }
}

/// `Duration` element of a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcxDurationElement {
    /// Duration kind (`Time_t`, `Distance_t`, ...)
    #[serde(rename = "@_xsi:type")]
    pub xsi_type: String,
    /// Seconds for `Time_t`
    #[serde(rename = "Seconds", default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,
    /// Meters for `Distance_t`
    #[serde(rename = "Meters", default, skip_serializing_if = "Option::is_none")]
    pub meters: Option<f64>,
    /// Threshold for the heart-rate kinds
    #[serde(rename = "HeartRate", default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<TcxHeartRateValue>,
    /// Kilocalories for `CaloriesBurned_t`
    #[serde(rename = "Calories", default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

impl TcxDurationElement {
    /// Element of the given kind with no value children
    #[must_use]
    pub fn of_type(xsi_type: &str) -> Self {
        Self {
            xsi_type: xsi_type.to_owned(),
            seconds: None,
            meters: None,
            heart_rate: None,
            calories: None,
        }
    }
}

/// Heart-rate or speed zone of a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcxZone {
    /// Zone kind (`PredefinedHeartRateZone_t`, `CustomSpeedZone_t`, ...)
    #[serde(rename = "@_xsi:type")]
    pub xsi_type: String,
    /// Zone number of predefined zones
    #[serde(rename = "Number", default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u8>,
    /// Lower bound of a custom heart-rate zone
    #[serde(rename = "Low", default, skip_serializing_if = "Option::is_none")]
    pub low: Option<TcxHeartRateValue>,
    /// Upper bound of a custom heart-rate zone
    #[serde(rename = "High", default, skip_serializing_if = "Option::is_none")]
    pub high: Option<TcxHeartRateValue>,
    /// Display hint of a custom speed zone
    #[serde(rename = "ViewAs", default, skip_serializing_if = "Option::is_none")]
    pub view_as: Option<String>,
    /// Lower bound of a custom speed zone
    #[serde(
        rename = "LowInMetersPerSecond",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub low_in_meters_per_second: Option<f64>,
    /// Upper bound of a custom speed zone
    #[serde(
        rename = "HighInMetersPerSecond",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub high_in_meters_per_second: Option<f64>,
}

impl TcxZone {
    /// Zone of the given kind with no value children
    #[must_use]
    pub fn of_type(xsi_type: &str) -> Self {
        Self {
            xsi_type: xsi_type.to_owned(),
            number: None,
            low: None,
            high: None,
            view_as: None,
            low_in_meters_per_second: None,
            high_in_meters_per_second: None,
        }
    }
}

/// `Target` element of a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcxTargetElement {
    /// Target kind (`None_t`, `HeartRate_t`, `Speed_t`, `Cadence_t`)
    #[serde(rename = "@_xsi:type")]
    pub xsi_type: String,
    /// Zone of a `HeartRate_t` target
    #[serde(rename = "HeartRateZone", default, skip_serializing_if = "Option::is_none")]
    pub heart_rate_zone: Option<TcxZone>,
    /// Zone of a `Speed_t` target
    #[serde(rename = "SpeedZone", default, skip_serializing_if = "Option::is_none")]
    pub speed_zone: Option<TcxZone>,
    /// Lower cadence bound of a `Cadence_t` target
    #[serde(rename = "Low", default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    /// Upper cadence bound of a `Cadence_t` target
    #[serde(rename = "High", default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
}

impl TcxTargetElement {
    /// Target of the given kind with no children
    #[must_use]
    pub fn of_type(xsi_type: &str) -> Self {
        Self {
            xsi_type: xsi_type.to_owned(),
            heart_rate_zone: None,
            speed_zone: None,
            low: None,
            high: None,
        }
    }

    /// `None_t` target
    #[must_use]
    pub fn none() -> Self {
        Self::of_type(xsi_types::TARGET_NONE)
    }
}

/// `Step_t` element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcxStepElement {
    /// 1-based step id
    #[serde(rename = "StepId")]
    pub step_id: u32,
    /// Step name
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When the step ends
    #[serde(rename = "Duration")]
    pub duration: TcxDurationElement,
    /// `Active` or `Resting`
    #[serde(rename = "Intensity", default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    /// What to hold
    #[serde(rename = "Target", default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TcxTargetElement>,
}

/// `Repeat_t` element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcxRepeatElement {
    /// 1-based step id
    #[serde(rename = "StepId")]
    pub step_id: u32,
    /// Number of repetitions
    #[serde(rename = "Repetitions")]
    pub repetitions: u32,
    /// Repeated steps
    #[serde(rename = "Child", deserialize_with = "one_or_many", default)]
    pub children: Vec<TcxStepEntry>,
}

/// Entry of a workout's or repeat's step list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@_xsi:type")]
pub enum TcxStepEntry {
    /// Plain step
    #[serde(rename = "Step_t")]
    Step(TcxStepElement),
    /// Repeat group
    #[serde(rename = "Repeat_t")]
    Repeat(TcxRepeatElement),
}

/// `Workout` element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcxWorkout {
    /// `Running`, `Biking` or `Other`
    #[serde(rename = "@_Sport")]
    pub sport: String,
    /// Workout name
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Steps and repeats
    #[serde(rename = "Step", deserialize_with = "one_or_many", default)]
    pub steps: Vec<TcxStepEntry>,
}
