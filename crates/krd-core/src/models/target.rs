// ABOUTME: KRD step target taxonomy: the metric and intensity a step asks the athlete to hold
// ABOUTME: Power, heart rate, cadence, pace and stroke targets expressed as zone, range or absolute unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_positive, ValidationError};

/// What a workout step instructs the athlete to hold.
///
/// Serialized as `{"type":"power","value":{"unit":"watts","value":250}}`;
/// `open` carries no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Target {
    /// Power output
    Power {
        /// Zone, range or absolute power
        value: PowerValue,
    },
    /// Heart rate
    HeartRate {
        /// Zone, range or absolute heart rate
        value: HeartRateValue,
    },
    /// Pedalling or stepping cadence
    Cadence {
        /// Zone, range or absolute cadence
        value: CadenceValue,
    },
    /// Speed or pace
    Pace {
        /// Zone, range or absolute pace
        value: PaceValue,
    },
    /// Swim stroke
    StrokeType {
        /// Stroke identifier
        value: StrokeTypeValue,
    },
    /// No target
    Open,
}

/// Power target value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum PowerValue {
    /// Absolute power in watts
    Watts {
        /// Watts
        value: f64,
    },
    /// Percentage of functional threshold power
    PercentFtp {
        /// Percent of FTP
        value: f64,
    },
    /// Training zone number
    Zone {
        /// Zone, 1-based
        value: u8,
    },
    /// Custom low/high range in watts
    Range {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

/// Heart-rate target value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum HeartRateValue {
    /// Beats per minute
    Bpm {
        /// Beats per minute
        value: u32,
    },
    /// Percentage of maximum heart rate
    PercentMax {
        /// Percent of max heart rate
        value: u32,
    },
    /// Training zone number
    Zone {
        /// Zone, 1-based
        value: u8,
    },
    /// Custom low/high range in bpm
    Range {
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },
}

/// Cadence target value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum CadenceValue {
    /// Revolutions per minute
    Rpm {
        /// Revolutions per minute
        value: f64,
    },
    /// Steps per minute
    Spm {
        /// Steps per minute
        value: f64,
    },
    /// Training zone number
    Zone {
        /// Zone, 1-based
        value: u8,
    },
    /// Custom low/high range in rpm
    Range {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

/// Pace target value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum PaceValue {
    /// Speed in meters per second
    Mps {
        /// Meters per second
        value: f64,
    },
    /// Pace in minutes per kilometer
    MinPerKm {
        /// Minutes per kilometer
        value: f64,
    },
    /// Training zone number
    Zone {
        /// Zone, 1-based
        value: u8,
    },
    /// Custom low/high range in meters per second
    Range {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

/// Swim stroke target value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum StrokeTypeValue {
    /// Stroke identifier (0 freestyle, 1 backstroke, 2 breaststroke, 3 butterfly, ...)
    SwimStroke {
        /// Stroke identifier
        value: u8,
    },
}

/// Discriminant of a [`Target`], serialized as the `targetType` tag of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// See [`Target::Power`]
    Power,
    /// See [`Target::HeartRate`]
    HeartRate,
    /// See [`Target::Cadence`]
    Cadence,
    /// See [`Target::Pace`]
    Pace,
    /// See [`Target::StrokeType`]
    StrokeType,
    /// See [`Target::Open`]
    Open,
}

impl TargetType {
    /// KRD literal of this tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::HeartRate => "heart_rate",
            Self::Cadence => "cadence",
            Self::Pace => "pace",
            Self::StrokeType => "stroke_type",
            Self::Open => "open",
        }
    }
}

fn ensure_zone(value: u8) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::out_of_range("zone", "zones are 1-based"));
    }
    Ok(())
}

fn ensure_range(min: f64, max: f64) -> Result<(), ValidationError> {
    ensure_positive("min", min)?;
    ensure_positive("max", max)?;
    if min > max {
        return Err(ValidationError::out_of_range(
            "min",
            format!("range lower bound {min} exceeds upper bound {max}"),
        ));
    }
    Ok(())
}

impl Target {
    /// Discriminant of this target
    #[must_use]
    pub const fn kind(&self) -> TargetType {
        match self {
            Self::Power { .. } => TargetType::Power,
            Self::HeartRate { .. } => TargetType::HeartRate,
            Self::Cadence { .. } => TargetType::Cadence,
            Self::Pace { .. } => TargetType::Pace,
            Self::StrokeType { .. } => TargetType::StrokeType,
            Self::Open => TargetType::Open,
        }
    }

    /// Check the field constraints of this target
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for zero zones, inverted or non-positive
    /// ranges, and non-positive absolute values
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Power { value } => match *value {
                PowerValue::Watts { value } | PowerValue::PercentFtp { value } => {
                    ensure_positive("value", value)
                }
                PowerValue::Zone { value } => ensure_zone(value),
                PowerValue::Range { min, max } => ensure_range(min, max),
            },
            Self::HeartRate { value } => match *value {
                HeartRateValue::Bpm { value } | HeartRateValue::PercentMax { value } => {
                    ensure_positive("value", f64::from(value))
                }
                HeartRateValue::Zone { value } => ensure_zone(value),
                HeartRateValue::Range { min, max } => ensure_range(f64::from(min), f64::from(max)),
            },
            Self::Cadence { value } => match *value {
                CadenceValue::Rpm { value } | CadenceValue::Spm { value } => {
                    ensure_positive("value", value)
                }
                CadenceValue::Zone { value } => ensure_zone(value),
                CadenceValue::Range { min, max } => ensure_range(min, max),
            },
            Self::Pace { value } => match *value {
                PaceValue::Mps { value } | PaceValue::MinPerKm { value } => {
                    ensure_positive("value", value)
                }
                PaceValue::Zone { value } => ensure_zone(value),
                PaceValue::Range { min, max } => ensure_range(min, max),
            },
            Self::StrokeType { .. } | Self::Open => Ok(()),
        }
    }

    /// Build a target from an untyped record, rejecting anything that is not
    /// exactly one valid variant
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidShape` when the record matches no variant
    /// and the constraint errors of [`Target::validate`] otherwise
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let target: Self = serde_json::from_value(value.clone())
            .map_err(|e| ValidationError::invalid_shape("target", e.to_string()))?;
        target.validate()?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_unit_tag() {
        let target = Target::Power {
            value: PowerValue::PercentFtp { value: 85.0 },
        };
        assert_eq!(
            serde_json::to_value(&target).unwrap(),
            json!({"type": "power", "value": {"unit": "percent_ftp", "value": 85.0}})
        );
    }

    #[test]
    fn test_range_must_be_ordered() {
        let target = Target::HeartRate {
            value: HeartRateValue::Range { min: 160, max: 140 },
        };
        assert!(target.validate().is_err());
    }

    #[test]
    fn test_zone_is_one_based() {
        let target = Target::Power {
            value: PowerValue::Zone { value: 0 },
        };
        assert!(target.validate().is_err());
    }
}
