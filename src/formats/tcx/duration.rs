// ABOUTME: TCX duration converter with extension side-channel for heart-rate and calorie conditions
// ABOUTME: Extended conditions decode to open plus an extension record that re-encodes losslessly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::models::Duration;
use serde::{Deserialize, Serialize};

use super::constants::{duration_types, xsi_types};
use super::models::{TcxDurationElement, TcxHeartRateValue};

/// Flat duration record: `{durationType, seconds?, meters?, bpm?, calories?}`.
///
/// `durationType` is kept untyped so a non-string value decodes to `open`
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcxDurationData {
    /// Duration-type literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_type: Option<serde_json::Value>,
    /// Seconds for `Time`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,
    /// Meters for `Distance`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meters: Option<f64>,
    /// Threshold for `HeartRateAbove` and `HeartRateBelow`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpm: Option<u32>,
    /// Threshold for `CaloriesBurned`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

impl TcxDurationData {
    /// Record with a string duration type
    #[must_use]
    pub fn of_type(duration_type: &str) -> Self {
        Self {
            duration_type: Some(serde_json::Value::from(duration_type)),
            ..Self::default()
        }
    }
}

impl From<&TcxDurationElement> for TcxDurationData {
    fn from(element: &TcxDurationElement) -> Self {
        let duration_type = match element.xsi_type.as_str() {
            xsi_types::TIME => duration_types::TIME,
            xsi_types::DISTANCE => duration_types::DISTANCE,
            xsi_types::HEART_RATE_ABOVE => duration_types::HEART_RATE_ABOVE,
            xsi_types::HEART_RATE_BELOW => duration_types::HEART_RATE_BELOW,
            xsi_types::CALORIES_BURNED => duration_types::CALORIES_BURNED,
            _ => duration_types::LAP_BUTTON,
        };
        Self {
            seconds: element.seconds,
            meters: element.meters,
            bpm: element.heart_rate.as_ref().map(|hr| hr.value),
            calories: element.calories,
            ..Self::of_type(duration_type)
        }
    }
}

/// Duration conditions TCX can express but KRD carries as `open`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcxDurationExtensions {
    /// Heart rate above, in bpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate_above: Option<u32>,
    /// Heart rate below, in bpm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate_below: Option<u32>,
    /// Calories burned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
}

impl TcxDurationExtensions {
    /// Whether no condition is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.heart_rate_above.is_none()
            && self.heart_rate_below.is_none()
            && self.calories_burned.is_none()
    }
}

/// KRD duration plus the extension record for conditions KRD cannot tag
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedDuration {
    /// KRD duration, `open` for extended conditions
    pub duration: Duration,
    /// Original extended condition, if any
    pub extensions: Option<TcxDurationExtensions>,
}

impl DecodedDuration {
    const fn plain(duration: Duration) -> Self {
        Self {
            duration,
            extensions: None,
        }
    }

    const fn extended(extensions: TcxDurationExtensions) -> Self {
        Self {
            duration: Duration::Open,
            extensions: Some(extensions),
        }
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Decode a flat duration record.
///
/// `HeartRateAbove`, `HeartRateBelow` and `CaloriesBurned` become `open` with
/// the original threshold in the extension record; without a threshold they
/// are plain `open`.
#[must_use]
pub fn decode_duration(data: &TcxDurationData) -> DecodedDuration {
    let Some(duration_type) = data.duration_type.as_ref().and_then(|v| v.as_str()) else {
        return DecodedDuration::plain(Duration::Open);
    };

    match duration_type {
        duration_types::TIME => DecodedDuration::plain(
            positive(data.seconds).map_or(Duration::Open, |seconds| Duration::Time { seconds }),
        ),
        duration_types::DISTANCE => DecodedDuration::plain(
            positive(data.meters).map_or(Duration::Open, |meters| Duration::Distance { meters }),
        ),
        duration_types::HEART_RATE_ABOVE => data.bpm.map_or_else(
            || DecodedDuration::plain(Duration::Open),
            |bpm| {
                DecodedDuration::extended(TcxDurationExtensions {
                    heart_rate_above: Some(bpm),
                    ..TcxDurationExtensions::default()
                })
            },
        ),
        duration_types::HEART_RATE_BELOW => data.bpm.map_or_else(
            || DecodedDuration::plain(Duration::Open),
            |bpm| {
                DecodedDuration::extended(TcxDurationExtensions {
                    heart_rate_below: Some(bpm),
                    ..TcxDurationExtensions::default()
                })
            },
        ),
        duration_types::CALORIES_BURNED => data.calories.map_or_else(
            || DecodedDuration::plain(Duration::Open),
            |calories| {
                DecodedDuration::extended(TcxDurationExtensions {
                    calories_burned: Some(calories),
                    ..TcxDurationExtensions::default()
                })
            },
        ),
        _ => DecodedDuration::plain(Duration::Open),
    }
}

/// Encode a duration element, restoring an extended condition when present.
///
/// Extension precedence is heart rate above, heart rate below, calories.
/// Without extensions only `time` and `distance` have native elements;
/// everything else becomes `LapButton_t`.
#[must_use]
pub fn encode_duration(
    duration: &Duration,
    extensions: Option<&TcxDurationExtensions>,
) -> TcxDurationElement {
    if let Some(extensions) = extensions {
        if let Some(bpm) = extensions.heart_rate_above {
            return TcxDurationElement {
                heart_rate: Some(TcxHeartRateValue::bpm(bpm)),
                ..TcxDurationElement::of_type(xsi_types::HEART_RATE_ABOVE)
            };
        }
        if let Some(bpm) = extensions.heart_rate_below {
            return TcxDurationElement {
                heart_rate: Some(TcxHeartRateValue::bpm(bpm)),
                ..TcxDurationElement::of_type(xsi_types::HEART_RATE_BELOW)
            };
        }
        if let Some(calories) = extensions.calories_burned {
            return TcxDurationElement {
                calories: Some(calories),
                ..TcxDurationElement::of_type(xsi_types::CALORIES_BURNED)
            };
        }
    }

    match *duration {
        Duration::Time { seconds } => TcxDurationElement {
            seconds: Some(seconds),
            ..TcxDurationElement::of_type(xsi_types::TIME)
        },
        Duration::Distance { meters } => TcxDurationElement {
            meters: Some(meters),
            ..TcxDurationElement::of_type(xsi_types::DISTANCE)
        },
        _ => TcxDurationElement::of_type(xsi_types::LAP_BUTTON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extended_without_threshold_is_plain_open() {
        let decoded = decode_duration(&TcxDurationData::of_type("HeartRateAbove"));
        assert_eq!(decoded, DecodedDuration::plain(Duration::Open));
    }

    #[test]
    fn test_non_string_type_is_open() {
        let data = TcxDurationData {
            duration_type: Some(json!(42)),
            seconds: Some(60.0),
            ..TcxDurationData::default()
        };
        assert_eq!(decode_duration(&data).duration, Duration::Open);
    }

    #[test]
    fn test_above_wins_over_calories() {
        let extensions = TcxDurationExtensions {
            heart_rate_above: Some(160),
            calories_burned: Some(300),
            ..TcxDurationExtensions::default()
        };
        let element = encode_duration(&Duration::Open, Some(&extensions));
        assert_eq!(element.xsi_type, "HeartRateAbove_t");
        assert_eq!(element.calories, None);
    }

    #[test]
    fn test_element_reads_back_as_data() {
        let element = encode_duration(&Duration::Distance { meters: 1000.0 }, None);
        let data = TcxDurationData::from(&element);
        assert_eq!(
            decode_duration(&data).duration,
            Duration::Distance { meters: 1000.0 }
        );
    }
}
