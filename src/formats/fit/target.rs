// ABOUTME: FIT target converter between targetType field groups and the KRD Target taxonomy
// ABOUTME: Per-family offset tables disambiguate the overloaded targetValue field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::models::{
    CadenceValue, HeartRateValue, PaceValue, PowerValue, StrokeTypeValue, Target,
};
use tracing::warn;

use super::constants::{target_types, value_offsets};
use super::models::FitTargetFields;
use crate::constants::units::min_per_km_to_mps;

/// Reading of a raw `targetValue`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EncodedValue {
    /// Unit value as-is (watts, bpm)
    Absolute(f64),
    /// Offset-free relative value (percent FTP, percent of max)
    Relative(f64),
}

/// Offset convention of one target family's `targetValue`.
///
/// Raw values in `(offset, relative_limit]` are relative and decode to
/// `raw - offset`; raw values in `(0, absolute_limit]` outside that window are
/// absolute. Everything else is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueEncoding {
    /// Family name used in log fields
    pub family: &'static str,
    /// Shift applied to relative values
    pub offset: f64,
    /// Highest raw value read as relative, unbounded when `None`
    pub relative_limit: Option<f64>,
    /// Highest raw value read as absolute, unbounded when `None`
    pub absolute_limit: Option<f64>,
}

/// Power: watts as-is, percent FTP shifted by 1000
pub const POWER_ENCODING: ValueEncoding = ValueEncoding {
    family: target_types::POWER,
    offset: value_offsets::POWER_PERCENT_FTP_OFFSET,
    relative_limit: None,
    absolute_limit: None,
};

/// Heart rate: bpm as-is, percent of max shifted by 100
pub const HEART_RATE_ENCODING: ValueEncoding = ValueEncoding {
    family: target_types::HEART_RATE,
    offset: value_offsets::HEART_RATE_PERCENT_MAX_OFFSET,
    relative_limit: Some(value_offsets::HEART_RATE_PERCENT_MAX_LIMIT),
    absolute_limit: Some(value_offsets::HEART_RATE_BPM_LIMIT),
};

impl ValueEncoding {
    fn is_relative_raw(&self, raw: f64) -> bool {
        raw > self.offset && self.relative_limit.is_none_or(|limit| raw <= limit)
    }

    fn is_absolute_raw(&self, raw: f64) -> bool {
        raw > 0.0
            && !self.is_relative_raw(raw)
            && self.absolute_limit.is_none_or(|limit| raw <= limit)
    }

    /// Read a raw `targetValue`, `None` when it falls outside both windows
    #[must_use]
    pub fn decode(&self, raw: f64) -> Option<EncodedValue> {
        if !raw.is_finite() {
            return None;
        }
        if self.is_relative_raw(raw) {
            Some(EncodedValue::Relative(raw - self.offset))
        } else if self.is_absolute_raw(raw) {
            Some(EncodedValue::Absolute(raw))
        } else {
            None
        }
    }

    /// Raw value for an absolute unit value.
    ///
    /// Values that would read back as relative are written unchanged with a
    /// warning: the field cannot represent them.
    #[must_use]
    pub fn encode_absolute(&self, value: f64) -> f64 {
        if !self.is_absolute_raw(value) {
            warn!(
                family = self.family,
                value, "Absolute target value does not survive targetValue encoding"
            );
        }
        value
    }

    /// Raw value for a relative value
    #[must_use]
    pub fn encode_relative(&self, value: f64) -> f64 {
        let raw = value + self.offset;
        if !self.is_relative_raw(raw) {
            warn!(
                family = self.family,
                value, "Relative target value does not survive targetValue encoding"
            );
        }
        raw
    }
}

/// Zone `0` is FIT's "custom" sentinel: the range fields carry the target
fn zone(value: Option<u8>) -> Option<u8> {
    value.filter(|zone| *zone > 0)
}

fn range(low: Option<f64>, high: Option<f64>) -> Option<(f64, f64)> {
    low.zip(high)
        .filter(|(min, max)| min.is_finite() && max.is_finite() && *min > 0.0 && min <= max)
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite() && *value > 0.0)
}

fn rounded(value: f64) -> Option<u32> {
    let value = value.round() as u32;
    (value > 0).then_some(value)
}

fn decode_power(fields: &FitTargetFields) -> Option<PowerValue> {
    if let Some(value) = zone(fields.target_power_zone) {
        return Some(PowerValue::Zone { value });
    }
    if let Some((min, max)) = range(fields.custom_target_power_low, fields.custom_target_power_high)
    {
        return Some(PowerValue::Range { min, max });
    }
    match POWER_ENCODING.decode(fields.target_value?)? {
        EncodedValue::Absolute(value) => Some(PowerValue::Watts { value }),
        EncodedValue::Relative(value) => Some(PowerValue::PercentFtp { value }),
    }
}

fn decode_heart_rate(fields: &FitTargetFields) -> Option<HeartRateValue> {
    if let Some(value) = zone(fields.target_hr_zone) {
        return Some(HeartRateValue::Zone { value });
    }
    if let (Some(min), Some(max)) = (
        fields.custom_target_heart_rate_low,
        fields.custom_target_heart_rate_high,
    ) {
        if min > 0 && min <= max {
            return Some(HeartRateValue::Range { min, max });
        }
    }
    match HEART_RATE_ENCODING.decode(fields.target_value?)? {
        EncodedValue::Absolute(value) => rounded(value).map(|value| HeartRateValue::Bpm { value }),
        EncodedValue::Relative(value) => {
            rounded(value).map(|value| HeartRateValue::PercentMax { value })
        }
    }
}

fn decode_cadence(fields: &FitTargetFields) -> Option<CadenceValue> {
    if let Some(value) = zone(fields.target_cadence_zone) {
        return Some(CadenceValue::Zone { value });
    }
    if let Some((min, max)) = range(
        fields.custom_target_cadence_low,
        fields.custom_target_cadence_high,
    ) {
        return Some(CadenceValue::Range { min, max });
    }
    positive(fields.target_value).map(|value| CadenceValue::Rpm { value })
}

fn decode_pace(fields: &FitTargetFields) -> Option<PaceValue> {
    if let Some(value) = zone(fields.target_speed_zone) {
        return Some(PaceValue::Zone { value });
    }
    if let Some((min, max)) = range(fields.custom_target_speed_low, fields.custom_target_speed_high)
    {
        return Some(PaceValue::Range { min, max });
    }
    positive(fields.target_value).map(|value| PaceValue::Mps { value })
}

/// Decode the target fields of a step message.
///
/// Within a family the first match wins: a non-zero zone, then a complete
/// custom range with `0 < low <= high`, then `targetValue`. Anything else is
/// `open`, so the result always passes `Target::validate`.
#[must_use]
pub fn decode_target(fields: &FitTargetFields) -> Target {
    let decoded = match fields.target_type.as_deref() {
        Some(target_types::POWER) => decode_power(fields).map(|value| Target::Power { value }),
        Some(target_types::HEART_RATE) => {
            decode_heart_rate(fields).map(|value| Target::HeartRate { value })
        }
        Some(target_types::CADENCE) => {
            decode_cadence(fields).map(|value| Target::Cadence { value })
        }
        Some(target_types::SPEED) => decode_pace(fields).map(|value| Target::Pace { value }),
        Some(target_types::SWIM_STROKE) => fields.target_stroke_type.map(|value| {
            Target::StrokeType {
                value: StrokeTypeValue::SwimStroke { value },
            }
        }),
        _ => None,
    };
    decoded.unwrap_or(Target::Open)
}

fn typed(literal: &str) -> FitTargetFields {
    FitTargetFields {
        target_type: Some(literal.to_owned()),
        ..FitTargetFields::default()
    }
}

fn encode_power(value: PowerValue) -> FitTargetFields {
    let base = typed(target_types::POWER);
    match value {
        PowerValue::Watts { value } => FitTargetFields {
            target_value: Some(POWER_ENCODING.encode_absolute(value)),
            ..base
        },
        PowerValue::PercentFtp { value } => FitTargetFields {
            target_value: Some(POWER_ENCODING.encode_relative(value)),
            ..base
        },
        PowerValue::Zone { value } => FitTargetFields {
            target_power_zone: Some(value),
            ..base
        },
        PowerValue::Range { min, max } => FitTargetFields {
            custom_target_power_low: Some(min),
            custom_target_power_high: Some(max),
            ..base
        },
    }
}

fn encode_heart_rate(value: HeartRateValue) -> FitTargetFields {
    let base = typed(target_types::HEART_RATE);
    match value {
        HeartRateValue::Bpm { value } => FitTargetFields {
            target_value: Some(HEART_RATE_ENCODING.encode_absolute(f64::from(value))),
            ..base
        },
        HeartRateValue::PercentMax { value } => FitTargetFields {
            target_value: Some(HEART_RATE_ENCODING.encode_relative(f64::from(value))),
            ..base
        },
        HeartRateValue::Zone { value } => FitTargetFields {
            target_hr_zone: Some(value),
            ..base
        },
        HeartRateValue::Range { min, max } => FitTargetFields {
            custom_target_heart_rate_low: Some(min),
            custom_target_heart_rate_high: Some(max),
            ..base
        },
    }
}

fn encode_cadence(value: CadenceValue) -> FitTargetFields {
    let base = typed(target_types::CADENCE);
    match value {
        CadenceValue::Rpm { value } | CadenceValue::Spm { value } => FitTargetFields {
            target_value: Some(value),
            ..base
        },
        CadenceValue::Zone { value } => FitTargetFields {
            target_cadence_zone: Some(value),
            ..base
        },
        CadenceValue::Range { min, max } => FitTargetFields {
            custom_target_cadence_low: Some(min),
            custom_target_cadence_high: Some(max),
            ..base
        },
    }
}

fn encode_pace(value: PaceValue) -> FitTargetFields {
    let base = typed(target_types::SPEED);
    match value {
        PaceValue::Mps { value } => FitTargetFields {
            target_value: Some(value),
            ..base
        },
        PaceValue::MinPerKm { value } => FitTargetFields {
            target_value: Some(min_per_km_to_mps(value)),
            ..base
        },
        PaceValue::Zone { value } => FitTargetFields {
            target_speed_zone: Some(value),
            ..base
        },
        PaceValue::Range { min, max } => FitTargetFields {
            custom_target_speed_low: Some(min),
            custom_target_speed_high: Some(max),
            ..base
        },
    }
}

/// Encode a KRD target as step message target fields
#[must_use]
pub fn encode_target(target: &Target) -> FitTargetFields {
    match *target {
        Target::Power { value } => encode_power(value),
        Target::HeartRate { value } => encode_heart_rate(value),
        Target::Cadence { value } => encode_cadence(value),
        Target::Pace { value } => encode_pace(value),
        Target::StrokeType {
            value: StrokeTypeValue::SwimStroke { value },
        } => FitTargetFields {
            target_stroke_type: Some(value),
            ..typed(target_types::SWIM_STROKE)
        },
        Target::Open => typed(target_types::OPEN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_thresholds() {
        assert_eq!(POWER_ENCODING.decode(1000.0), Some(EncodedValue::Absolute(1000.0)));
        assert_eq!(POWER_ENCODING.decode(1085.0), Some(EncodedValue::Relative(85.0)));
        assert_eq!(POWER_ENCODING.decode(0.0), None);
    }

    #[test]
    fn test_heart_rate_thresholds() {
        assert_eq!(HEART_RATE_ENCODING.decode(100.0), Some(EncodedValue::Absolute(100.0)));
        assert_eq!(HEART_RATE_ENCODING.decode(185.0), Some(EncodedValue::Relative(85.0)));
        assert_eq!(HEART_RATE_ENCODING.decode(200.0), Some(EncodedValue::Relative(100.0)));
        assert_eq!(HEART_RATE_ENCODING.decode(201.0), Some(EncodedValue::Absolute(201.0)));
        assert_eq!(HEART_RATE_ENCODING.decode(300.5), None);
    }

    #[test]
    fn test_relative_encoding_inverts_decoding() {
        let raw = HEART_RATE_ENCODING.encode_relative(75.0);
        assert_eq!(HEART_RATE_ENCODING.decode(raw), Some(EncodedValue::Relative(75.0)));
        let raw = POWER_ENCODING.encode_relative(120.0);
        assert_eq!(POWER_ENCODING.decode(raw), Some(EncodedValue::Relative(120.0)));
    }

    #[test]
    fn test_zone_wins_over_target_value() {
        let fields = FitTargetFields {
            target_power_zone: Some(4),
            target_value: Some(250.0),
            ..typed(target_types::POWER)
        };
        assert_eq!(
            decode_target(&fields),
            Target::Power {
                value: PowerValue::Zone { value: 4 }
            }
        );
    }

    #[test]
    fn test_half_range_falls_through_to_value() {
        let fields = FitTargetFields {
            custom_target_cadence_low: Some(85.0),
            target_value: Some(90.0),
            ..typed(target_types::CADENCE)
        };
        assert_eq!(
            decode_target(&fields),
            Target::Cadence {
                value: CadenceValue::Rpm { value: 90.0 }
            }
        );
    }
}
