// ABOUTME: Zwift power converter between FTP fractions and KRD percent-FTP targets
// ABOUTME: Non-positive or absent fractions and non-relative power targets map to open or none
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::models::{PowerValue, Target};
use tracing::debug;

use crate::constants::units::PERCENT_PER_UNIT;

/// Decode a Zwift `Power` attribute (fraction of FTP, `0.75` = 75 %)
#[must_use]
pub fn decode_power(fraction: Option<f64>) -> Target {
    fraction
        .filter(|f| f.is_finite() && *f > 0.0)
        .map_or(Target::Open, |f| Target::Power {
            value: PowerValue::PercentFtp {
                value: f * PERCENT_PER_UNIT,
            },
        })
}

/// Encode a KRD target as a Zwift FTP fraction, `None` when it has no fraction form
#[must_use]
pub fn encode_power(target: &Target) -> Option<f64> {
    match target {
        Target::Power {
            value: PowerValue::PercentFtp { value },
        } => Some(*value / PERCENT_PER_UNIT),
        Target::Open => None,
        other => {
            debug!(
                target_type = other.kind().as_str(),
                "Target has no Zwift power fraction"
            );
            None
        }
    }
}
