// ABOUTME: Pool length unit mapping between KRD meters/yards and FIT metric/statute
// ABOUTME: Unknown FIT display units fall back to meters with a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::models::PoolLengthUnit;
use tracing::warn;

/// FIT literal for metric display units
pub const FIT_METRIC: &str = "metric";

/// FIT literal for imperial display units
pub const FIT_STATUTE: &str = "statute";

/// FIT literal for a KRD pool length unit
#[must_use]
pub const fn pool_length_unit_to_fit(unit: PoolLengthUnit) -> &'static str {
    match unit {
        PoolLengthUnit::Meters => FIT_METRIC,
        PoolLengthUnit::Yards => FIT_STATUTE,
    }
}

/// KRD pool length unit for a FIT literal
#[must_use]
pub fn pool_length_unit_from_fit(literal: &str) -> PoolLengthUnit {
    match literal {
        FIT_METRIC => PoolLengthUnit::Meters,
        FIT_STATUTE => PoolLengthUnit::Yards,
        unknown => {
            warn!(pool_length_unit = unknown, "Unknown FIT pool length unit, using meters");
            PoolLengthUnit::Meters
        }
    }
}
