// ABOUTME: Swim equipment mapping between KRD snake_case and FIT camelCase literals
// ABOUTME: Unknown FIT literals fall back to `none` with a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::models::Equipment;
use tracing::warn;

const EQUIPMENT_TABLE: [(Equipment, &str); 6] = [
    (Equipment::None, "none"),
    (Equipment::SwimFins, "swimFins"),
    (Equipment::SwimKickboard, "swimKickboard"),
    (Equipment::SwimPaddles, "swimPaddles"),
    (Equipment::SwimPullBuoy, "swimPullBuoy"),
    (Equipment::SwimSnorkel, "swimSnorkel"),
];

/// FIT literal for a KRD equipment value
#[must_use]
pub fn equipment_to_fit(equipment: Equipment) -> &'static str {
    EQUIPMENT_TABLE
        .iter()
        .find(|(krd, _)| *krd == equipment)
        .map_or("none", |(_, fit)| fit)
}

/// KRD equipment value for a FIT literal
#[must_use]
pub fn equipment_from_fit(literal: &str) -> Equipment {
    EQUIPMENT_TABLE
        .iter()
        .find(|(_, fit)| *fit == literal)
        .map_or_else(
            || {
                warn!(equipment = literal, "Unknown FIT equipment, using none");
                Equipment::None
            },
            |(krd, _)| *krd,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_value_maps_back() {
        for (krd, _) in EQUIPMENT_TABLE {
            assert_eq!(equipment_from_fit(equipment_to_fit(krd)), krd);
        }
    }

    #[test]
    fn test_unknown_literal() {
        assert_eq!(equipment_from_fit("swimGoggles"), Equipment::None);
    }
}
