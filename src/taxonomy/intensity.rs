// ABOUTME: Step intensity mapping for FIT literals and the two-valued TCX vocabulary
// ABOUTME: TCX only distinguishes Active from Resting, so rest and recovery collapse together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::models::Intensity;
use tracing::warn;

/// TCX literal for active work
pub const TCX_ACTIVE: &str = "Active";

/// TCX literal for rest
pub const TCX_RESTING: &str = "Resting";

/// FIT literal for a KRD intensity
#[must_use]
pub const fn intensity_to_fit(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::Warmup => "warmup",
        Intensity::Active => "active",
        Intensity::Cooldown => "cooldown",
        Intensity::Rest => "rest",
        Intensity::Recovery => "recovery",
        Intensity::Interval => "interval",
        Intensity::Other => "other",
    }
}

/// KRD intensity for a FIT literal; unknown literals become `active`
#[must_use]
pub fn intensity_from_fit(literal: &str) -> Intensity {
    match literal {
        "warmup" => Intensity::Warmup,
        "active" => Intensity::Active,
        "cooldown" => Intensity::Cooldown,
        "rest" => Intensity::Rest,
        "recovery" => Intensity::Recovery,
        "interval" => Intensity::Interval,
        "other" => Intensity::Other,
        unknown => {
            warn!(intensity = unknown, "Unknown FIT intensity, using active");
            Intensity::Active
        }
    }
}

/// TCX literal for a KRD intensity
#[must_use]
pub const fn intensity_to_tcx(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::Rest | Intensity::Recovery => TCX_RESTING,
        _ => TCX_ACTIVE,
    }
}

/// KRD intensity for a TCX literal; unknown literals become `active`
#[must_use]
pub fn intensity_from_tcx(literal: &str) -> Intensity {
    match literal {
        TCX_ACTIVE => Intensity::Active,
        TCX_RESTING => Intensity::Rest,
        unknown => {
            warn!(intensity = unknown, "Unknown TCX intensity, using active");
            Intensity::Active
        }
    }
}
