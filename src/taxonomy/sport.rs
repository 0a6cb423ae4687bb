// ABOUTME: Sport and sub-sport mapping for FIT and TCX literals
// ABOUTME: Sport decoding returns None for unknown literals so callers apply the configured default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::models::{Sport, SubSport};
use tracing::warn;

/// TCX `Sport` attribute for running
pub const TCX_RUNNING: &str = "Running";

/// TCX `Sport` attribute for cycling
pub const TCX_BIKING: &str = "Biking";

/// TCX `Sport` attribute for everything else
pub const TCX_OTHER: &str = "Other";

const SUB_SPORT_TABLE: [(SubSport, &str); 21] = [
    (SubSport::Generic, "generic"),
    (SubSport::Treadmill, "treadmill"),
    (SubSport::Street, "street"),
    (SubSport::Trail, "trail"),
    (SubSport::Track, "track"),
    (SubSport::Spin, "spin"),
    (SubSport::IndoorCycling, "indoorCycling"),
    (SubSport::Road, "road"),
    (SubSport::Mountain, "mountain"),
    (SubSport::Downhill, "downhill"),
    (SubSport::Recumbent, "recumbent"),
    (SubSport::Cyclocross, "cyclocross"),
    (SubSport::HandCycling, "handCycling"),
    (SubSport::TrackCycling, "trackCycling"),
    (SubSport::IndoorRowing, "indoorRowing"),
    (SubSport::Elliptical, "elliptical"),
    (SubSport::StairClimbing, "stairClimbing"),
    (SubSport::LapSwimming, "lapSwimming"),
    (SubSport::OpenWater, "openWater"),
    (SubSport::GravelCycling, "gravelCycling"),
    (SubSport::VirtualActivity, "virtualActivity"),
];

/// FIT literal for a KRD sport
#[must_use]
pub const fn sport_to_fit(sport: Sport) -> &'static str {
    match sport {
        Sport::Cycling => "cycling",
        Sport::Running => "running",
        Sport::Swimming => "swimming",
        Sport::Generic => "generic",
    }
}

/// KRD sport for a FIT literal, `None` when KRD has no matching sport
#[must_use]
pub fn sport_from_fit(literal: &str) -> Option<Sport> {
    match literal {
        "cycling" => Some(Sport::Cycling),
        "running" => Some(Sport::Running),
        "swimming" => Some(Sport::Swimming),
        "generic" => Some(Sport::Generic),
        _ => None,
    }
}

/// TCX `Sport` attribute for a KRD sport
#[must_use]
pub const fn sport_to_tcx(sport: Sport) -> &'static str {
    match sport {
        Sport::Running => TCX_RUNNING,
        Sport::Cycling => TCX_BIKING,
        Sport::Swimming | Sport::Generic => TCX_OTHER,
    }
}

/// KRD sport for a TCX `Sport` attribute, `None` when unrecognized
#[must_use]
pub fn sport_from_tcx(literal: &str) -> Option<Sport> {
    match literal {
        TCX_RUNNING => Some(Sport::Running),
        TCX_BIKING => Some(Sport::Cycling),
        TCX_OTHER => Some(Sport::Generic),
        _ => None,
    }
}

/// FIT literal for a KRD sub-sport
#[must_use]
pub fn sub_sport_to_fit(sub_sport: SubSport) -> &'static str {
    SUB_SPORT_TABLE
        .iter()
        .find(|(krd, _)| *krd == sub_sport)
        .map_or("generic", |(_, fit)| fit)
}

/// KRD sub-sport for a FIT literal; unknown literals become `generic`
#[must_use]
pub fn sub_sport_from_fit(literal: &str) -> SubSport {
    SUB_SPORT_TABLE
        .iter()
        .find(|(_, fit)| *fit == literal)
        .map_or_else(
            || {
                warn!(sub_sport = literal, "Unknown FIT sub-sport, using generic");
                SubSport::Generic
            },
            |(krd, _)| *krd,
        )
}
