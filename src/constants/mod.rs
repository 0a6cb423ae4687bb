// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Conversion defaults, environment variable names and unit conversion factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

//! Constants module
//!
//! Constants are grouped by domain. Format-specific literals live next to
//! their adapter (`formats::fit::constants`, `formats::tcx::constants`).

/// Unit conversion factors
pub mod units;

/// Built-in defaults for conversion configuration
pub mod defaults {
    use krd_core::models::Sport;

    /// Manufacturer written to the FIT file identity when the KRD has none
    pub const DEFAULT_MANUFACTURER: &str = "development";

    /// Sport assumed when a source document does not name one
    pub const DEFAULT_SPORT: Sport = Sport::Generic;

    /// Service name used in structured logs
    pub const SERVICE_NAME: &str = "krd-convert";
}

/// Environment variable names read by `ConversionConfig::from_env`
pub mod env_config {
    /// Overrides the default manufacturer
    pub const DEFAULT_MANUFACTURER: &str = "KRD_DEFAULT_MANUFACTURER";

    /// Overrides the default sport (`cycling`, `running`, `swimming`, `generic`)
    pub const DEFAULT_SPORT: &str = "KRD_DEFAULT_SPORT";

    /// Overrides the notes truncation length
    pub const NOTES_MAX_LENGTH: &str = "KRD_NOTES_MAX_LENGTH";
}
