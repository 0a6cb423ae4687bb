// ABOUTME: Conversion defaults applied when a source document omits a value
// ABOUTME: Loadable from environment variables with built-in fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use std::env;

use krd_core::constants::NOTES_MAX_LENGTH;
use krd_core::models::Sport;
use tracing::warn;

use crate::constants::{defaults, env_config};

/// Defaults applied by every converter.
///
/// Passed explicitly to converters so tests can override any value
/// deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Manufacturer written when a KRD document has none
    pub default_manufacturer: String,
    /// Sport assumed when a source document has none or an unknown one
    pub default_sport: Sport,
    /// Notes longer than this many characters are truncated on encode
    pub notes_max_length: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            default_manufacturer: defaults::DEFAULT_MANUFACTURER.to_owned(),
            default_sport: defaults::DEFAULT_SPORT,
            notes_max_length: NOTES_MAX_LENGTH,
        }
    }
}

impl ConversionConfig {
    /// Load configuration from environment variables with built-in defaults
    ///
    /// Unparseable values are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(manufacturer) = env::var(env_config::DEFAULT_MANUFACTURER) {
            if manufacturer.trim().is_empty() {
                warn!(
                    variable = env_config::DEFAULT_MANUFACTURER,
                    "Empty manufacturer override ignored"
                );
            } else {
                config.default_manufacturer = manufacturer;
            }
        }

        if let Ok(sport) = env::var(env_config::DEFAULT_SPORT) {
            match Sport::from_krd_str(&sport.to_lowercase()) {
                Some(parsed) => config.default_sport = parsed,
                None => warn!(
                    variable = env_config::DEFAULT_SPORT,
                    value = %sport,
                    "Unknown sport override ignored"
                ),
            }
        }

        if let Ok(length) = env::var(env_config::NOTES_MAX_LENGTH) {
            match length.parse::<usize>() {
                Ok(parsed) if parsed > 0 && parsed <= NOTES_MAX_LENGTH => {
                    config.notes_max_length = parsed;
                }
                _ => warn!(
                    variable = env_config::NOTES_MAX_LENGTH,
                    value = %length,
                    max = NOTES_MAX_LENGTH,
                    "Invalid notes length override ignored"
                ),
            }
        }

        config
    }

    /// Replace the default manufacturer
    #[must_use]
    pub fn with_default_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.default_manufacturer = manufacturer.into();
        self
    }

    /// Replace the default sport
    #[must_use]
    pub fn with_default_sport(mut self, sport: Sport) -> Self {
        self.default_sport = sport;
        self
    }
}
