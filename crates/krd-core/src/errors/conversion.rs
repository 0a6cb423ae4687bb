// ABOUTME: Fatal conversion errors that abort a whole KRD <-> format conversion
// ABOUTME: Stable error codes let surrounding tooling map failures without string matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ValidationError;

/// Stable error codes for conversion failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// KRD document has no `extensions.workout` payload
    #[serde(rename = "MISSING_WORKOUT")]
    MissingWorkout,
    /// A KRD record failed shape validation
    #[serde(rename = "VALIDATION_FAILED")]
    ValidationFailed,
    /// JSON (de)serialization of a record failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// The target format has no encoding for the requested construct
    #[serde(rename = "UNSUPPORTED_FEATURE")]
    UnsupportedFeature,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MissingWorkout => "The KRD document does not contain a workout",
            Self::ValidationFailed => "The KRD document is structurally invalid",
            Self::SerializationError => "Record serialization/deserialization failed",
            Self::UnsupportedFeature => "The target format cannot express this document",
        }
    }
}

/// A conversion that cannot proceed.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// A workout-format conversion was requested for a KRD without `extensions.workout`
    #[error("KRD document has no workout extension, cannot convert to {format}")]
    MissingWorkout {
        /// Name of the requested output format
        format: &'static str,
    },
    /// The KRD input violated its shape contract
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A record could not be converted to or from JSON
    #[error("record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The output format has no representation for part of the document
    #[error("{format} cannot encode {feature}")]
    UnsupportedFeature {
        /// Name of the requested output format
        format: &'static str,
        /// What could not be encoded
        feature: String,
    },
}

impl ConversionError {
    /// Create a "missing workout" error for the given output format
    #[must_use]
    pub const fn missing_workout(format: &'static str) -> Self {
        Self::MissingWorkout { format }
    }

    /// Create an "unsupported feature" error
    #[must_use]
    pub fn unsupported(format: &'static str, feature: impl Into<String>) -> Self {
        Self::UnsupportedFeature {
            format,
            feature: feature.into(),
        }
    }

    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingWorkout { .. } => ErrorCode::MissingWorkout,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::Serialization(_) => ErrorCode::SerializationError,
            Self::UnsupportedFeature { .. } => ErrorCode::UnsupportedFeature,
        }
    }
}

/// Result type alias for conversions
pub type ConversionResult<T> = Result<T, ConversionError>;
