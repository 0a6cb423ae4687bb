// ABOUTME: Validation errors raised when a KRD record violates its shape contract
// ABOUTME: Each variant names the offending field so callers can surface a precise message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use thiserror::Error;

/// A KRD record failed shape validation.
///
/// Raised for caller contract violations only. Gaps in an external format are
/// handled by the adapters' `open` fallbacks and never produce this error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A numeric field that must be strictly positive was zero, negative or not finite
    #[error("field '{field}' must be a positive number, got {value}")]
    NonPositive {
        /// Field name as it appears in the KRD record
        field: String,
        /// Rejected value
        value: f64,
    },
    /// A field holds a value outside its allowed range
    #[error("field '{field}' is out of range: {reason}")]
    OutOfRange {
        /// Field name as it appears in the KRD record
        field: String,
        /// Why the value was rejected
        reason: String,
    },
    /// A redundant type tag disagrees with the payload it describes
    #[error("field '{field}' is '{found}' but its payload is '{expected}'")]
    TypeMismatch {
        /// Name of the tag field (`durationType`, `targetType`)
        field: String,
        /// Tag implied by the payload
        expected: String,
        /// Tag actually present
        found: String,
    },
    /// The record matches none of the known variants
    #[error("invalid {entity} record: {reason}")]
    InvalidShape {
        /// Kind of record (`duration`, `target`, `krd`, ...)
        entity: String,
        /// Deserializer message describing the mismatch
        reason: String,
    },
    /// Step notes exceed the format limit
    #[error("step {step_index} notes are {length} characters, maximum is {max}")]
    NotesTooLong {
        /// Index of the offending step
        step_index: u32,
        /// Character count of the notes
        length: usize,
        /// Allowed maximum
        max: usize,
    },
    /// A repetition block repeats fewer times than the minimum
    #[error("repeatCount must be at least {min}, got {count}")]
    RepeatCountTooSmall {
        /// Rejected repeat count
        count: u32,
        /// Allowed minimum
        min: u32,
    },
    /// A repetition block contains no steps
    #[error("repetition block contains no steps")]
    EmptyRepetitionBlock,
    /// The document declares a version this crate does not read
    #[error("unsupported KRD version '{0}'")]
    UnsupportedVersion(String),
}

impl ValidationError {
    /// Create a "non-positive" error
    #[must_use]
    pub fn non_positive(field: impl Into<String>, value: f64) -> Self {
        Self::NonPositive {
            field: field.into(),
            value,
        }
    }

    /// Create an "out of range" error
    #[must_use]
    pub fn out_of_range(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a "type mismatch" error
    #[must_use]
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an "invalid shape" error
    #[must_use]
    pub fn invalid_shape(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            entity: entity.into(),
            reason: reason.into(),
        }
    }

    /// Name of the field this error refers to, when it refers to a single one
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::NonPositive { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::TypeMismatch { field, .. } => Some(field),
            Self::NotesTooLong { .. } => Some("notes"),
            Self::RepeatCountTooSmall { .. } => Some("repeatCount"),
            Self::EmptyRepetitionBlock => Some("steps"),
            Self::UnsupportedVersion(_) => Some("version"),
            Self::InvalidShape { .. } => None,
        }
    }
}

/// Reject values that are not strictly positive and finite
///
/// # Errors
///
/// Returns `ValidationError::NonPositive` naming `field`
pub(crate) fn ensure_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::non_positive(field, value))
    }
}
