// ABOUTME: KRD document envelope: version, document type, metadata and extensions
// ABOUTME: Extensions carry the workout payload and optional per-format round-trip data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Sport, SubSport, Workout};
use crate::constants::KRD_VERSION;
use crate::errors::{ConversionError, ConversionResult, ValidationError};

/// Kind of KRD document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KrdType {
    /// Planned structured workout
    Workout,
    /// Recorded activity
    Activity,
    /// Route
    Course,
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KrdMetadata {
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Device or software manufacturer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Product name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Serial number as text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Sport
    pub sport: Sport,
    /// Sport refinement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_sport: Option<SubSport>,
}

impl KrdMetadata {
    /// Metadata with only the required fields
    #[must_use]
    pub const fn new(created: DateTime<Utc>, sport: Sport) -> Self {
        Self {
            created,
            manufacturer: None,
            product: None,
            serial_number: None,
            sport,
            sub_sport: None,
        }
    }
}

/// Document extensions: the workout plus adapter-owned payloads keyed by format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KrdExtensions {
    /// Structured workout payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<Workout>,
    /// Format-owned payloads (`fit`, `tcx`, ...)
    #[serde(flatten)]
    pub formats: BTreeMap<String, serde_json::Value>,
}

/// A KRD document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Krd {
    /// Always `"1.0"`
    pub version: String,
    /// Document kind
    #[serde(rename = "type")]
    pub kind: KrdType,
    /// Metadata
    pub metadata: KrdMetadata,
    /// Workout and format payloads
    #[serde(default)]
    pub extensions: KrdExtensions,
}

impl Krd {
    /// Create a workout document
    #[must_use]
    pub fn workout(metadata: KrdMetadata, workout: Workout) -> Self {
        Self {
            version: KRD_VERSION.to_owned(),
            kind: KrdType::Workout,
            metadata,
            extensions: KrdExtensions {
                workout: Some(workout),
                formats: BTreeMap::new(),
            },
        }
    }

    /// The workout payload required for a conversion to `format`
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::MissingWorkout` when `extensions.workout` is absent
    pub fn require_workout(&self, format: &'static str) -> ConversionResult<&Workout> {
        self.extensions
            .workout
            .as_ref()
            .ok_or_else(|| ConversionError::missing_workout(format))
    }

    /// Check the version and the workout payload, if present
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedVersion` or the first workout `ValidationError`
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check(true)
    }

    /// Like [`Krd::validate`] but accepts notes longer than the limit, for
    /// encoders that truncate them
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedVersion` or the first workout `ValidationError`
    pub fn validate_shape(&self) -> Result<(), ValidationError> {
        self.check(false)
    }

    fn check(&self, enforce_notes: bool) -> Result<(), ValidationError> {
        if self.version != KRD_VERSION {
            return Err(ValidationError::UnsupportedVersion(self.version.clone()));
        }
        self.extensions
            .workout
            .as_ref()
            .map_or(Ok(()), |workout| workout.check(enforce_notes))
    }

    /// Parse and validate a document from an untyped record
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidShape` when the record does not
    /// deserialize, otherwise the errors of [`Krd::validate`]
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let krd: Self = serde_json::from_value(value.clone())
            .map_err(|e| ValidationError::invalid_shape("krd", e.to_string()))?;
        krd.validate()?;
        Ok(krd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_missing_workout_is_typed_error() {
        let mut krd = Krd::workout(
            KrdMetadata::new(Utc::now(), Sport::Cycling),
            Workout::new(Sport::Cycling, Vec::new()),
        );
        krd.extensions.workout = None;
        let error = krd.require_workout("fit").unwrap_err();
        assert_eq!(error.code(), ErrorCode::MissingWorkout);
    }

    #[test]
    fn test_format_extensions_flatten() {
        let value = json!({
            "version": "1.0",
            "type": "workout",
            "metadata": {"created": "2025-01-15T10:00:00Z", "sport": "running"},
            "extensions": {
                "workout": {"sport": "running", "steps": []},
                "fit": {"product": 42}
            }
        });
        let krd = Krd::from_value(&value).unwrap();
        assert_eq!(krd.extensions.formats["fit"], json!({"product": 42}));
        assert!(krd.extensions.workout.is_some());
    }

    #[test]
    fn test_wrong_version_rejected() {
        let value = json!({
            "version": "2.0",
            "type": "workout",
            "metadata": {"created": "2025-01-15T10:00:00Z", "sport": "running"}
        });
        assert_eq!(
            Krd::from_value(&value).unwrap_err(),
            ValidationError::UnsupportedVersion("2.0".to_owned())
        );
    }
}
