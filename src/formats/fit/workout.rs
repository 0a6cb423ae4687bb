// ABOUTME: Full-document FIT converter between FitMessages and KRD workout documents
// ABOUTME: Combines metadata, step assembly and validation behind an injectable clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::errors::{ConversionError, ConversionResult};
use krd_core::models::{Krd, KrdType};
use tracing::{debug, warn};

use super::constants::{FILE_TYPE_WORKOUT, FORMAT_NAME};
use super::metadata::{
    decode_file_id, decode_workout_summary, encode_file_id, encode_workout_summary,
};
use super::models::FitMessages;
use super::step::{decode_steps, encode_steps};
use crate::config::{Clock, ConversionConfig, SystemClock};
use crate::formats::spi::WorkoutFormat;

/// Converts between FIT message arrays and KRD documents
#[derive(Debug, Clone, Default)]
pub struct FitConverter<C: Clock = SystemClock> {
    config: ConversionConfig,
    clock: C,
}

impl<C: Clock> FitConverter<C> {
    /// Create a converter with explicit defaults and time source
    #[must_use]
    pub const fn new(config: ConversionConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Conversion defaults in use
    #[must_use]
    pub const fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert decoded FIT messages to a KRD workout document
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFeature` when the file identity names a file type
    /// other than `workout`
    pub fn to_krd(&self, messages: &FitMessages) -> ConversionResult<Krd> {
        if let Some(file_type) = messages
            .file_id_mesgs
            .first()
            .map(|file_id| file_id.file_type.as_str())
            .filter(|file_type| *file_type != FILE_TYPE_WORKOUT)
        {
            return Err(ConversionError::unsupported(
                FORMAT_NAME,
                format!("file type {file_type}"),
            ));
        }

        let summary = decode_workout_summary(&messages.workout_mesgs, &self.config);
        let mut workout = summary.workout;
        workout.steps = decode_steps(&messages.workout_step_mesgs);

        if let Some(declared) = summary.num_valid_steps {
            let actual = messages.workout_step_mesgs.len();
            if declared as usize != actual {
                warn!(
                    declared,
                    actual, "numValidSteps does not match the step message count"
                );
            }
        }

        let metadata = decode_file_id(&messages.file_id_mesgs, &workout, &self.clock);
        debug!(
            elements = workout.steps.len(),
            sport = workout.sport.as_str(),
            "Decoded FIT workout"
        );
        Ok(Krd::workout(metadata, workout))
    }

    /// Convert a KRD workout document to FIT messages
    ///
    /// # Errors
    ///
    /// Returns `MissingWorkout` when the document has no workout payload,
    /// `UnsupportedFeature` for non-workout documents, and a validation error
    /// when the document is malformed
    pub fn from_krd(&self, krd: &Krd) -> ConversionResult<FitMessages> {
        if krd.kind != KrdType::Workout {
            return Err(ConversionError::unsupported(
                FORMAT_NAME,
                format!("KRD document type {:?}", krd.kind),
            ));
        }
        let workout = krd.require_workout(FORMAT_NAME)?;
        krd.validate_shape()?;

        let workout_step_mesgs = encode_steps(&workout.steps, &self.config);
        let num_valid_steps = workout.message_count();
        debug_assert_eq!(num_valid_steps, workout_step_mesgs.len());

        debug!(
            messages = workout_step_mesgs.len(),
            "Encoded FIT workout steps"
        );
        Ok(FitMessages {
            file_id_mesgs: vec![encode_file_id(&krd.metadata, &self.config)],
            workout_mesgs: vec![encode_workout_summary(workout, num_valid_steps)],
            workout_step_mesgs,
        })
    }
}

impl<C: Clock> WorkoutFormat for FitConverter<C> {
    type Document = FitMessages;

    fn decode(&self, document: &FitMessages) -> ConversionResult<Krd> {
        self.to_krd(document)
    }

    fn encode(&self, krd: &Krd) -> ConversionResult<FitMessages> {
        self.from_krd(krd)
    }
}
