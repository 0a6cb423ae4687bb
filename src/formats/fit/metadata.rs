// ABOUTME: FIT file-identity and workout-summary message assembly
// ABOUTME: Missing or duplicated summary messages degrade to defaults with a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::models::{KrdMetadata, Workout};
use tracing::{debug, warn};

use super::constants::FILE_TYPE_WORKOUT;
use super::models::{FitFileId, FitWorkout};
use crate::config::{Clock, ConversionConfig};
use crate::taxonomy::pool_length::{pool_length_unit_from_fit, pool_length_unit_to_fit};
use crate::taxonomy::sport::{sport_from_fit, sport_to_fit, sub_sport_from_fit, sub_sport_to_fit};

/// Build the file-identity message.
///
/// The manufacturer falls back to `config.default_manufacturer`. The KRD
/// serial number is text; a value that is not an unsigned integer is dropped.
#[must_use]
pub fn encode_file_id(metadata: &KrdMetadata, config: &ConversionConfig) -> FitFileId {
    let serial_number = metadata.serial_number.as_deref().and_then(|serial| {
        serial.trim().parse::<u32>().map_or_else(
            |e| {
                warn!(serial_number = serial, error = %e, "Serial number is not numeric, omitted");
                None
            },
            Some,
        )
    });

    FitFileId {
        file_type: FILE_TYPE_WORKOUT.to_owned(),
        manufacturer: Some(
            metadata
                .manufacturer
                .clone()
                .unwrap_or_else(|| config.default_manufacturer.clone()),
        ),
        product: metadata.product.clone(),
        serial_number,
        time_created: Some(metadata.created),
    }
}

/// Build the workout-summary message for a workout flattened to
/// `num_valid_steps` step messages
#[must_use]
pub fn encode_workout_summary(workout: &Workout, num_valid_steps: usize) -> FitWorkout {
    FitWorkout {
        wkt_name: workout.name.clone(),
        sport: Some(sport_to_fit(workout.sport).to_owned()),
        sub_sport: workout
            .sub_sport
            .map(|sub_sport| sub_sport_to_fit(sub_sport).to_owned()),
        num_valid_steps: Some(num_valid_steps as u32),
        pool_length: workout.pool_length,
        pool_length_unit: workout
            .pool_length_unit
            .map(|unit| pool_length_unit_to_fit(unit).to_owned()),
    }
}

/// Workout-level fields read from the summary message
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    /// Workout with an empty step sequence
    pub workout: Workout,
    /// Declared `numValidSteps`, when present
    pub num_valid_steps: Option<u32>,
}

/// Read the workout summary, using the first message when several are present
#[must_use]
pub fn decode_workout_summary(
    summaries: &[FitWorkout],
    config: &ConversionConfig,
) -> WorkoutSummary {
    let Some(summary) = summaries.first() else {
        warn!(
            sport = config.default_sport.as_str(),
            "FIT file has no workout message, using default sport"
        );
        return WorkoutSummary {
            workout: Workout::new(config.default_sport, Vec::new()),
            num_valid_steps: None,
        };
    };
    if summaries.len() > 1 {
        warn!(
            count = summaries.len(),
            "FIT file has several workout messages, using the first"
        );
    }

    let sport = summary.sport.as_deref().map_or(config.default_sport, |literal| {
        sport_from_fit(literal).unwrap_or_else(|| {
            warn!(sport = literal, "Unknown FIT sport, using default sport");
            config.default_sport
        })
    });

    let mut workout = Workout::new(sport, Vec::new());
    workout.name.clone_from(&summary.wkt_name);
    workout.sub_sport = summary.sub_sport.as_deref().map(sub_sport_from_fit);
    workout.pool_length = summary.pool_length;
    workout.pool_length_unit = summary
        .pool_length_unit
        .as_deref()
        .map(pool_length_unit_from_fit);

    WorkoutSummary {
        workout,
        num_valid_steps: summary.num_valid_steps,
    }
}

/// Read document metadata from the file-identity message.
///
/// A missing message or timestamp takes the creation time from `clock`.
#[must_use]
pub fn decode_file_id(
    file_ids: &[FitFileId],
    workout: &Workout,
    clock: &impl Clock,
) -> KrdMetadata {
    let Some(file_id) = file_ids.first() else {
        warn!("FIT file has no file id message, creation time set to now");
        let mut metadata = KrdMetadata::new(clock.now(), workout.sport);
        metadata.sub_sport = workout.sub_sport;
        return metadata;
    };

    let created = file_id.time_created.unwrap_or_else(|| {
        debug!("File id message has no timeCreated, using current time");
        clock.now()
    });

    let mut metadata = KrdMetadata::new(created, workout.sport);
    metadata.sub_sport = workout.sub_sport;
    metadata.manufacturer.clone_from(&file_id.manufacturer);
    metadata.product.clone_from(&file_id.product);
    metadata.serial_number = file_id.serial_number.map(|serial| serial.to_string());
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use krd_core::models::Sport;

    #[test]
    fn test_manufacturer_defaults_from_config() {
        let created = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
        let mut metadata = KrdMetadata::new(created, Sport::Cycling);
        metadata.serial_number = Some("1234".to_owned());
        let config = ConversionConfig::default().with_default_manufacturer("acme");

        let file_id = encode_file_id(&metadata, &config);
        assert_eq!(file_id.manufacturer.as_deref(), Some("acme"));
        assert_eq!(file_id.serial_number, Some(1234));
        assert_eq!(file_id.time_created, Some(created));
    }

    #[test]
    fn test_non_numeric_serial_is_dropped() {
        let mut metadata = KrdMetadata::new(Utc::now(), Sport::Running);
        metadata.serial_number = Some("ABC-1".to_owned());
        let file_id = encode_file_id(&metadata, &ConversionConfig::default());
        assert_eq!(file_id.serial_number, None);
    }

    #[test]
    fn test_unknown_sport_uses_default() {
        let summary = FitWorkout {
            sport: Some("rowing".to_owned()),
            ..FitWorkout::default()
        };
        let config = ConversionConfig::default().with_default_sport(Sport::Running);
        let decoded = decode_workout_summary(&[summary], &config);
        assert_eq!(decoded.workout.sport, Sport::Running);
    }
}
