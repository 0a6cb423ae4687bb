// ABOUTME: Full-document TCX converter between TcxWorkout records and KRD workout documents
// ABOUTME: Maps Step_t and Repeat_t entries and carries duration extensions per step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::constants::MIN_REPEAT_COUNT;
use krd_core::errors::{ConversionError, ConversionResult};
use krd_core::models::{
    Krd, KrdMetadata, KrdType, RepetitionBlock, Workout, WorkoutElement, WorkoutStep,
};
use tracing::{debug, warn};

use super::constants::{FORMAT_NAME, MAX_REPEAT_NESTING};
use super::duration::{decode_duration, encode_duration, TcxDurationData, TcxDurationExtensions};
use super::models::{TcxRepeatElement, TcxStepElement, TcxStepEntry, TcxWorkout};
use super::target::{decode_target, encode_target};
use crate::config::{Clock, ConversionConfig, SystemClock};
use crate::formats::spi::WorkoutFormat;
use crate::taxonomy::intensity::{intensity_from_tcx, intensity_to_tcx, TCX_ACTIVE};
use crate::taxonomy::sport::{sport_from_tcx, sport_to_tcx};

/// Converts between TCX workout records and KRD documents
#[derive(Debug, Clone, Default)]
pub struct TcxConverter<C: Clock = SystemClock> {
    config: ConversionConfig,
    clock: C,
}

/// Decode one `Step_t` element as the KRD step at `step_index`
///
/// # Errors
///
/// Returns `Serialization` if the duration extension record cannot be stored
pub fn decode_step(element: &TcxStepElement, step_index: u32) -> ConversionResult<WorkoutStep> {
    let decoded = decode_duration(&TcxDurationData::from(&element.duration));
    let mut step = WorkoutStep::new(
        step_index,
        decoded.duration,
        decode_target(element.target.as_ref()),
    );
    step.name.clone_from(&element.name);
    step.intensity = element.intensity.as_deref().map(intensity_from_tcx);
    if let Some(extensions) = decoded.extensions {
        step = step.with_extension(FORMAT_NAME, serde_json::to_value(extensions)?);
    }
    Ok(step)
}

fn step_extensions(step: &WorkoutStep) -> Option<TcxDurationExtensions> {
    let payload = step.extension(FORMAT_NAME)?;
    match serde_json::from_value::<TcxDurationExtensions>(payload.clone()) {
        Ok(extensions) if !extensions.is_empty() => Some(extensions),
        Ok(_) => None,
        Err(e) => {
            warn!(
                step_index = step.step_index,
                error = %e,
                "Ignoring malformed TCX step extension"
            );
            None
        }
    }
}

/// Encode one KRD step as a `Step_t` element with id `step_id`
#[must_use]
pub fn encode_step(step: &WorkoutStep, step_id: u32) -> TcxStepElement {
    if step.notes.is_some() {
        debug!(
            step_index = step.step_index,
            "TCX steps have no notes field, notes dropped"
        );
    }
    let extensions = step_extensions(step);
    TcxStepElement {
        step_id,
        name: step.name.clone(),
        duration: encode_duration(&step.duration, extensions.as_ref()),
        intensity: Some(
            step.intensity
                .map_or(TCX_ACTIVE, intensity_to_tcx)
                .to_owned(),
        ),
        target: Some(encode_target(&step.target, step.step_index)),
    }
}

/// Collect the steps of a repeat, flattening nested repeats into it.
///
/// `depth` counts the enclosing repeats; repeats nested deeper than
/// [`MAX_REPEAT_NESTING`] are skipped.
fn collect_repeat_steps(
    repeat: &TcxRepeatElement,
    depth: usize,
    next_index: &mut u32,
    steps: &mut Vec<WorkoutStep>,
) -> ConversionResult<()> {
    for child in &repeat.children {
        match child {
            TcxStepEntry::Step(element) => {
                steps.push(decode_step(element, *next_index)?);
                *next_index += 1;
            }
            TcxStepEntry::Repeat(nested) if depth >= MAX_REPEAT_NESTING => {
                warn!(
                    step_id = nested.step_id,
                    depth,
                    max = MAX_REPEAT_NESTING,
                    "TCX repeat nesting too deep, nested repeat skipped"
                );
            }
            TcxStepEntry::Repeat(nested) => {
                warn!(
                    step_id = nested.step_id,
                    repetitions = nested.repetitions,
                    "Nested TCX repeat flattened into its parent"
                );
                collect_repeat_steps(nested, depth + 1, next_index, steps)?;
            }
        }
    }
    Ok(())
}

/// Decode a TCX step list into workout elements
///
/// # Errors
///
/// Returns `Serialization` if a duration extension record cannot be stored
pub fn decode_entries(entries: &[TcxStepEntry]) -> ConversionResult<Vec<WorkoutElement>> {
    let mut elements = Vec::with_capacity(entries.len());
    let mut next_index = 0_u32;

    for entry in entries {
        match entry {
            TcxStepEntry::Step(element) => {
                elements.push(decode_step(element, next_index)?.into());
                next_index += 1;
            }
            TcxStepEntry::Repeat(repeat) => {
                let mut steps = Vec::with_capacity(repeat.children.len());
                collect_repeat_steps(repeat, 0, &mut next_index, &mut steps)?;
                if repeat.repetitions >= MIN_REPEAT_COUNT && !steps.is_empty() {
                    elements.push(RepetitionBlock::new(repeat.repetitions, steps).into());
                } else {
                    warn!(
                        step_id = repeat.step_id,
                        repetitions = repeat.repetitions,
                        steps = steps.len(),
                        "TCX repeat cannot form a repetition block, steps kept top-level"
                    );
                    elements.extend(steps.into_iter().map(WorkoutElement::from));
                }
            }
        }
    }
    Ok(elements)
}

/// Encode workout elements as a TCX step list with ids `1, 2, 3, ...`
#[must_use]
pub fn encode_entries(elements: &[WorkoutElement]) -> Vec<TcxStepEntry> {
    let mut next_id = 1_u32;
    let mut entries = Vec::with_capacity(elements.len());

    for element in elements {
        match element {
            WorkoutElement::Step(step) => {
                entries.push(TcxStepEntry::Step(encode_step(step, next_id)));
                next_id += 1;
            }
            WorkoutElement::Block(block) => {
                let step_id = next_id;
                next_id += 1;
                let children = block
                    .steps
                    .iter()
                    .map(|step| {
                        let child = TcxStepEntry::Step(encode_step(step, next_id));
                        next_id += 1;
                        child
                    })
                    .collect();
                entries.push(TcxStepEntry::Repeat(TcxRepeatElement {
                    step_id,
                    repetitions: block.repeat_count,
                    children,
                }));
            }
        }
    }
    entries
}

impl<C: Clock> TcxConverter<C> {
    /// Create a converter with explicit defaults and time source
    #[must_use]
    pub const fn new(config: ConversionConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Convert a TCX workout to a KRD workout document.
    ///
    /// TCX workouts carry no creation time; it is taken from the clock.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if a duration extension record cannot be stored
    pub fn to_krd(&self, document: &TcxWorkout) -> ConversionResult<Krd> {
        let sport = sport_from_tcx(&document.sport).unwrap_or_else(|| {
            warn!(
                sport = document.sport.as_str(),
                "Unknown TCX sport, using default sport"
            );
            self.config.default_sport
        });

        let mut workout = Workout::new(sport, decode_entries(&document.steps)?);
        workout.name.clone_from(&document.name);

        debug!(elements = workout.steps.len(), "Decoded TCX workout");
        Ok(Krd::workout(KrdMetadata::new(self.clock.now(), sport), workout))
    }

    /// Convert a KRD workout document to a TCX workout
    ///
    /// # Errors
    ///
    /// Returns `MissingWorkout` when the document has no workout payload,
    /// `UnsupportedFeature` for non-workout documents, and a validation error
    /// when the document is malformed
    pub fn from_krd(&self, krd: &Krd) -> ConversionResult<TcxWorkout> {
        if krd.kind != KrdType::Workout {
            return Err(ConversionError::unsupported(
                FORMAT_NAME,
                format!("KRD document type {:?}", krd.kind),
            ));
        }
        let workout = krd.require_workout(FORMAT_NAME)?;
        krd.validate_shape()?;

        Ok(TcxWorkout {
            sport: sport_to_tcx(workout.sport).to_owned(),
            name: workout.name.clone(),
            steps: encode_entries(&workout.steps),
        })
    }
}

impl<C: Clock> WorkoutFormat for TcxConverter<C> {
    type Document = TcxWorkout;

    fn decode(&self, document: &TcxWorkout) -> ConversionResult<Krd> {
        self.to_krd(document)
    }

    fn encode(&self, krd: &Krd) -> ConversionResult<TcxWorkout> {
        self.from_krd(krd)
    }
}
