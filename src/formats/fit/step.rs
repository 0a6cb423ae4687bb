// ABOUTME: FIT step assembler: flattens workout elements into indexed step messages and back
// ABOUTME: Repetition blocks become their steps plus a repeatUntilStepsCmplt terminator message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use krd_core::constants::MIN_REPEAT_COUNT;
use krd_core::models::{RepetitionBlock, WorkoutElement, WorkoutStep};
use tracing::{debug, warn};

use super::constants::{duration_types, target_types};
use super::duration::{decode_duration, encode_duration};
use super::models::{FitDurationFields, FitTargetFields, FitWorkoutStep};
use super::target::{decode_target, encode_target};
use crate::config::ConversionConfig;
use crate::taxonomy::equipment::{equipment_from_fit, equipment_to_fit};
use crate::taxonomy::intensity::{intensity_from_fit, intensity_to_fit};

fn truncate_notes(notes: &str, max_length: usize, message_index: u32) -> String {
    let length = notes.chars().count();
    if length <= max_length {
        return notes.to_owned();
    }
    warn!(
        message_index,
        length, max_length, "Step notes truncated to fit the notes field"
    );
    notes.chars().take(max_length).collect()
}

/// Encode one step as the message at `message_index`
#[must_use]
pub fn encode_step(
    step: &WorkoutStep,
    message_index: u32,
    config: &ConversionConfig,
) -> FitWorkoutStep {
    FitWorkoutStep {
        message_index: Some(message_index),
        wkt_step_name: step.name.clone(),
        duration: encode_duration(&step.duration),
        target: encode_target(&step.target),
        repeat_steps: None,
        intensity: step
            .intensity
            .map(|intensity| intensity_to_fit(intensity).to_owned()),
        notes: step
            .notes
            .as_deref()
            .map(|notes| truncate_notes(notes, config.notes_max_length, message_index)),
        equipment: step
            .equipment
            .map(|equipment| equipment_to_fit(equipment).to_owned()),
    }
}

fn terminator(message_index: u32, start_index: u32, repeat_count: u32) -> FitWorkoutStep {
    FitWorkoutStep {
        message_index: Some(message_index),
        duration: FitDurationFields {
            duration_type: Some(duration_types::REPEAT_UNTIL_STEPS_COMPLETE.to_owned()),
            duration_step: Some(start_index),
            ..FitDurationFields::default()
        },
        target: FitTargetFields {
            target_type: Some(target_types::OPEN.to_owned()),
            ..FitTargetFields::default()
        },
        repeat_steps: Some(repeat_count),
        ..FitWorkoutStep::default()
    }
}

/// Encode a repetition block whose first step takes `start_index`.
///
/// Returns one message per contained step followed by the terminator, whose
/// `durationStep` points back at `start_index`.
#[must_use]
pub fn encode_repetition_block(
    block: &RepetitionBlock,
    start_index: u32,
    config: &ConversionConfig,
) -> Vec<FitWorkoutStep> {
    let mut messages: Vec<FitWorkoutStep> = block
        .steps
        .iter()
        .zip(start_index..)
        .map(|(step, index)| encode_step(step, index, config))
        .collect();
    let terminator_index = start_index + messages.len() as u32;
    messages.push(terminator(terminator_index, start_index, block.repeat_count));
    messages
}

/// Flatten a workout's elements into step messages indexed `0, 1, 2, ...`
#[must_use]
pub fn encode_steps(elements: &[WorkoutElement], config: &ConversionConfig) -> Vec<FitWorkoutStep> {
    elements
        .iter()
        .fold(Vec::new(), |mut messages, element| {
            let next_index = messages.len() as u32;
            match element {
                WorkoutElement::Step(step) => messages.push(encode_step(step, next_index, config)),
                WorkoutElement::Block(block) => {
                    messages.extend(encode_repetition_block(block, next_index, config));
                }
            }
            messages
        })
}

/// Decode one step message; `position` stands in for a missing `messageIndex`
#[must_use]
pub fn decode_step(message: &FitWorkoutStep, position: u32) -> WorkoutStep {
    let mut step = WorkoutStep::new(
        message.message_index.unwrap_or(position),
        decode_duration(&message.duration),
        decode_target(&message.target),
    );
    step.name.clone_from(&message.wkt_step_name);
    step.notes.clone_from(&message.notes);
    step.intensity = message.intensity.as_deref().map(intensity_from_fit);
    step.equipment = message.equipment.as_deref().map(equipment_from_fit);
    step
}

/// A decoded element with the message index of its first step
struct Grouped {
    first_index: u32,
    element: WorkoutElement,
}

/// Position in `grouped` where a block starting at `start_index` begins, if
/// the trailing run of plain steps starts exactly there
fn block_start(grouped: &[Grouped], start_index: u32) -> Option<usize> {
    let position = grouped
        .iter()
        .rposition(|entry| entry.first_index <= start_index)?;
    let aligned = grouped[position].first_index == start_index;
    let plain_tail = grouped[position..]
        .iter()
        .all(|entry| matches!(entry.element, WorkoutElement::Step(_)));
    (aligned && plain_tail).then_some(position)
}

fn close_block(grouped: &mut Vec<Grouped>, terminator: &FitWorkoutStep, message_index: u32) {
    let Some(start_index) = terminator.duration.duration_step else {
        warn!(message_index, "Repeat terminator without durationStep ignored");
        return;
    };
    let repeat_count = match terminator.repeat_steps {
        Some(count) if count >= MIN_REPEAT_COUNT => count,
        count => {
            warn!(
                message_index,
                repeat_steps = ?count,
                "Repeat terminator with unusable repeat count ignored"
            );
            return;
        }
    };
    if start_index >= message_index {
        warn!(
            message_index,
            duration_step = start_index,
            "Repeat terminator points forward, steps kept top-level"
        );
        return;
    }
    let Some(position) = block_start(grouped, start_index) else {
        warn!(
            message_index,
            duration_step = start_index,
            "Repeat terminator does not close a run of plain steps, steps kept top-level"
        );
        return;
    };

    let steps: Vec<WorkoutStep> = grouped
        .drain(position..)
        .filter_map(|entry| match entry.element {
            WorkoutElement::Step(step) => Some(step),
            WorkoutElement::Block(_) => None,
        })
        .collect();
    debug!(
        message_index,
        start_index,
        repeat_count,
        steps = steps.len(),
        "Regrouped repetition block"
    );
    grouped.push(Grouped {
        first_index: start_index,
        element: RepetitionBlock::new(repeat_count, steps).into(),
    });
}

/// Regroup a flat step message sequence into workout elements.
///
/// Each `repeatUntilStepsCmplt` terminator closes a block over the trailing
/// plain steps whose message index is at least its `durationStep`. Malformed
/// terminators are dropped with a warning and their steps stay top-level.
#[must_use]
pub fn decode_steps(messages: &[FitWorkoutStep]) -> Vec<WorkoutElement> {
    let mut grouped: Vec<Grouped> = Vec::with_capacity(messages.len());

    for (position, message) in (0_u32..).zip(messages) {
        let message_index = message.message_index.unwrap_or(position);
        if message.is_repeat_terminator() {
            close_block(&mut grouped, message, message_index);
        } else {
            grouped.push(Grouped {
                first_index: message_index,
                element: decode_step(message, position).into(),
            });
        }
    }

    grouped.into_iter().map(|entry| entry.element).collect()
}
