// ABOUTME: Workout steps, repetition blocks and the step-sequence element sum type
// ABOUTME: Presence of `repeatCount` discriminates blocks from steps only at the JSON edge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Duration, DurationType, Target, TargetType};
use crate::constants::{MIN_REPEAT_COUNT, NOTES_MAX_LENGTH};
use crate::errors::ValidationError;

/// Effort category of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Warm-up
    Warmup,
    /// Main work
    Active,
    /// Cool-down
    Cooldown,
    /// Full rest
    Rest,
    /// Active recovery
    Recovery,
    /// Work interval
    Interval,
    /// Anything else
    Other,
}

/// Equipment used during a step (swim drills)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// No equipment
    None,
    /// Fins
    SwimFins,
    /// Kickboard
    SwimKickboard,
    /// Paddles
    SwimPaddles,
    /// Pull buoy
    SwimPullBuoy,
    /// Snorkel
    SwimSnorkel,
}

/// A single workout step.
///
/// `duration_type` and `target_type` duplicate the tags of `duration` and
/// `target`; [`WorkoutStep::new`] keeps them in sync and
/// [`WorkoutStep::validate`] rejects records where they disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStep {
    /// Position of the step in its source document
    pub step_index: u32,
    /// Tag of `duration`
    pub duration_type: DurationType,
    /// When the step ends
    pub duration: Duration,
    /// Tag of `target`
    pub target_type: TargetType,
    /// What the athlete should hold
    pub target: Target,
    /// Effort category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text notes, at most 256 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Equipment used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Equipment>,
    /// Per-format round-trip payloads keyed by format name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<BTreeMap<String, serde_json::Value>>,
}

impl WorkoutStep {
    /// Create a step whose type tags match its duration and target
    #[must_use]
    pub fn new(step_index: u32, duration: Duration, target: Target) -> Self {
        Self {
            step_index,
            duration_type: duration.kind(),
            duration,
            target_type: target.kind(),
            target,
            intensity: None,
            name: None,
            notes: None,
            equipment: None,
            extensions: None,
        }
    }

    /// Set the intensity
    #[must_use]
    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set the equipment
    #[must_use]
    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = Some(equipment);
        self
    }

    /// Attach a round-trip payload for `format`
    #[must_use]
    pub fn with_extension(mut self, format: impl Into<String>, payload: serde_json::Value) -> Self {
        self.extensions
            .get_or_insert_with(BTreeMap::new)
            .insert(format.into(), payload);
        self
    }

    /// Round-trip payload stored for `format`, if any
    #[must_use]
    pub fn extension(&self, format: &str) -> Option<&serde_json::Value> {
        self.extensions.as_ref().and_then(|map| map.get(format))
    }

    /// Check tags, duration, target and notes
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check(true)
    }

    /// Check tags, duration and target, leaving the notes length to encoders
    /// that truncate
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found
    pub fn validate_shape(&self) -> Result<(), ValidationError> {
        self.check(false)
    }

    pub(crate) fn check(&self, enforce_notes: bool) -> Result<(), ValidationError> {
        if self.duration_type != self.duration.kind() {
            return Err(ValidationError::type_mismatch(
                "durationType",
                self.duration.kind().as_str(),
                self.duration_type.as_str(),
            ));
        }
        if self.target_type != self.target.kind() {
            return Err(ValidationError::type_mismatch(
                "targetType",
                self.target.kind().as_str(),
                self.target_type.as_str(),
            ));
        }
        self.duration.validate()?;
        self.target.validate()?;
        if let Some(notes) = self.notes.as_ref().filter(|_| enforce_notes) {
            let length = notes.chars().count();
            if length > NOTES_MAX_LENGTH {
                return Err(ValidationError::NotesTooLong {
                    step_index: self.step_index,
                    length,
                    max: NOTES_MAX_LENGTH,
                });
            }
        }
        Ok(())
    }
}

/// An ordered group of steps executed `repeat_count` times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepetitionBlock {
    /// How many times the steps run, at least 2
    pub repeat_count: u32,
    /// Steps of one repetition
    pub steps: Vec<WorkoutStep>,
}

impl RepetitionBlock {
    /// Create a block
    #[must_use]
    pub fn new(repeat_count: u32, steps: Vec<WorkoutStep>) -> Self {
        Self {
            repeat_count,
            steps,
        }
    }

    /// Check the repeat count and every contained step
    ///
    /// # Errors
    ///
    /// Returns `RepeatCountTooSmall`, `EmptyRepetitionBlock` or the first step error
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check(true)
    }

    pub(crate) fn check(&self, enforce_notes: bool) -> Result<(), ValidationError> {
        if self.repeat_count < MIN_REPEAT_COUNT {
            return Err(ValidationError::RepeatCountTooSmall {
                count: self.repeat_count,
                min: MIN_REPEAT_COUNT,
            });
        }
        if self.steps.is_empty() {
            return Err(ValidationError::EmptyRepetitionBlock);
        }
        self.steps
            .iter()
            .try_for_each(|step| step.check(enforce_notes))
    }
}

/// One element of a workout's step sequence
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutElement {
    /// A plain step
    Step(WorkoutStep),
    /// A repetition block
    Block(RepetitionBlock),
}

impl WorkoutElement {
    /// Number of messages this element flattens to: one per step, plus a
    /// terminator for a block
    #[must_use]
    pub fn message_count(&self) -> usize {
        match self {
            Self::Step(_) => 1,
            Self::Block(block) => block.steps.len() + 1,
        }
    }

    /// Validate the wrapped step or block
    ///
    /// # Errors
    ///
    /// Returns the wrapped record's `ValidationError`
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check(true)
    }

    pub(crate) fn check(&self, enforce_notes: bool) -> Result<(), ValidationError> {
        match self {
            Self::Step(step) => step.check(enforce_notes),
            Self::Block(block) => block.check(enforce_notes),
        }
    }
}

impl From<WorkoutStep> for WorkoutElement {
    fn from(step: WorkoutStep) -> Self {
        Self::Step(step)
    }
}

impl From<RepetitionBlock> for WorkoutElement {
    fn from(block: RepetitionBlock) -> Self {
        Self::Block(block)
    }
}

impl Serialize for WorkoutElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Step(step) => step.serialize(serializer),
            Self::Block(block) => block.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for WorkoutElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.get("repeatCount").is_some() {
            serde_json::from_value(value)
                .map(Self::Block)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(Self::Step)
                .map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn interval() -> WorkoutStep {
        WorkoutStep::new(0, Duration::Time { seconds: 60.0 }, Target::Open)
    }

    #[test]
    fn test_repeat_count_discriminates_blocks() {
        let block: WorkoutElement = serde_json::from_value(json!({
            "repeatCount": 3,
            "steps": [serde_json::to_value(interval()).unwrap()]
        }))
        .unwrap();
        assert!(matches!(block, WorkoutElement::Block(ref b) if b.repeat_count == 3));

        let step: WorkoutElement =
            serde_json::from_value(serde_json::to_value(interval()).unwrap()).unwrap();
        assert!(matches!(step, WorkoutElement::Step(_)));
    }

    #[test]
    fn test_mismatched_tag_rejected() {
        let mut step = interval();
        step.duration_type = DurationType::Distance;
        assert!(matches!(
            step.validate(),
            Err(ValidationError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_single_repeat_rejected() {
        let block = RepetitionBlock::new(1, vec![interval()]);
        assert!(matches!(
            block.validate(),
            Err(ValidationError::RepeatCountTooSmall { count: 1, min: 2 })
        ));
    }
}
