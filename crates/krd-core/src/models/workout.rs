// ABOUTME: Workout model with sport classification and pool settings
// ABOUTME: Holds the ordered step sequence that adapters flatten into indexed messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

use serde::{Deserialize, Serialize};

use super::{WorkoutElement, WorkoutStep};
use crate::errors::{ensure_positive, ValidationError};

/// Sport a workout is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Cycling
    Cycling,
    /// Running
    Running,
    /// Swimming
    Swimming,
    /// Any other sport
    #[default]
    Generic,
}

impl Sport {
    /// KRD literal of this sport
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cycling => "cycling",
            Self::Running => "running",
            Self::Swimming => "swimming",
            Self::Generic => "generic",
        }
    }

    /// Parse a KRD sport literal
    #[must_use]
    pub fn from_krd_str(value: &str) -> Option<Self> {
        match value {
            "cycling" => Some(Self::Cycling),
            "running" => Some(Self::Running),
            "swimming" => Some(Self::Swimming),
            "generic" => Some(Self::Generic),
            _ => None,
        }
    }
}

/// Refinement of a sport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubSport {
    /// No refinement
    #[default]
    Generic,
    /// Treadmill running
    Treadmill,
    /// Road running
    Street,
    /// Trail running
    Trail,
    /// Track running
    Track,
    /// Spin class
    Spin,
    /// Trainer cycling
    IndoorCycling,
    /// Road cycling
    Road,
    /// Mountain biking
    Mountain,
    /// Downhill biking
    Downhill,
    /// Recumbent cycling
    Recumbent,
    /// Cyclocross
    Cyclocross,
    /// Hand cycling
    HandCycling,
    /// Velodrome cycling
    TrackCycling,
    /// Rowing machine
    IndoorRowing,
    /// Elliptical trainer
    Elliptical,
    /// Stair climber
    StairClimbing,
    /// Pool swimming
    LapSwimming,
    /// Open-water swimming
    OpenWater,
    /// Gravel cycling
    GravelCycling,
    /// Virtual platform activity
    VirtualActivity,
}

/// Unit of `pool_length`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolLengthUnit {
    /// Meters
    Meters,
    /// Yards
    Yards,
}

/// A structured workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sport
    pub sport: Sport,
    /// Sport refinement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_sport: Option<SubSport>,
    /// Pool length for swim workouts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_length: Option<f64>,
    /// Unit of `pool_length`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_length_unit: Option<PoolLengthUnit>,
    /// Ordered step sequence
    pub steps: Vec<WorkoutElement>,
}

impl Workout {
    /// Create an unnamed workout with the given steps
    #[must_use]
    pub fn new(sport: Sport, steps: Vec<WorkoutElement>) -> Self {
        Self {
            name: None,
            sport,
            sub_sport: None,
            pool_length: None,
            pool_length_unit: None,
            steps,
        }
    }

    /// Number of messages the step sequence flattens to
    ///
    /// One per plain step, `steps.len() + 1` per repetition block.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.steps.iter().map(WorkoutElement::message_count).sum()
    }

    /// Iterate every step in sequence order, descending into blocks
    pub fn iter_steps(&self) -> impl Iterator<Item = &WorkoutStep> {
        self.steps.iter().flat_map(|element| match element {
            WorkoutElement::Step(step) => std::slice::from_ref(step).iter(),
            WorkoutElement::Block(block) => block.steps.iter(),
        })
    }

    /// Whether any element is a repetition block
    #[must_use]
    pub fn has_repetition_blocks(&self) -> bool {
        self.steps
            .iter()
            .any(|element| matches!(element, WorkoutElement::Block(_)))
    }

    /// Check pool settings and every element
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check(true)
    }

    pub(crate) fn check(&self, enforce_notes: bool) -> Result<(), ValidationError> {
        if let Some(pool_length) = self.pool_length {
            ensure_positive("poolLength", pool_length)?;
        }
        self.steps
            .iter()
            .try_for_each(|element| element.check(enforce_notes))
    }
}
