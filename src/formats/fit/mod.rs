// ABOUTME: FIT workout adapter: message models, duration and target tables, step assembly
// ABOUTME: Exposes FitConverter for whole documents and the pure per-field converters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

//! # FIT Adapter
//!
//! Works on the message arrays a FIT SDK decoder produces (`fileIdMesgs`,
//! `workoutMesgs`, `workoutStepMesgs`). Binary encoding is left to the SDK.
//!
//! Repetition blocks are flattened into their steps followed by a
//! `repeatUntilStepsCmplt` terminator; decoding regroups them.

/// Wire literals and offset thresholds
pub mod constants;

/// Duration field converter
pub mod duration;

/// File identity and workout summary messages
pub mod metadata;

/// Message records
pub mod models;

/// Step flattening and regrouping
pub mod step;

/// Target field converter
pub mod target;

/// Whole-document converter
pub mod workout;

pub use duration::{decode_duration, encode_duration};
pub use models::{
    FitDurationFields, FitFileId, FitMessages, FitTargetFields, FitWorkout, FitWorkoutStep,
};
pub use step::{decode_steps, encode_repetition_block, encode_steps};
pub use target::{decode_target, encode_target, ValueEncoding};
pub use workout::FitConverter;

use super::spi::{FormatCapabilities, FormatDescriptor};

/// FIT format descriptor
#[derive(Debug, Clone, Copy, Default)]
pub struct FitDescriptor;

impl FormatDescriptor for FitDescriptor {
    fn name(&self) -> &'static str {
        constants::FORMAT_NAME
    }

    fn display_name(&self) -> &'static str {
        "Garmin FIT"
    }

    fn capabilities(&self) -> FormatCapabilities {
        FormatCapabilities::REPETITION_BLOCKS
            | FormatCapabilities::CONDITIONAL_DURATIONS
            | FormatCapabilities::ZONE_TARGETS
            | FormatCapabilities::METADATA
    }
}
