// ABOUTME: TCX workout adapter: XML-object records, duration extensions, target zones
// ABOUTME: Exposes TcxConverter for whole workouts and the pure duration and target converters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

//! # TCX Adapter
//!
//! Works on the object form of a TCX `Workout` element as produced by an XML
//! parser that prefixes attributes with `@_`. XML text handling is left to the
//! caller.
//!
//! TCX has no KRD tag for heart-rate or calorie duration conditions. Those
//! decode to `open` and keep the original threshold in the step's `tcx`
//! extension so encoding restores the original element.

/// Wire literals
pub mod constants;

/// Duration converter with extension side-channel
pub mod duration;

/// XML-object records
pub mod models;

/// Target converter
pub mod target;

/// Whole-workout converter
pub mod workout;

pub use duration::{
    decode_duration, encode_duration, DecodedDuration, TcxDurationData, TcxDurationExtensions,
};
pub use models::{
    TcxDurationElement, TcxRepeatElement, TcxStepElement, TcxStepEntry, TcxTargetElement,
    TcxWorkout,
};
pub use workout::TcxConverter;

use super::spi::{FormatCapabilities, FormatDescriptor};

/// TCX format descriptor
#[derive(Debug, Clone, Copy, Default)]
pub struct TcxDescriptor;

impl FormatDescriptor for TcxDescriptor {
    fn name(&self) -> &'static str {
        constants::FORMAT_NAME
    }

    fn display_name(&self) -> &'static str {
        "Training Center XML"
    }

    fn capabilities(&self) -> FormatCapabilities {
        FormatCapabilities::REPETITION_BLOCKS
            | FormatCapabilities::EXTENSION_ROUND_TRIP
            | FormatCapabilities::ZONE_TARGETS
    }
}
