// ABOUTME: Format descriptor interface and capability flags for the workout format adapters
// ABOUTME: Lets callers check whether a KRD workout can be expressed losslessly in a format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

//! # Format Service Provider Interface
//!
//! Each adapter publishes a [`FormatDescriptor`] naming the format and the
//! KRD constructs it can carry. Callers compare those capabilities with
//! [`FormatCapabilities::required_by`] before converting to learn which parts
//! of a workout would degrade to `open`.
//!
//! ```rust,no_run
//! use krd_convert::formats::{available_formats, FormatCapabilities};
//! use krd_convert::models::{Sport, Workout};
//!
//! let workout = Workout::new(Sport::Cycling, Vec::new());
//! let required = FormatCapabilities::required_by(&workout);
//! for format in available_formats() {
//!     println!("{}: lossless = {}", format.name(), format.can_express(required));
//! }
//! ```

use krd_core::errors::ConversionResult;
use krd_core::models::{
    CadenceValue, Duration, HeartRateValue, Krd, PaceValue, PowerValue, Target, Workout,
    WorkoutStep,
};

bitflags::bitflags! {
    /// KRD constructs a format can represent natively
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct FormatCapabilities: u8 {
        /// Grouped steps executed several times
        const REPETITION_BLOCKS = 0b0000_0001;
        /// Heart-rate, power, calorie and repeat-until durations
        const CONDITIONAL_DURATIONS = 0b0000_0010;
        /// Per-step extension payloads restored on encode
        const EXTENSION_ROUND_TRIP = 0b0000_0100;
        /// Zone-numbered targets
        const ZONE_TARGETS = 0b0000_1000;
        /// File identity metadata (manufacturer, product, serial)
        const METADATA = 0b0001_0000;
    }
}

impl FormatCapabilities {
    /// Capabilities a workout needs to survive conversion without loss
    #[must_use]
    pub fn required_by(workout: &Workout) -> Self {
        let mut required = Self::empty();
        if workout.has_repetition_blocks() {
            required |= Self::REPETITION_BLOCKS;
        }
        for step in workout.iter_steps() {
            required |= Self::required_by_step(step);
        }
        required
    }

    fn required_by_step(step: &WorkoutStep) -> Self {
        let mut required = Self::empty();
        if !matches!(
            step.duration,
            Duration::Time { .. } | Duration::Distance { .. } | Duration::Open
        ) {
            required |= Self::CONDITIONAL_DURATIONS;
        }
        if is_zone_target(&step.target) {
            required |= Self::ZONE_TARGETS;
        }
        if step.extensions.as_ref().is_some_and(|ext| !ext.is_empty()) {
            required |= Self::EXTENSION_ROUND_TRIP;
        }
        required
    }

    /// Check if repetition blocks are supported
    #[must_use]
    pub const fn supports_repetition_blocks(&self) -> bool {
        self.contains(Self::REPETITION_BLOCKS)
    }

    /// Check if conditional durations are supported
    #[must_use]
    pub const fn supports_conditional_durations(&self) -> bool {
        self.contains(Self::CONDITIONAL_DURATIONS)
    }

    /// Check if file metadata is carried
    #[must_use]
    pub const fn supports_metadata(&self) -> bool {
        self.contains(Self::METADATA)
    }
}

const fn is_zone_target(target: &Target) -> bool {
    matches!(
        target,
        Target::Power {
            value: PowerValue::Zone { .. }
        } | Target::HeartRate {
            value: HeartRateValue::Zone { .. }
        } | Target::Cadence {
            value: CadenceValue::Zone { .. }
        } | Target::Pace {
            value: PaceValue::Zone { .. }
        }
    )
}

/// Describes a format adapter's identity and capabilities
pub trait FormatDescriptor: Send + Sync {
    /// Unique lowercase identifier, also the key of the format's KRD extensions
    fn name(&self) -> &'static str;

    /// Human-readable name
    fn display_name(&self) -> &'static str;

    /// Constructs this format represents natively
    fn capabilities(&self) -> FormatCapabilities;

    /// Whether every construct in `required` is supported
    fn can_express(&self, required: FormatCapabilities) -> bool {
        self.capabilities().contains(required)
    }

    /// Constructs in `required` this format would degrade
    fn unsupported(&self, required: FormatCapabilities) -> FormatCapabilities {
        required.difference(self.capabilities())
    }
}

/// Full-document conversion between KRD and a format's native record
pub trait WorkoutFormat {
    /// The format's in-memory document record
    type Document;

    /// Convert a native document to KRD
    ///
    /// # Errors
    ///
    /// Returns a `ConversionError` when the document cannot be represented in KRD
    fn decode(&self, document: &Self::Document) -> ConversionResult<Krd>;

    /// Convert a KRD document to the native record
    ///
    /// # Errors
    ///
    /// Returns `MissingWorkout` or a validation error for an unusable KRD
    fn encode(&self, krd: &Krd) -> ConversionResult<Self::Document>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use krd_core::models::{RepetitionBlock, Sport};

    struct TimeOnly;

    impl FormatDescriptor for TimeOnly {
        fn name(&self) -> &'static str {
            "time-only"
        }

        fn display_name(&self) -> &'static str {
            "Time Only"
        }

        fn capabilities(&self) -> FormatCapabilities {
            FormatCapabilities::empty()
        }
    }

    #[test]
    fn test_required_by_collects_every_construct() {
        let hr = WorkoutStep::new(
            0,
            Duration::HeartRateLessThan { bpm: 140 },
            Target::Power {
                value: PowerValue::Zone { value: 3 },
            },
        );
        let easy = WorkoutStep::new(1, Duration::Time { seconds: 60.0 }, Target::Open);
        let workout = Workout::new(
            Sport::Cycling,
            vec![hr.into(), RepetitionBlock::new(2, vec![easy]).into()],
        );

        let required = FormatCapabilities::required_by(&workout);
        assert_eq!(
            required,
            FormatCapabilities::REPETITION_BLOCKS
                | FormatCapabilities::CONDITIONAL_DURATIONS
                | FormatCapabilities::ZONE_TARGETS
        );
        assert!(!TimeOnly.can_express(required));
        assert_eq!(TimeOnly.unsupported(required), required);
    }

    #[test]
    fn test_plain_workout_requires_nothing() {
        let step = WorkoutStep::new(0, Duration::Distance { meters: 400.0 }, Target::Open);
        let workout = Workout::new(Sport::Running, vec![step.into()]);
        assert!(FormatCapabilities::required_by(&workout).is_empty());
    }
}
