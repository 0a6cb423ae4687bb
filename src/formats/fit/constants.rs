// ABOUTME: FIT wire vocabulary: message keys, duration-type and target-type literals
// ABOUTME: Named thresholds for the overloaded targetValue field of power and heart-rate targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

/// Format name, also the KRD extension key
pub const FORMAT_NAME: &str = "fit";

/// `type` of the file-identity message for workout files
pub const FILE_TYPE_WORKOUT: &str = "workout";

/// Duration-type literals
pub mod duration_types {
    /// Elapsed time in `durationTime`
    pub const TIME: &str = "time";
    /// Distance in `durationDistance`
    pub const DISTANCE: &str = "distance";
    /// Energy in `durationCalories`
    pub const CALORIES: &str = "calories";
    /// Heart rate below `durationHr`
    pub const HR_LESS_THAN: &str = "hrLessThan";
    /// Heart rate above `durationHr`; KRD has no single-step equivalent
    pub const HR_GREATER_THAN: &str = "hrGreaterThan";
    /// Power below `durationPower`
    pub const POWER_LESS_THAN: &str = "powerLessThan";
    /// Power above `durationPower`
    pub const POWER_GREATER_THAN: &str = "powerGreaterThan";
    /// Repeat from `durationStep` until `durationTime`
    pub const REPEAT_UNTIL_TIME: &str = "repeatUntilTime";
    /// Repeat from `durationStep` until `durationDistance`
    pub const REPEAT_UNTIL_DISTANCE: &str = "repeatUntilDistance";
    /// Repeat from `durationStep` until `durationCalories`
    pub const REPEAT_UNTIL_CALORIES: &str = "repeatUntilCalories";
    /// Repeat from `durationStep` until heart rate is below `durationHr`
    pub const REPEAT_UNTIL_HR_LESS_THAN: &str = "repeatUntilHrLessThan";
    /// Repeat from `durationStep` until heart rate is above `repeatHr`
    pub const REPEAT_UNTIL_HR_GREATER_THAN: &str = "repeatUntilHrGreaterThan";
    /// Repeat from `durationStep` until power is below `durationPower`
    pub const REPEAT_UNTIL_POWER_LESS_THAN: &str = "repeatUntilPowerLessThan";
    /// Repeat from `durationStep` until power is above `durationPower`
    pub const REPEAT_UNTIL_POWER_GREATER_THAN: &str = "repeatUntilPowerGreaterThan";
    /// Repetition block terminator: repeat from `durationStep` `repeatSteps` times
    pub const REPEAT_UNTIL_STEPS_COMPLETE: &str = "repeatUntilStepsCmplt";
    /// Lap button
    pub const OPEN: &str = "open";
}

/// Target-type literals
pub mod target_types {
    /// Power target
    pub const POWER: &str = "power";
    /// Heart-rate target
    pub const HEART_RATE: &str = "heartRate";
    /// Cadence target
    pub const CADENCE: &str = "cadence";
    /// Speed target, KRD pace
    pub const SPEED: &str = "speed";
    /// Swim stroke target
    pub const SWIM_STROKE: &str = "swimStroke";
    /// No target
    pub const OPEN: &str = "open";
}

/// `targetValue` offsets.
///
/// A single `targetValue` field carries both absolute and relative values; the
/// relative form is shifted by an offset so the two ranges do not overlap.
pub mod value_offsets {
    /// Power above this decodes as percent FTP
    pub const POWER_PERCENT_FTP_OFFSET: f64 = 1000.0;
    /// Heart rate above this (and up to `HEART_RATE_PERCENT_MAX_LIMIT`) decodes as percent of max
    pub const HEART_RATE_PERCENT_MAX_OFFSET: f64 = 100.0;
    /// Upper bound of the percent-of-max window
    pub const HEART_RATE_PERCENT_MAX_LIMIT: f64 = 200.0;
    /// Highest heart rate accepted as bpm
    pub const HEART_RATE_BPM_LIMIT: f64 = 300.0;
}
