// ABOUTME: TCX wire vocabulary: duration, target, zone and step xsi:type literals
// ABOUTME: Extension keys used to carry duration conditions KRD cannot tag natively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

/// Format name, also the key of per-step KRD extensions
pub const FORMAT_NAME: &str = "tcx";

/// Deepest `Repeat_t` nesting flattened on decode; deeper repeats are skipped
pub const MAX_REPEAT_NESTING: usize = 8;

/// Duration-type literals of the flat duration record
pub mod duration_types {
    /// Elapsed time in `seconds`
    pub const TIME: &str = "Time";
    /// Distance in `meters`
    pub const DISTANCE: &str = "Distance";
    /// Lap button
    pub const LAP_BUTTON: &str = "LapButton";
    /// Heart rate above `bpm`
    pub const HEART_RATE_ABOVE: &str = "HeartRateAbove";
    /// Heart rate below `bpm`
    pub const HEART_RATE_BELOW: &str = "HeartRateBelow";
    /// Energy in `calories`
    pub const CALORIES_BURNED: &str = "CaloriesBurned";
}

/// `@_xsi:type` literals
pub mod xsi_types {
    /// Time duration element
    pub const TIME: &str = "Time_t";
    /// Distance duration element
    pub const DISTANCE: &str = "Distance_t";
    /// Lap-button duration element
    pub const LAP_BUTTON: &str = "LapButton_t";
    /// Heart-rate-above duration element
    pub const HEART_RATE_ABOVE: &str = "HeartRateAbove_t";
    /// Heart-rate-below duration element
    pub const HEART_RATE_BELOW: &str = "HeartRateBelow_t";
    /// Calories duration element
    pub const CALORIES_BURNED: &str = "CaloriesBurned_t";
    /// Heart-rate value in beats per minute
    pub const HEART_RATE_BPM: &str = "HeartRateInBeatsPerMinute_t";
    /// No target
    pub const TARGET_NONE: &str = "None_t";
    /// Heart-rate target
    pub const TARGET_HEART_RATE: &str = "HeartRate_t";
    /// Speed target
    pub const TARGET_SPEED: &str = "Speed_t";
    /// Cadence target
    pub const TARGET_CADENCE: &str = "Cadence_t";
    /// Numbered heart-rate zone
    pub const PREDEFINED_HEART_RATE_ZONE: &str = "PredefinedHeartRateZone_t";
    /// Custom heart-rate range
    pub const CUSTOM_HEART_RATE_ZONE: &str = "CustomHeartRateZone_t";
    /// Numbered speed zone
    pub const PREDEFINED_SPEED_ZONE: &str = "PredefinedSpeedZone_t";
    /// Custom speed range
    pub const CUSTOM_SPEED_ZONE: &str = "CustomSpeedZone_t";
}

/// Keys of the duration extension record
pub mod extension_keys {
    /// Heart-rate-above threshold in bpm
    pub const HEART_RATE_ABOVE: &str = "heartRateAbove";
    /// Heart-rate-below threshold in bpm
    pub const HEART_RATE_BELOW: &str = "heartRateBelow";
    /// Calories threshold
    pub const CALORIES_BURNED: &str = "caloriesBurned";
}

/// `ViewAs` literal written on custom speed zones
pub const SPEED_VIEW_AS_PACE: &str = "Pace";
