// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet tracing setup and KRD workout fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `krd_convert`

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use krd_convert::config::{ConversionConfig, FixedClock};
use krd_convert::models::{
    Duration, Krd, KrdMetadata, RepetitionBlock, Sport, Target, Workout, WorkoutElement,
    WorkoutStep,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Creation time used by every fixture
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 7, 30, 0).unwrap()
}

/// Clock pinned to [`fixed_time`]
pub fn fixed_clock() -> FixedClock {
    FixedClock(fixed_time())
}

/// Default conversion config
pub fn config() -> ConversionConfig {
    ConversionConfig::default()
}

/// Time step with an open target
pub fn time_step(step_index: u32, seconds: f64) -> WorkoutStep {
    WorkoutStep::new(step_index, Duration::Time { seconds }, Target::Open)
}

/// Warmup, 4 x (work, recovery), cooldown
pub fn interval_workout() -> Workout {
    let block = RepetitionBlock::new(4, vec![time_step(1, 180.0), time_step(2, 60.0)]);
    let mut workout = Workout::new(
        Sport::Cycling,
        vec![
            WorkoutElement::from(time_step(0, 600.0)),
            block.into(),
            time_step(4, 300.0).into(),
        ],
    );
    workout.name = Some("4x3min".to_owned());
    workout
}

/// KRD document wrapping `workout`
pub fn krd_for(workout: Workout) -> Krd {
    let metadata = KrdMetadata::new(fixed_time(), workout.sport);
    Krd::workout(metadata, workout)
}
