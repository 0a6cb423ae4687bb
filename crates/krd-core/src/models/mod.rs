// ABOUTME: KRD domain models for structured workouts
// ABOUTME: Re-exports Duration, Target, WorkoutStep, RepetitionBlock, Workout and Krd
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

//! # Data Models
//!
//! The canonical, format-agnostic workout representation. Every format adapter
//! decodes into these types and encodes from them.
//!
//! ## Design Principles
//!
//! - **Closed vocabularies**: durations and targets are tagged enums; a record
//!   either matches exactly one variant or is rejected
//! - **Value records**: built once per conversion call, never mutated afterwards
//! - **Explicit sum types**: `WorkoutElement` replaces presence-based step/block
//!   discrimination everywhere except the JSON edge

mod duration;
mod krd;
mod step;
mod target;
mod workout;

pub use duration::{Duration, DurationType};
pub use krd::{Krd, KrdExtensions, KrdMetadata, KrdType};
pub use step::{Equipment, Intensity, RepetitionBlock, WorkoutElement, WorkoutStep};
pub use target::{
    CadenceValue, HeartRateValue, PaceValue, PowerValue, StrokeTypeValue, Target, TargetType,
};
pub use workout::{PoolLengthUnit, Sport, SubSport, Workout};
