// ABOUTME: Canonical KRD workout model shared by every structured-workout format adapter
// ABOUTME: Foundation crate with domain types, shape validation, error types and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

#![deny(unsafe_code)]

//! # KRD Core
//!
//! Foundation crate providing the canonical intermediate workout representation
//! ("KRD") that format adapters decode to and encode from. The crate holds no
//! conversion logic; it only defines the value records and the rules that make
//! a record valid.
//!
//! ## Modules
//!
//! - **models**: `Duration`, `Target`, `WorkoutStep`, `RepetitionBlock`, `Workout`, `Krd`
//! - **errors**: `ValidationError`, `ConversionError` and the stable `ErrorCode` catalogue
//! - **constants**: KRD version string, notes length limit, repetition minimum

/// Typed validation and conversion errors
pub mod errors;

/// Shared limits and literals of the KRD document format
pub mod constants;

/// KRD domain models (durations, targets, steps, workouts, documents)
pub mod models;
