// ABOUTME: Main library entry point for the KRD workout conversion core
// ABOUTME: Format adapters, taxonomy mappers, conversion configuration and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

#![deny(unsafe_code)]

//! # KRD Convert
//!
//! Converts structured workouts between the canonical KRD representation and
//! three external workout formats. All conversions are pure, synchronous
//! functions over in-memory records; there is no file or network I/O.
//!
//! ## Formats
//!
//! - **FIT** (`formats::fit`): flat message sequence with repetition blocks
//!   encoded as trailing terminator messages
//! - **TCX** (`formats::tcx`): XML-object records with round-trip extensions for
//!   duration conditions TCX cannot tag natively
//! - **Zwift** (`formats::zwift`): single numeric durations and FTP fractions
//!
//! ## Architecture
//!
//! - **`krd_core`**: domain model, validation and error types
//! - **Taxonomy**: enumeration literal tables shared by the adapters
//! - **Formats**: one adapter module per format plus a descriptor SPI
//! - **Config**: conversion defaults and the injectable clock
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use krd_convert::config::{ConversionConfig, SystemClock};
//! use krd_convert::formats::fit::{FitConverter, FitMessages};
//! use krd_convert::errors::ConversionResult;
//!
//! fn convert(messages: &FitMessages) -> ConversionResult<()> {
//!     let converter = FitConverter::new(ConversionConfig::from_env(), SystemClock);
//!     let krd = converter.to_krd(messages)?;
//!     let round_trip = converter.from_krd(&krd)?;
//!     println!("{} step messages", round_trip.workout_step_mesgs.len());
//!     Ok(())
//! }
//! ```

/// Conversion defaults and the injectable clock
pub mod config;

/// Conversion defaults, environment variable names and unit factors
pub mod constants;

/// Error types re-exported from `krd_core`
pub mod errors;

/// Format adapters and the format descriptor SPI
pub mod formats;

/// Tracing subscriber setup for embedding applications
pub mod logging;

/// Enumeration literal tables shared by the adapters
pub mod taxonomy;

pub use krd_core::models;
