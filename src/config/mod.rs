// ABOUTME: Configuration management module for conversion defaults and injectable time source
// ABOUTME: Holds named defaults passed explicitly into converters instead of process globals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors
//! Configuration module
//!
//! - **Conversion**: default manufacturer, default sport and notes limit,
//!   loadable from environment variables
//! - **Clock**: the time source used when a source document has no creation time

/// Conversion defaults
pub mod conversion;

/// Injectable time source
pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
pub use conversion::ConversionConfig;
