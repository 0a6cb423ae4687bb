// ABOUTME: Format adapter modules and the descriptor SPI shared by all of them
// ABOUTME: Each adapter is feature-gated so embedding crates compile only what they need
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

//! # Format Adapters
//!
//! - `fit`: full-document FIT message conversion
//! - `tcx`: full-document TCX workout conversion
//! - `zwift`: Zwift duration and power scalars
//!
//! Every adapter exposes a descriptor implementing [`spi::FormatDescriptor`].

/// Format descriptor trait and capability flags
pub mod spi;

/// FIT message adapter
#[cfg(feature = "format-fit")]
pub mod fit;

/// TCX workout adapter
#[cfg(feature = "format-tcx")]
pub mod tcx;

/// Zwift scalar adapter
#[cfg(feature = "format-zwift")]
pub mod zwift;

pub use spi::{FormatCapabilities, FormatDescriptor, WorkoutFormat};

/// Descriptors of every adapter compiled into this build
#[must_use]
#[allow(clippy::vec_init_then_push, unused_mut)]
pub fn available_formats() -> Vec<Box<dyn FormatDescriptor>> {
    let mut formats: Vec<Box<dyn FormatDescriptor>> = Vec::new();
    #[cfg(feature = "format-fit")]
    formats.push(Box::new(fit::FitDescriptor));
    #[cfg(feature = "format-tcx")]
    formats.push(Box::new(tcx::TcxDescriptor));
    #[cfg(feature = "format-zwift")]
    formats.push(Box::new(zwift::ZwiftDescriptor));
    formats
}
