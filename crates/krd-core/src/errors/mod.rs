// ABOUTME: Error handling for KRD validation and format conversion
// ABOUTME: Re-exports the validation and conversion error types plus stable error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

//! # Error Types
//!
//! Conversion failures come in two tiers. Format gaps (an unknown duration
//! literal, a missing field) are never errors: adapters degrade to `open`.
//! Contract violations by the caller are typed errors:
//!
//! - `ValidationError` - a KRD record that does not match exactly one valid shape
//! - `ConversionError` - a conversion that cannot proceed at all

mod conversion;
mod validation;

pub use conversion::{ConversionError, ConversionResult, ErrorCode};
pub(crate) use validation::ensure_positive;
pub use validation::ValidationError;
