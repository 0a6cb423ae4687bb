// ABOUTME: Unified error handling re-exported from krd-core
// ABOUTME: Typed validation and conversion errors shared by every format adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

//! # Error Handling
//!
//! Soft fallbacks (unknown literals, missing fields) never surface here; they
//! degrade to `open` and are logged at `warn`. Everything in this module is a
//! hard failure that aborts the conversion.

pub use krd_core::errors::{ConversionError, ConversionResult, ErrorCode, ValidationError};
