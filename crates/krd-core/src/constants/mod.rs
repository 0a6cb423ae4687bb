// ABOUTME: Limits and literals of the KRD document format
// ABOUTME: Named constants shared by validation and every format adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

//! KRD format constants

/// The only KRD document version this crate reads and writes
pub const KRD_VERSION: &str = "1.0";

/// Maximum number of characters allowed in a step's `notes`
pub const NOTES_MAX_LENGTH: usize = 256;

/// Smallest `repeatCount` a repetition block may carry
pub const MIN_REPEAT_COUNT: u32 = 2;
