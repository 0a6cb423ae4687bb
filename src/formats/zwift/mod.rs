// ABOUTME: Zwift workout adapter for scalar duration values and FTP-fraction power targets
// ABOUTME: Zwift documents are interval attributes, so conversion works per value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

/// Duration value converter
pub mod duration;

/// Power fraction converter
pub mod target;

pub use duration::{decode_duration, encode_duration};
pub use target::{decode_power, encode_power};

use super::spi::{FormatCapabilities, FormatDescriptor};

/// Format name
pub const FORMAT_NAME: &str = "zwift";

/// Zwift format descriptor
#[derive(Debug, Clone, Copy, Default)]
pub struct ZwiftDescriptor;

impl FormatDescriptor for ZwiftDescriptor {
    fn name(&self) -> &'static str {
        FORMAT_NAME
    }

    fn display_name(&self) -> &'static str {
        "Zwift"
    }

    fn capabilities(&self) -> FormatCapabilities {
        FormatCapabilities::empty()
    }
}
