// ABOUTME: Bidirectional enumeration translators shared by the format adapters
// ABOUTME: Equipment, sport, sub-sport, pool-length unit and intensity literal mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

//! # Shared Taxonomy Mappers
//!
//! Small lookup tables between KRD enumerations and the literal strings of
//! each external format. Decoding is total: an unknown literal maps to the
//! enumeration's neutral value with a warning, never to an error. The one
//! exception is sport, where the caller picks the fallback from
//! `ConversionConfig::default_sport`.

/// Swim equipment literals
pub mod equipment;

/// Step intensity literals
pub mod intensity;

/// Pool length unit literals
pub mod pool_length;

/// Sport and sub-sport literals
pub mod sport;
