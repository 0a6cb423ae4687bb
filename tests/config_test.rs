// ABOUTME: Integration tests for environment-driven conversion and logging configuration
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KRD Converter Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use krd_convert::config::{Clock, ConversionConfig, FixedClock, SystemClock};
use krd_convert::constants::env_config;
use krd_convert::logging::{LogFormat, LoggingConfig};
use krd_convert::models::Sport;
use serial_test::serial;

fn clear_conversion_env() {
    env::remove_var(env_config::DEFAULT_MANUFACTURER);
    env::remove_var(env_config::DEFAULT_SPORT);
    env::remove_var(env_config::NOTES_MAX_LENGTH);
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_conversion_env();
    let config = ConversionConfig::from_env();
    assert_eq!(config, ConversionConfig::default());
    assert_eq!(config.default_manufacturer, "development");
    assert_eq!(config.default_sport, Sport::Generic);
    assert_eq!(config.notes_max_length, 256);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_conversion_env();
    env::set_var(env_config::DEFAULT_MANUFACTURER, "garmin");
    env::set_var(env_config::DEFAULT_SPORT, "Running");
    env::set_var(env_config::NOTES_MAX_LENGTH, "100");

    let config = ConversionConfig::from_env();
    clear_conversion_env();

    assert_eq!(config.default_manufacturer, "garmin");
    assert_eq!(config.default_sport, Sport::Running);
    assert_eq!(config.notes_max_length, 100);
}

#[test]
#[serial]
fn test_invalid_overrides_are_ignored() {
    clear_conversion_env();
    env::set_var(env_config::DEFAULT_MANUFACTURER, "  ");
    env::set_var(env_config::DEFAULT_SPORT, "rowing");
    env::set_var(env_config::NOTES_MAX_LENGTH, "1000");

    let config = ConversionConfig::from_env();
    clear_conversion_env();

    assert_eq!(config, ConversionConfig::default());
}

#[test]
#[serial]
fn test_logging_format_from_environment() {
    env::set_var("LOG_FORMAT", "json");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    assert_eq!(config.format, LogFormat::Json);

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "krd-convert");
}

#[test]
fn test_clocks() {
    let instant = chrono::DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    assert_eq!(FixedClock(instant).now(), instant);

    let before = chrono::Utc::now();
    let now = SystemClock.now();
    assert!(now >= before);
}
