// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_new_valid() {
    for level in 0..=5 {
        let result = LogLevel::new(level);
        assert!(result.is_ok(), "level {level} should be valid");
        assert_eq!(result.unwrap().as_u8(), level);
    }
}

#[test]
fn test_log_level_new_out_of_range() {
    let err = LogLevel::new(6).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-5, got 6"
    );
}

#[test]
fn test_log_level_from_u8() {
    assert_eq!(LogLevel::from_u8(3), Some(LogLevel::Info));
    assert_eq!(LogLevel::from_u8(200), None);
}

#[test]
fn test_log_level_filter_directives() {
    let directives: Vec<_> = (0..=5)
        .map(|l| LogLevel::from_u8(l).unwrap().as_filter_str())
        .collect();
    assert_eq!(directives, ["off", "error", "warn", "info", "debug", "trace"]);
}

#[test]
fn test_log_level_default_is_info() {
    assert_eq!(LogLevel::default(), LogLevel::Info);
}

#[test]
fn test_log_level_ordering() {
    assert!(LogLevel::Silent < LogLevel::Error);
    assert!(LogLevel::Info < LogLevel::Trace);
}

#[test]
fn test_log_level_serde_round_trip() {
    let json = serde_json::to_string(&LogLevel::Debug).unwrap();
    assert_eq!(json, "4");
    let level: LogLevel = serde_json::from_str(&json).unwrap();
    assert_eq!(level, LogLevel::Debug);
}

#[test]
fn test_log_level_serde_rejects_out_of_range() {
    let result: Result<LogLevel, _> = serde_json::from_str("9");
    assert!(result.is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::Info);
    assert_eq!(config.file_level(), LogLevel::Trace);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::Warn)
        .with_file_level(LogLevel::Debug)
        .with_log_file("depot.log".to_string())
        .with_show_target(true)
        .build();

    assert_eq!(config.console_level(), LogLevel::Warn);
    assert_eq!(config.file_level(), LogLevel::Debug);
    assert_eq!(config.log_file(), Some("depot.log"));
    assert!(config.show_target());
}
