// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations and layered
//! file sources.

use std::io::Write;

use depot_rs::config::Config;
use depot_rs::logging::LogLevel;
use depot_rs::vehicle::{Region, VehicleKind};

fn write_toml(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_minimal() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.fleet.region, Region::Us);
    assert!(config.catalog.seed.is_empty());
}

#[test]
fn config_parse_global_section() {
    let toml = r#"
[global]
output_log_level = 5
file_log_level = 2
log_file = "out/depot.log"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::Trace);
    assert_eq!(config.global.file_log_level, LogLevel::Warn);
    assert_eq!(
        config.global.log_file.as_deref(),
        Some(std::path::Path::new("out/depot.log"))
    );
}

#[test]
fn config_parse_full_document() {
    let toml = r#"
[global]
output_log_level = 4

[fleet]
region = "eu"

[[fleet.vehicles]]
kind = "motorcycle"
make = "BMW"
model = "R1250"

[[catalog.seed]]
title = "Dune"
author = "Herbert"
year = 1965

[[catalog.seed]]
title = "1984"
author = "Orwell"
year = 1949
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.fleet.region, Region::Eu);
    assert_eq!(config.fleet.vehicles.len(), 1);
    assert_eq!(config.fleet.vehicles[0].kind, VehicleKind::Motorcycle);
    assert_eq!(config.catalog.seed.len(), 2);
    assert_eq!(config.catalog.seed[1].title, "1984");
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_from_file() {
    let file = write_toml("[fleet]\nregion = \"eu\"\n");
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.fleet.region, Region::Eu);
}

#[test]
fn config_missing_required_file_fails() {
    let result = Config::from_file("/nonexistent/depot.toml");
    assert!(result.is_err());
}

#[test]
fn config_missing_optional_file_is_fine() {
    let config = Config::builder()
        .add_toml_file_optional("/nonexistent/depot.toml")
        .build()
        .unwrap();
    assert_eq!(config.fleet.region, Region::Us);
}

#[test]
fn config_later_file_overrides_earlier() {
    let base = write_toml("[fleet]\nregion = \"us\"\n\n[global]\noutput_log_level = 4\n");
    let over = write_toml("[fleet]\nregion = \"eu\"\n");

    let config = Config::builder()
        .add_toml_file(base.path())
        .add_toml_file(over.path())
        .build()
        .unwrap();

    // The override file wins on region but the base log level survives.
    assert_eq!(config.fleet.region, Region::Eu);
    assert_eq!(config.global.output_log_level, LogLevel::Debug);
}

#[test]
fn config_cli_override_beats_files() {
    let base = write_toml("[fleet]\nregion = \"us\"\n");

    let config = Config::builder()
        .add_toml_file(base.path())
        .apply_override("fleet/region=eu")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.fleet.region, Region::Eu);
}

#[test]
fn config_invalid_toml_fails() {
    let file = write_toml("[fleet\nregion = ");
    let result = Config::from_file(file.path());
    assert!(result.is_err());
}

#[test]
fn config_loaded_files_tracks_sources() {
    let base = write_toml("");
    let loader = Config::builder()
        .add_toml_file(base.path())
        .add_toml_file_optional("/nonexistent/depot.toml");

    // Only the existing file is reported.
    assert_eq!(loader.loaded_files().len(), 1);
}
