// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use crate::logging::LogLevel;
use crate::vehicle::{Region, VehicleKind};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.global.output_log_level, LogLevel::Info);
    assert_eq!(config.global.file_log_level, LogLevel::Trace);
    assert!(config.global.log_file.is_none());
    assert_eq!(config.fleet.region, Region::Us);
    assert_eq!(config.fleet.vehicles.len(), 2);
    assert!(config.catalog.seed.is_empty());
}

#[test]
fn test_parse_empty_string_gives_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.fleet.region, Region::Us);
}

#[test]
fn test_parse_fleet_section() {
    let config = Config::parse(
        r#"
        [fleet]
        region = "eu"

        [[fleet.vehicles]]
        kind = "car"
        make = "Volkswagen"
        model = "Golf"

        [[fleet.vehicles]]
        kind = "motorcycle"
        make = "BMW"
        model = "R1250"
        "#,
    )
    .unwrap();

    assert_eq!(config.fleet.region, Region::Eu);
    assert_eq!(config.fleet.vehicles.len(), 2);
    assert_eq!(config.fleet.vehicles[0].kind, VehicleKind::Car);
    assert_eq!(config.fleet.vehicles[0].make, "Volkswagen");
    assert_eq!(config.fleet.vehicles[1].kind, VehicleKind::Motorcycle);
}

#[test]
fn test_parse_catalog_seed() {
    let config = Config::parse(
        r#"
        [[catalog.seed]]
        title = "Dune"
        author = "Herbert"
        year = 1965
        "#,
    )
    .unwrap();

    assert_eq!(config.catalog.seed.len(), 1);
    assert_eq!(config.catalog.seed[0].title, "Dune");
    assert_eq!(config.catalog.seed[0].year, 1965);
}

#[test]
fn test_parse_global_section() {
    let config = Config::parse(
        r#"
        [global]
        output_log_level = 4
        log_file = "depot.log"
        "#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::Debug);
    assert_eq!(
        config.global.log_file.as_deref(),
        Some(std::path::Path::new("depot.log"))
    );
}

#[test]
fn test_unknown_top_level_key_rejected() {
    let result = Config::parse("[garage]\ndoors = 2\n");
    assert!(result.is_err());
}

#[test]
fn test_invalid_region_rejected() {
    let result = Config::parse("[fleet]\nregion = \"asia\"\n");
    assert!(result.is_err());
}

#[test]
fn test_out_of_range_log_level_rejected() {
    let result = Config::parse("[global]\noutput_log_level = 9\n");
    assert!(result.is_err());
}

#[test]
fn test_apply_override() {
    let config = Config::builder()
        .apply_override("fleet/region=eu")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.fleet.region, Region::Eu);
}

#[test]
fn test_apply_override_malformed() {
    let result = Config::builder().apply_override("fleet/region");
    assert!(result.is_err());
}

#[test]
fn test_override_wins_over_string_source() {
    let config = Config::builder()
        .add_toml_str("[fleet]\nregion = \"us\"\n")
        .apply_override("fleet/region=eu")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.fleet.region, Region::Eu);
}

#[test]
fn test_format_options_is_aligned_and_sorted() {
    let config = Config::default();
    let options = config.format_options();

    // BTreeMap ordering: fleet keys sort before global keys
    assert!(options[0].starts_with("fleet.region"));
    assert!(options.iter().any(|l| l.contains("= us")));
    assert!(
        options
            .iter()
            .any(|l| l.starts_with("global.output_log_level") && l.ends_with("= 3"))
    );
}

#[test]
fn test_format_loaded_files() {
    let loader = Config::builder().add_toml_str("");
    let lines = loader.format_loaded_files();
    assert_eq!(lines, ["1. [string] <string>"]);
}
