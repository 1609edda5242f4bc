// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for depot-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local depot.toml (cwd)
//! 3. --ini files (in order)
//! 4. DEPOT_* env vars
//! 5. --set CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! DEPOT_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! DEPOT_FLEET__REGION=eu            → fleet.region = "eu"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{CatalogSettings, FleetSettings, GlobalSettings};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalSettings,
    /// Fleet roll-out options.
    pub fleet: FleetSettings,
    /// Catalog options.
    pub catalog: CatalogSettings,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use depot_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("depot.toml")
    ///     .with_env_prefix("DEPOT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options. Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_fleet_options(&mut options);
        self.format_catalog_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_fleet_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("fleet.region".into(), self.fleet.region.to_string());
        for (i, vehicle) in self.fleet.vehicles.iter().enumerate() {
            options.insert(format!("fleet.vehicles.{i}"), vehicle.to_string());
        }
    }

    fn format_catalog_options(&self, options: &mut BTreeMap<String, String>) {
        for (i, book) in self.catalog.seed.iter().enumerate() {
            options.insert(format!("catalog.seed.{i}"), book.to_string());
        }
    }
}
