// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for depot-rs.
//!
//! ```text
//! Config: GlobalSettings, FleetSettings, CatalogSettings
//! FleetSettings: region + [[fleet.vehicles]] kind/make/model
//! CatalogSettings: [[catalog.seed]] title/author/year
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::Book;
use crate::logging::LogLevel;
use crate::vehicle::{Region, VehicleKind};

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: None,
        }
    }
}

/// Fleet roll-out configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetSettings {
    /// Market region selecting the factory variant.
    pub region: Region,
    /// Vehicles to build on `depot fleet`.
    pub vehicles: Vec<FleetVehicle>,
}

impl Default for FleetSettings {
    fn default() -> Self {
        Self {
            region: Region::Us,
            vehicles: vec![
                FleetVehicle {
                    kind: VehicleKind::Car,
                    make: "Ford".to_string(),
                    model: "Mustang".to_string(),
                },
                FleetVehicle {
                    kind: VehicleKind::Motorcycle,
                    make: "Harley-Davidson".to_string(),
                    model: "Sportster".to_string(),
                },
            ],
        }
    }
}

/// One fleet entry: which factory operation to call and with what inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetVehicle {
    /// Vehicle kind (car or motorcycle).
    pub kind: VehicleKind,
    /// Manufacturer name.
    pub make: String,
    /// Model name.
    pub model: String,
}

impl std::fmt::Display for FleetVehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.kind, self.make, self.model)
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSettings {
    /// Books loaded into the shell's library on startup.
    ///
    /// Seeds are configuration, not persisted state: the library itself
    /// lives for the process only.
    pub seed: Vec<Book>,
}
