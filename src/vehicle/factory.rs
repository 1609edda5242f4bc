// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Regional vehicle factories.
//!
//! ```text
//! Region::Us.factory() --> UsVehicleFactory --> vehicles tagged "US Spec"
//! Region::Eu.factory() --> EuVehicleFactory --> vehicles tagged "EU Spec"
//! ```
//!
//! Factories are stateless: creating a vehicle has no side effect beyond the
//! allocation, and identical inputs produce identical vehicles (except for
//! object identity). Supporting a new market means adding a factory variant,
//! not modifying an existing one.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{Car, Motorcycle, Vehicle};
use crate::error::ConfigError;

/// Market region a vehicle is manufactured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Us,
    Eu,
}

impl Region {
    /// The region tag injected into every vehicle from this region.
    #[must_use]
    pub const fn spec_label(self) -> &'static str {
        match self {
            Self::Us => "US Spec",
            Self::Eu => "EU Spec",
        }
    }

    /// Returns the factory variant for this region.
    #[must_use]
    pub fn factory(self) -> Box<dyn VehicleFactory> {
        match self {
            Self::Us => Box::new(UsVehicleFactory),
            Self::Eu => Box::new(EuVehicleFactory),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Us => write!(f, "us"),
            Self::Eu => write!(f, "eu"),
        }
    }
}

impl std::str::FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            _ => Err(ConfigError::InvalidValue {
                section: "fleet".to_string(),
                key: "region".to_string(),
                message: format!("expected 'us' or 'eu', got '{s}'"),
            }),
        }
    }
}

/// Capability: produce vehicles carrying a fixed region tag.
pub trait VehicleFactory {
    /// The region this factory produces for.
    fn region(&self) -> Region;

    /// Creates a car tagged with this factory's region.
    fn create_car(&self, make: &str, model: &str) -> Box<dyn Vehicle>;

    /// Creates a motorcycle tagged with this factory's region.
    fn create_motorcycle(&self, make: &str, model: &str) -> Box<dyn Vehicle>;
}

/// Factory producing vehicles with US specifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsVehicleFactory;

impl VehicleFactory for UsVehicleFactory {
    fn region(&self) -> Region {
        Region::Us
    }

    fn create_car(&self, make: &str, model: &str) -> Box<dyn Vehicle> {
        Box::new(Car::new(make, model, Region::Us.spec_label()))
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Box<dyn Vehicle> {
        Box::new(Motorcycle::new(make, model, Region::Us.spec_label()))
    }
}

/// Factory producing vehicles with EU specifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuVehicleFactory;

impl VehicleFactory for EuVehicleFactory {
    fn region(&self) -> Region {
        Region::Eu
    }

    fn create_car(&self, make: &str, model: &str) -> Box<dyn Vehicle> {
        Box::new(Car::new(make, model, Region::Eu.spec_label()))
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Box<dyn Vehicle> {
        Box::new(Motorcycle::new(make, model, Region::Eu.spec_label()))
    }
}
