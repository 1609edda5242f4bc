// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Vehicle model.
//!
//! # Architecture
//!
//! ```text
//! VehicleFactory (trait)
//!   UsVehicleFactory --- "US Spec"
//!   EuVehicleFactory --- "EU Spec"
//!        |
//!        v  create_car / create_motorcycle
//!   Box<dyn Vehicle>
//!   Car        --> "Engine started"
//!   Motorcycle --> "Motor started"
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Vehicle`] | Capability: identify a vehicle and start its engine |
//! | [`Car`], [`Motorcycle`] | Variants differing only in the status phrase |
//! | [`VehicleFactory`] | Capability: produce vehicles with a fixed region tag |
//! | [`Region`] | Market region selecting the factory variant |
//! | [`VehicleKind`] | Which factory operation to use for a fleet entry |
//!
//! `start_engine` is side-effect-only: it emits one notification line and
//! never mutates the vehicle, so it can be called any number of times with
//! identical effect. The region tag is fixed at construction.

pub mod factory;

pub use factory::{EuVehicleFactory, Region, UsVehicleFactory, VehicleFactory};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

/// Capability: a vehicle that can report itself and start its engine.
///
/// Variants only supply identity and a status phrase; the notification
/// format and the engine-start emission are shared provided methods.
pub trait Vehicle {
    /// Manufacturer name, echoed verbatim into notifications.
    fn make(&self) -> &str;

    /// Model name, echoed verbatim into notifications.
    fn model(&self) -> &str;

    /// Region tag this vehicle was manufactured for (e.g. "US Spec").
    fn region_spec(&self) -> &str;

    /// Variant-specific status phrase emitted on engine start.
    fn status_phrase(&self) -> &'static str;

    /// Formatted notification line for an engine start.
    fn notification(&self) -> String {
        format!(
            "{} {} ({}): {}",
            self.make(),
            self.model(),
            self.region_spec(),
            self.status_phrase()
        )
    }

    /// Starts the engine by emitting the notification.
    ///
    /// Never fails and never mutates state.
    fn start_engine(&self) {
        info!("{}", self.notification());
    }
}

/// A car. Engine starts report "Engine started".
#[derive(Debug, Clone)]
pub struct Car {
    make: String,
    model: String,
    region_spec: String,
}

impl Car {
    /// Creates a car. The region tag is fixed for the car's lifetime.
    #[must_use]
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        region_spec: impl Into<String>,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            region_spec: region_spec.into(),
        }
    }
}

impl Vehicle for Car {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn region_spec(&self) -> &str {
        &self.region_spec
    }

    fn status_phrase(&self) -> &'static str {
        "Engine started"
    }
}

/// A motorcycle. Engine starts report "Motor started".
#[derive(Debug, Clone)]
pub struct Motorcycle {
    make: String,
    model: String,
    region_spec: String,
}

impl Motorcycle {
    /// Creates a motorcycle. The region tag is fixed for the motorcycle's lifetime.
    #[must_use]
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        region_spec: impl Into<String>,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            region_spec: region_spec.into(),
        }
    }
}

impl Vehicle for Motorcycle {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn region_spec(&self) -> &str {
        &self.region_spec
    }

    fn status_phrase(&self) -> &'static str {
        "Motor started"
    }
}

/// Which factory operation produces a fleet entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Motorcycle,
}

impl VehicleKind {
    /// Builds a vehicle of this kind through the given factory.
    #[must_use]
    pub fn build(self, factory: &dyn VehicleFactory, make: &str, model: &str) -> Box<dyn Vehicle> {
        match self {
            Self::Car => factory.create_car(make, model),
            Self::Motorcycle => factory.create_motorcycle(make, model),
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
            Self::Motorcycle => write!(f, "motorcycle"),
        }
    }
}

impl std::str::FromStr for VehicleKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            _ => Err(ConfigError::InvalidValue {
                section: "fleet".to_string(),
                key: "kind".to_string(),
                message: format!("expected 'car' or 'motorcycle', got '{s}'"),
            }),
        }
    }
}
