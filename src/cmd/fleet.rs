// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fleet command implementation for depot-rs.

use tracing::{info, warn};

use crate::cli::fleet::FleetArgs;
use crate::config::Config;
use crate::error::Result;
use crate::vehicle::Vehicle;

/// Main handler for the fleet command.
///
/// Selects the factory for the effective region, builds every configured
/// vehicle through it, and starts each engine.
///
/// # Errors
///
/// This function is currently infallible and always returns `Ok(())`.
pub fn run_fleet_command(args: &FleetArgs, config: &Config) -> Result<()> {
    let region = args.region.unwrap_or(config.fleet.region);
    let factory = region.factory();

    if config.fleet.vehicles.is_empty() {
        warn!("No vehicles configured, nothing to roll out");
        return Ok(());
    }

    info!(
        region = %region,
        count = config.fleet.vehicles.len(),
        "Rolling out fleet"
    );

    for entry in &config.fleet.vehicles {
        let vehicle = entry.kind.build(factory.as_ref(), &entry.make, &entry.model);
        vehicle.start_engine();
    }

    Ok(())
}
