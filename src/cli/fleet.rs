// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fleet command arguments.

use clap::Args;

use crate::vehicle::Region;

/// Arguments for the `fleet` command.
#[derive(Debug, Clone, Default, Args)]
pub struct FleetArgs {
    /// Market region to build for, overrides fleet.region from the INIs.
    #[arg(short = 'r', long = "region", value_name = "REGION")]
    pub region: Option<Region>,
}
