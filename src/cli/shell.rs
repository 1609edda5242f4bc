// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell command arguments.

use clap::Args;

/// Arguments for the `shell` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ShellArgs {
    /// Starts with an empty library, ignoring [[catalog.seed]] entries.
    #[arg(long = "no-seed")]
    pub no_seed: bool,
}
