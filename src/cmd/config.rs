// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options and inis command implementations for depot-rs.

use crate::cli::OptionsArgs;
use crate::config::Config;
use crate::error::Result;

/// Main handler for the options command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized to JSON.
pub fn run_options_command(args: &OptionsArgs, config: &Config) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    for line in config.format_options() {
        println!("{line}");
    }
    Ok(())
}

/// Main handler for the inis command.
pub fn run_inis_command(loaded_files: &[String]) {
    if loaded_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in loaded_files {
            println!("{line}");
        }
    }
}
