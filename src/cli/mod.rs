// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for depot-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! depot [global options] <command>
//! version
//! options [--json]
//! inis
//! shell [--no-seed]
//! fleet [--region us|eu]
//! ```

pub mod fleet;
pub mod global;
pub mod shell;


use crate::cli::fleet::FleetArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::shell::ShellArgs;
use clap::{Args, Parser, Subcommand};

/// Catalog and Fleet Desk Tool
///
/// A small desk tool keeping an in-memory book catalog and rolling out
/// regional vehicle fleets.
#[derive(Debug, Parser)]
#[command(
    name = "depot",
    author,
    version,
    about = "Catalog and Fleet Desk Tool",
    long_about = "depot-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Keeps an in-memory book catalog behind an interactive shell\n\
                  and rolls out vehicle fleets through regional factories. See\n\
                  `depot <command> --help` for more information about a command.",
    after_help = "INI FILES:\n\n\
                  By default, depot will look for a `depot.toml` in the current\n\
                  directory. Additional INIs can be specified with --ini, those\n\
                  will be loaded after the default one and override it. Use\n\
                  --no-default-inis to disable auto detection and only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the INIs.
    Options(OptionsArgs),

    /// Lists the INIs used by depot.
    Inis,

    /// Runs the interactive catalog shell.
    Shell(ShellArgs),

    /// Builds the configured fleet and starts every engine.
    Fleet(FleetArgs),
}

/// Arguments for the `options` command.
#[derive(Debug, Clone, Default, Args)]
pub struct OptionsArgs {
    /// Prints the effective configuration as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
