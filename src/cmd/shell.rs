// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell command implementation for depot-rs.

use tracing::debug;

use crate::catalog::{Catalog, CatalogManager, FilterableLibrary};
use crate::cli::shell::ShellArgs;
use crate::config::Config;
use crate::error::Result;
use crate::shell::run_shell;

/// Main handler for the shell command.
///
/// Builds the library, seeds it from configuration unless `--no-seed`, and
/// runs the interactive loop over stdin/stdout.
///
/// # Errors
///
/// Returns an error if a stream operation fails or if a year field is not an
/// integer. The year error has no in-loop recovery; main renders it once.
pub fn run_shell_command(args: &ShellArgs, config: &Config) -> Result<()> {
    let mut library = FilterableLibrary::new();

    if !args.no_seed {
        for book in &config.catalog.seed {
            library.add_book(book.clone());
        }
        debug!(count = config.catalog.seed.len(), "library seeded");
    }

    let mut manager = CatalogManager::new(library);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_shell(&mut stdin.lock(), &mut stdout.lock(), &mut manager)
}
