// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive catalog shell.
//!
//! # Command Loop
//!
//! ```text
//! Enter command (add, remove, show, filter, exit):
//!   add    --> title, author, year --> manager.add_book
//!   remove --> title               --> manager.remove_book
//!   show   --> manager.show_books
//!   filter --> year                --> manager.show_books_by_year
//!   exit   --> goodbye, leave loop
//!   other  --> invalid command notice
//! ```
//!
//! Input is trimmed and lowercased before dispatch. A year that does not
//! parse as an integer ends the loop with an error; there is no in-loop
//! recovery for it. End of input behaves like `exit` without the goodbye
//! line, so piped input terminates cleanly.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::catalog::{Catalog, CatalogManager, YearFilter};
use crate::error::{Result, ShellError};

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Add,
    Remove,
    Show,
    Filter,
    Exit,
}

impl ShellCommand {
    /// Parses a command line: trim, lowercase, match on the literal.
    ///
    /// Returns `None` for anything that is not one of the five commands.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "show" => Some(Self::Show),
            "filter" => Some(Self::Filter),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Runs the interactive loop until `exit` or end of input.
///
/// Generic over the streams so tests can drive it with in-memory buffers,
/// and over the store so any filterable `Catalog` implementor works.
///
/// # Errors
///
/// Returns an error if a stream operation fails, if input ends in the middle
/// of a prompt sequence, or if a year field is not an integer.
pub fn run_shell<R, W, C>(
    input: &mut R,
    output: &mut W,
    manager: &mut CatalogManager<C>,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: Catalog + YearFilter,
{
    loop {
        let Some(line) = prompt(input, output, "Enter command (add, remove, show, filter, exit): ")?
        else {
            return Ok(());
        };

        match ShellCommand::parse(&line) {
            Some(ShellCommand::Add) => {
                let title = prompt_required(input, output, "Enter book title: ")?;
                let author = prompt_required(input, output, "Enter book author: ")?;
                let year = parse_year(&prompt_required(input, output, "Enter book year: ")?)?;
                debug!(command = "add", title = %title, "dispatching");
                writeln!(output, "{}", manager.add_book(&title, &author, year))?;
            }
            Some(ShellCommand::Remove) => {
                let title = prompt_required(input, output, "Enter book title to remove: ")?;
                debug!(command = "remove", title = %title, "dispatching");
                writeln!(output, "{}", manager.remove_book(&title))?;
            }
            Some(ShellCommand::Show) => {
                for line in manager.show_books() {
                    writeln!(output, "{line}")?;
                }
            }
            Some(ShellCommand::Filter) => {
                let year = parse_year(&prompt_required(input, output, "Enter year to filter by: ")?)?;
                for line in manager.show_books_by_year(year) {
                    writeln!(output, "{line}")?;
                }
            }
            Some(ShellCommand::Exit) => {
                writeln!(output, "Exiting the program. Goodbye!")?;
                return Ok(());
            }
            None => {
                writeln!(output, "Invalid command. Please try again.")?;
            }
        }
    }
}

/// Writes a prompt and reads one trimmed line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like [`prompt`], but end of input mid-sequence is an error.
fn prompt_required<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<String> {
    prompt(input, output, text)?.ok_or_else(|| anyhow::Error::from(ShellError::UnexpectedEof))
}

/// Parses the year field. The only conversion that can fail in the shell.
fn parse_year(input: &str) -> Result<i32> {
    input.parse().map_err(|_| {
        anyhow::Error::from(ShellError::InvalidYear {
            input: input.to_string(),
        })
    })
}
