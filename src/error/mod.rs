// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            DepotError (~24 bytes)
//!                   |
//!        +----------+----------+--------+
//!        |          |          |        |
//!        v          v          v        v
//!      Bail       Config     Shell   Io/Other
//!                  Box        Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config  InvalidValue, BadOverride
//!   Shell   InvalidYear, UnexpectedEof
//!
//! All variants boxed => DepotError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DepotError`].
pub type DepotResult<T> = std::result::Result<T, DepotError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum DepotError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Interactive shell error.
    #[error("shell error: {0}")]
    Shell(#[from] Box<ShellError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`DepotError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> DepotError {
    DepotError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DepotError {
                fn from(err: $error) -> Self {
                    DepotError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ShellError => Shell,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Malformed `--set` override specification.
    #[error("invalid override '{spec}', expected 'section/key=value'")]
    BadOverride { spec: String },
}

// --- Shell Errors ---

/// Interactive shell errors.
///
/// The shell layer has exactly one conversion failure: a year field that is
/// not an integer. It propagates out of the loop and ends the command.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Year input could not be parsed as an integer.
    #[error("invalid year '{input}': not an integer")]
    InvalidYear { input: String },

    /// Input stream ended in the middle of a prompt sequence.
    #[error("unexpected end of input")]
    UnexpectedEof,
}

#[cfg(test)]
mod tests;
