// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set() / .apply_override()
//!        |
//!        v
//!    build() --> Config
//! ```
//!
//! Sources are collected first and only assembled in `build()`, so a loader
//! can be inspected (`loaded_files`) before anything is read from disk.
//! Later sources win; overrides win over everything but each other.

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, Result};

/// One pending configuration source.
enum Source {
    /// A TOML file. Missing optional files are skipped at build time.
    File { path: PathBuf, required: bool },
    /// Inline TOML content.
    Str(String),
    /// A single `key=value` override.
    Override { key: String, value: String },
}

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    sources: Vec<Source>,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
            env_prefix: None,
        }
    }

    /// Adds a required TOML configuration file.
    ///
    /// The file is read when `build()` is called; a missing file or invalid
    /// TOML makes `build()` fail.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources.push(Source::File {
            path: path.as_ref().to_path_buf(),
            required: true,
        });
        self
    }

    /// Adds an optional TOML configuration file. Missing files are skipped.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources.push(Source::File {
            path: path.as_ref().to_path_buf(),
            required: false,
        });
        self
    }

    /// Adds inline TOML content.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.sources.push(Source::Str(content.to_string()));
        self
    }

    /// Enables environment variables with the given prefix as a source,
    /// e.g. `DEPOT_FLEET__REGION=eu`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override using a dotted key, e.g.
    /// `fleet.region`. Applied after every file and environment source.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.sources.push(Source::Override {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Applies a `section/key=value` override from the command line.
    ///
    /// # Errors
    ///
    /// Returns an error if the specification is not of the form
    /// `section/key=value`.
    pub fn apply_override(self, spec: &str) -> Result<Self> {
        let Some((key, value)) = spec.split_once('=') else {
            return Err(ConfigError::BadOverride {
                spec: spec.to_string(),
            }
            .into());
        };
        Ok(self.set(key.replace('/', "."), value))
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - Environment variables cannot be parsed.
    /// - An override key is invalid.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        use config::{Environment, File, FileFormat};

        let mut builder = config::Config::builder();

        for source in &self.sources {
            builder = match source {
                Source::File { path, required } => builder.add_source(
                    File::from(path.as_path())
                        .format(FileFormat::Toml)
                        .required(*required),
                ),
                Source::Str(content) => {
                    builder.add_source(File::from_str(content, FileFormat::Toml))
                }
                Source::Override { key, value } => builder
                    .set_override(key.as_str(), value.as_str())
                    .map_err(|e| anyhow::anyhow!("Config error: {e}"))?,
            };
        }

        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let cfg = builder.build()?;
        let config: Config = cfg.try_deserialize()?;
        Ok(config)
    }

    /// The file and string sources this loader will read, in order.
    ///
    /// Optional files that do not exist are omitted.
    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.sources
            .iter()
            .filter_map(|source| match source {
                Source::File { path, required: true } => {
                    Some(("file".to_string(), path.clone()))
                }
                Source::File {
                    path,
                    required: false,
                } => path
                    .exists()
                    .then(|| ("optional".to_string(), path.clone())),
                Source::Str(_) => Some(("string".to_string(), PathBuf::from("<string>"))),
                Source::Override { .. } => None,
            })
            .collect()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.loaded_files()
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
