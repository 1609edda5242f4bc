// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Version | Options | Inis | Shell | Fleet
//! ```

use std::process::ExitCode;

use depot_rs::cli::global::GlobalOptions;
use depot_rs::cli::{self, Command};
use depot_rs::cmd::config::{run_inis_command, run_options_command};
use depot_rs::cmd::fleet::run_fleet_command;
use depot_rs::cmd::shell::run_shell_command;
use depot_rs::config::Config;
use depot_rs::config::loader::ConfigLoader;
use depot_rs::logging::init_logging;
use depot_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::Info);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options(args)) => {
            load_config(&cli.global).and_then(|config| run_options_command(args, &config))
        }
        Some(Command::Inis) => build_config_loader(&cli.global).map(|loader| {
            run_inis_command(&loader.format_loaded_files());
        }),
        Some(Command::Shell(args)) => {
            load_config(&cli.global).and_then(|config| run_shell_command(args, &config))
        }
        Some(Command::Fleet(args)) => {
            load_config(&cli.global).and_then(|config| run_fleet_command(args, &config))
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> depot_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional("depot.toml");
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix("DEPOT");
    for spec in &global.to_config_overrides() {
        loader = loader.apply_override(spec)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> depot_rs::error::Result<Config> {
    build_config_loader(global)?.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
