// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! dropsync - Main entry point
//!
//! A CLI tool that uploads new files from a local folder to Dropbox.

use anyhow::Result;
use clap::Parser;
use dropsync::cli::{Cli, Commands, ConfigCommands};
use dropsync::commands;
use dropsync::config::{AppCredentials, Settings, APP_KEY_ENV};
use dropsync::error::SyncError;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Commands that talk to Dropbox cannot start without the app credentials
    let credentials = if cli.command.uses_dropbox() {
        Some(AppCredentials::new(cli.app_key.clone(), cli.app_secret.clone())?)
    } else {
        None
    };

    let config_path = match cli.config {
        Some(path) => path,
        None => Settings::default_path()?,
    };
    log::debug!("Using settings file {}", config_path.display());

    match cli.command {
        Commands::Auth { code } => {
            let credentials =
                credentials.ok_or(SyncError::MissingAppCredentials(APP_KEY_ENV))?;
            commands::authorize(&config_path, &credentials, code.as_deref())
        }

        Commands::Whoami => commands::whoami(&config_path),

        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::show_settings(&config_path),
            ConfigCommands::Set {
                local_folder,
                dropbox_folder,
                interval,
            } => commands::set_settings(&config_path, local_folder, dropbox_folder, interval),
            ConfigCommands::Logout => commands::logout(&config_path),
            ConfigCommands::Path => commands::show_settings_path(&config_path),
        },

        Commands::Sync { target } => commands::sync_once(&config_path, &target),

        Commands::Watch {
            target,
            interval,
            max_passes,
        } => commands::watch_folder(&config_path, &target, interval, max_passes),
    }
}
