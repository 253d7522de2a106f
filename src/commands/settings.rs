// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Settings commands

use anyhow::Result;
use colored::*;
use std::path::{Path, PathBuf};

use crate::colors::{Status, StyledText};
use crate::config::{validate_interval, Settings};

/// Print saved settings (the token itself is never shown)
pub fn show_settings(config_path: &Path) -> Result<()> {
    let settings = Settings::load_from(config_path)?;

    println!("{}", "dropsync settings".bold());
    println!();
    println!(
        "  Local folder:   {}",
        settings
            .local_folder
            .as_ref()
            .map(|p| p.display().to_string().path())
            .unwrap_or_else(|| "(not set)".yellow())
    );
    println!("  Dropbox folder: {}", settings.dropbox_folder.path());
    println!("  Interval:       {}s", settings.interval_secs);
    println!(
        "  Authorized:     {}",
        if settings.is_authorized() {
            "Yes".green()
        } else {
            "No".red()
        }
    );
    if let Some(account_id) = &settings.account_id {
        println!("  Account:        {}", account_id.dim());
    }
    println!();
    println!("  File: {}", config_path.display());

    Ok(())
}

/// Update saved settings; only the given fields change
pub fn set_settings(
    config_path: &Path,
    local_folder: Option<PathBuf>,
    dropbox_folder: Option<String>,
    interval: Option<u64>,
) -> Result<()> {
    if local_folder.is_none() && dropbox_folder.is_none() && interval.is_none() {
        eprintln!(
            "{} Nothing to change. Use --local-folder, --dropbox-folder or --interval.",
            Status::warn()
        );
        return Ok(());
    }

    let mut settings = Settings::load_from(config_path)?;

    if let Some(folder) = local_folder {
        if !folder.is_dir() {
            eprintln!(
                "{} {} does not exist yet; passes will fail until it does",
                Status::warn(),
                folder.display()
            );
        }
        settings.local_folder = Some(folder);
    }

    if let Some(folder) = dropbox_folder {
        settings.dropbox_folder = if folder.trim().is_empty() {
            "/".to_string()
        } else {
            folder
        };
    }

    if let Some(secs) = interval {
        validate_interval(secs)?;
        settings.interval_secs = secs;
    }

    settings.save_to(config_path)?;
    println!("{} Settings saved", Status::ok());
    Ok(())
}

/// Forget the access token
pub fn logout(config_path: &Path) -> Result<()> {
    let mut settings = Settings::load_from(config_path)?;
    if !settings.is_authorized() {
        println!("{} Not authorized", Status::info());
        return Ok(());
    }

    settings.logout();
    settings.save_to(config_path)?;
    println!("{} Access token removed", Status::ok());
    Ok(())
}

pub fn show_settings_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}
