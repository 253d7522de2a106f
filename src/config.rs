// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! App credentials and saved settings

use crate::error::{Result, SyncError};
use crate::sync::DEFAULT_REMOTE_FOLDER;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_KEY_ENV: &str = "DROPBOX_APP_KEY";
pub const APP_SECRET_ENV: &str = "DROPBOX_APP_SECRET";
pub const CONFIG_PATH_ENV: &str = "DROPSYNC_CONFIG";

/// Dropbox app key and secret, required by every command that talks to Dropbox
#[derive(Debug, Clone)]
pub struct AppCredentials {
    pub app_key: String,
    pub app_secret: String,
}

impl AppCredentials {
    pub fn new(app_key: Option<String>, app_secret: Option<String>) -> Result<Self> {
        let app_key = non_empty(app_key).ok_or(SyncError::MissingAppCredentials(APP_KEY_ENV))?;
        let app_secret =
            non_empty(app_secret).ok_or(SyncError::MissingAppCredentials(APP_SECRET_ENV))?;
        Ok(Self {
            app_key,
            app_secret,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn default_dropbox_folder() -> String {
    DEFAULT_REMOTE_FOLDER.to_string()
}

fn default_interval_secs() -> u64 {
    60
}

/// Settings kept between runs
///
/// The uploaded-file record is not saved: it lives only as long as one
/// `sync` or `watch` process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// OAuth2 access token
    #[serde(default)]
    pub access_token: Option<String>,

    /// Account the token belongs to
    #[serde(default)]
    pub account_id: Option<String>,

    /// Folder to watch
    #[serde(default)]
    pub local_folder: Option<PathBuf>,

    /// Destination folder in Dropbox
    #[serde(default = "default_dropbox_folder")]
    pub dropbox_folder: String,

    /// Seconds between passes in `watch`
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            access_token: None,
            account_id: None,
            local_folder: None,
            dropbox_folder: default_dropbox_folder(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl Settings {
    /// Default settings file location
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SyncError::Config("Could not find config directory".to_string()))?;
        Ok(config_dir.join("dropsync").join("config.json"))
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            SyncError::Config(format!("Invalid settings file {}: {}", path.display(), e))
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // The file holds the access token
        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            options.mode(0o600);
            let mut file = options.open(path)?;
            // An existing file keeps its old mode on open
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
            file.write_all(content.as_bytes())?;
        }
        #[cfg(not(unix))]
        options.open(path)?.write_all(content.as_bytes())?;

        Ok(())
    }

    pub fn is_authorized(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    /// Token or an error telling the user to authorize
    pub fn require_token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                SyncError::Auth("Not authorized. Run 'dropsync auth' first.".to_string())
            })
    }

    pub fn require_local_folder(&self) -> Result<&Path> {
        self.local_folder
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                SyncError::Config(
                    "No local folder set. Use --local-folder or 'dropsync config set --local-folder'."
                        .to_string(),
                )
            })
    }

    pub fn interval(&self) -> Result<Duration> {
        validate_interval(self.interval_secs)
    }

    /// Forget the token and account
    pub fn logout(&mut self) {
        self.access_token = None;
        self.account_id = None;
    }
}

pub fn validate_interval(secs: u64) -> Result<Duration> {
    if secs == 0 {
        return Err(SyncError::Config(
            "Interval must be at least 1 second".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}
