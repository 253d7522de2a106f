// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Error types for dropsync

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Local folder not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Failed to upload {file}: {reason}")]
    Upload { file: String, reason: String },

    #[error("Authorization failed: {0}")]
    Auth(String),

    #[error("Dropbox API error ({status}): {summary}")]
    Api { status: u16, summary: String },

    #[error("Rate limited by Dropbox, retry after {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },

    #[error("Missing app credential: set {0}")]
    MissingAppCredentials(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sync worker failed: {0}")]
    Worker(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SyncError {
    /// True for errors that a fresh `dropsync auth` would fix
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
