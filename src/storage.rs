// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Remote storage backends
//!
//! The reconciler only needs one thing from a backend: put these bytes at
//! this path, replacing whatever is there. Dropbox is the real backend; the
//! local mirror writes into a directory instead (network drives, dry runs).

use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Metadata of a file after a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub path_display: String,
    pub size: u64,
}

/// A destination the reconciler can upload to
pub trait RemoteStorage: Send + Sync {
    /// Human-readable backend name
    fn name(&self) -> &'static str;

    /// Upload `contents` to `remote_path`, overwriting an existing file
    fn upload(&self, contents: Vec<u8>, remote_path: &str) -> Result<UploadedFile>;
}

// =============================================================================
// Local Mirror
// =============================================================================

/// Directory-backed storage; remote paths are resolved under `root`
pub struct LocalMirrorStorage {
    root: PathBuf,
}

impl LocalMirrorStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, remote_path: &str) -> Result<PathBuf> {
        let relative = Path::new(remote_path.trim_start_matches('/'));
        if relative.as_os_str().is_empty() {
            return Err(SyncError::Config(format!(
                "Remote path has no file name: {remote_path}"
            )));
        }
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(SyncError::Config(format!(
                "Remote path escapes the mirror: {remote_path}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

impl RemoteStorage for LocalMirrorStorage {
    fn name(&self) -> &'static str {
        "Local Mirror"
    }

    fn upload(&self, contents: Vec<u8>, remote_path: &str) -> Result<UploadedFile> {
        let target = self.resolve(remote_path)?;
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let size = contents.len() as u64;
        std::fs::write(&target, contents)?;

        log::debug!("Mirrored {} bytes to {}", size, target.display());

        Ok(UploadedFile {
            name: target
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            path_display: remote_path.to_string(),
            size,
        })
    }
}
