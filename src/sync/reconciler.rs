// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Reconciliation pass
//!
//! One pass lists the local folder, subtracts the names already uploaded in
//! this session and uploads the rest. A failed file stays out of the
//! uploaded set and is picked up again by the next pass. Content changes of
//! an already uploaded file are not detected: names are the only key.

use super::session::SyncSession;
use super::types::{FileResult, PassReport};
use crate::error::{Result, SyncError};
use crate::storage::{RemoteStorage, UploadedFile};
use chrono::Utc;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Largest file Dropbox accepts in a single upload request
pub const MAX_UPLOAD_BYTES: u64 = 150 * 1024 * 1024;

/// List the regular files directly inside `directory` (symlinks followed)
pub fn list_local_files(directory: &Path) -> Result<BTreeSet<String>> {
    if !directory.is_dir() {
        return Err(SyncError::DirectoryNotFound(directory.to_path_buf()));
    }

    let mut files = BTreeSet::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(match e.into_io_error() {
                    Some(io) => SyncError::IoError(io),
                    None => SyncError::DirectoryNotFound(directory.to_path_buf()),
                });
            }
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", directory.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => {
                files.insert(name.to_string());
            }
            None => log::warn!(
                "Skipping file with a non UTF-8 name: {}",
                entry.path().display()
            ),
        }
    }

    Ok(files)
}

/// Join a remote folder and a file name into a Dropbox-style path
///
/// Backslashes become forward slashes, the result always starts with `/`
/// and never contains a doubled separator at the join.
pub fn remote_path(remote_folder: &str, file_name: &str) -> String {
    let folder = remote_folder.replace('\\', "/");
    let folder = folder.trim_end_matches('/');
    let name = file_name.replace('\\', "/");
    let name = name.trim_start_matches('/');

    if folder.is_empty() {
        format!("/{}", name)
    } else if folder.starts_with('/') {
        format!("{}/{}", folder, name)
    } else {
        format!("/{}/{}", folder, name)
    }
}

/// Run one reconciliation pass, extending the session's uploaded set in place
pub fn reconcile(session: &mut SyncSession, storage: &dyn RemoteStorage) -> PassReport {
    let started_at = Utc::now();
    let directory = session.local_folder().to_path_buf();

    let current = match list_local_files(&directory) {
        Ok(files) => files,
        Err(e) => {
            log::warn!("Pass aborted: {}", e);
            return PassReport::aborted(started_at, e);
        }
    };

    let new_files: Vec<String> = current
        .into_iter()
        .filter(|name| !session.is_uploaded(name))
        .collect();

    log::debug!(
        "{} new file(s) in {}",
        new_files.len(),
        directory.display()
    );

    let mut results = Vec::with_capacity(new_files.len());

    for file_name in new_files {
        let target = remote_path(session.remote_folder(), &file_name);

        match upload_file(&directory.join(&file_name), &file_name, &target, storage) {
            Ok(uploaded) => {
                log::info!("Uploaded file {} to {}", file_name, target);
                session.record_uploaded(&file_name);
                results.push(FileResult::uploaded(&file_name, target, uploaded.size));
            }
            Err(e) => {
                log::warn!("Failed to upload {}: {}", file_name, e);
                results.push(FileResult::failed(&file_name, target, &e));
            }
        }
    }

    PassReport::completed(started_at, results)
}

fn upload_file(
    local_path: &Path,
    file_name: &str,
    remote_path: &str,
    storage: &dyn RemoteStorage,
) -> Result<UploadedFile> {
    let size = std::fs::metadata(local_path)?.len();
    if size > MAX_UPLOAD_BYTES {
        return Err(SyncError::Upload {
            file: file_name.to_string(),
            reason: format!(
                "{} bytes exceeds the single upload limit of {} bytes",
                size, MAX_UPLOAD_BYTES
            ),
        });
    }

    let contents = std::fs::read(local_path)?;
    storage.upload(contents, remote_path)
}
