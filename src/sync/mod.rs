// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Synchronization Module
//!
//! Detects new files in a local folder and uploads them to remote storage,
//! once per pass, for as long as the session keeps running.

pub mod reconciler;
pub mod session;
pub mod types;
pub mod watcher;

pub use reconciler::{list_local_files, reconcile, remote_path, MAX_UPLOAD_BYTES};
pub use session::{SyncSession, DEFAULT_REMOTE_FOLDER};
pub use types::{FileResult, FileStatus, PassOutcome, PassReport};
pub use watcher::{watch, WatchOptions, DEFAULT_INTERVAL};
