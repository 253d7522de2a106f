// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! dropsync - Library
//!
//! Watches a local folder and uploads files that appeared since the last
//! pass to Dropbox.
//!
//! ```rust,ignore
//! use dropsync::{LocalMirrorStorage, SyncSession};
//!
//! let storage = LocalMirrorStorage::new("/mnt/backup");
//! let mut session = SyncSession::new("/home/me/inbox", "/Inbox");
//! session.start();
//!
//! let report = session.tick(&storage).unwrap();
//! println!("{} uploaded, {} failed", report.uploaded_count(), report.failed_count());
//! ```

pub mod cli;
pub mod colors;
pub mod commands;
pub mod config;
pub mod dropbox;
pub mod error;
pub mod storage;
pub mod sync;

// Re-export commonly used items
pub use cli::{Cli, Commands, ConfigCommands, TargetArgs};
pub use config::{AppCredentials, Settings};
pub use dropbox::{DropboxClient, DropboxEndpoints, NoRedirectFlow};
pub use error::SyncError;
pub use storage::{LocalMirrorStorage, RemoteStorage, UploadedFile};
pub use sync::{
    list_local_files, reconcile, remote_path, watch, FileResult, FileStatus, PassOutcome,
    PassReport, SyncSession, WatchOptions,
};
