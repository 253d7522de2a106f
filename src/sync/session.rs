// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Sync session state

use super::reconciler::reconcile;
use super::types::PassReport;
use crate::storage::RemoteStorage;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Default remote folder (Dropbox root)
pub const DEFAULT_REMOTE_FOLDER: &str = "/";

/// State carried from one pass to the next
///
/// The uploaded set only lives as long as the session; nothing is persisted.
#[derive(Debug, Clone)]
pub struct SyncSession {
    local_folder: PathBuf,
    remote_folder: String,
    uploaded: BTreeSet<String>,
    running: bool,
}

impl SyncSession {
    pub fn new(local_folder: impl Into<PathBuf>, remote_folder: impl Into<String>) -> Self {
        Self {
            local_folder: local_folder.into(),
            remote_folder: remote_folder.into(),
            uploaded: BTreeSet::new(),
            running: false,
        }
    }

    /// Start with names that are already known to be uploaded
    pub fn with_uploaded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.uploaded.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn local_folder(&self) -> &Path {
        &self.local_folder
    }

    pub fn remote_folder(&self) -> &str {
        &self.remote_folder
    }

    pub fn uploaded(&self) -> &BTreeSet<String> {
        &self.uploaded
    }

    pub fn is_uploaded(&self, file_name: &str) -> bool {
        self.uploaded.contains(file_name)
    }

    pub(crate) fn record_uploaded(&mut self, file_name: &str) {
        self.uploaded.insert(file_name.to_string());
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop issuing passes; a pass already running is not affected
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run a pass if the session is running
    pub fn tick(&mut self, storage: &dyn RemoteStorage) -> Option<PassReport> {
        if !self.running {
            return None;
        }
        Some(reconcile(self, storage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalMirrorStorage;
    use tempfile::tempdir;

    #[test]
    fn test_new_session_is_stopped_and_empty() {
        let session = SyncSession::new("/tmp/in", DEFAULT_REMOTE_FOLDER);
        assert!(!session.is_running());
        assert!(session.uploaded().is_empty());
        assert_eq!(session.remote_folder(), "/");
    }

    #[test]
    fn test_stopped_session_does_not_tick() {
        let source = tempdir().unwrap();
        let mirror = tempdir().unwrap();
        std::fs::write(source.path().join("a.txt"), "a").unwrap();

        let storage = LocalMirrorStorage::new(mirror.path());
        let mut session = SyncSession::new(source.path(), "/");

        assert!(session.tick(&storage).is_none());
        assert!(!mirror.path().join("a.txt").exists());

        session.start();
        let report = session.tick(&storage).unwrap();
        assert_eq!(report.uploaded_count(), 1);

        session.stop();
        std::fs::write(source.path().join("b.txt"), "b").unwrap();
        assert!(session.tick(&storage).is_none());
        assert!(!session.is_uploaded("b.txt"));
    }

    #[test]
    fn test_with_uploaded_seeds_set() {
        let session = SyncSession::new("/tmp/in", "/").with_uploaded(["a.txt", "b.txt"]);
        assert!(session.is_uploaded("a.txt"));
        assert!(session.is_uploaded("b.txt"));
        assert!(!session.is_uploaded("c.txt"));
    }
}
