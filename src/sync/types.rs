// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Result types of a reconciliation pass

use crate::error::SyncError;
use chrono::{DateTime, Utc};

/// What happened to a single file during a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Uploaded { size: u64 },
    Failed { error: String },
}

/// Per-file result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub file_name: String,
    pub remote_path: String,
    pub status: FileStatus,
}

impl FileResult {
    pub fn uploaded(file_name: &str, remote_path: String, size: u64) -> Self {
        Self {
            file_name: file_name.to_string(),
            remote_path,
            status: FileStatus::Uploaded { size },
        }
    }

    pub fn failed(file_name: &str, remote_path: String, error: &SyncError) -> Self {
        Self {
            file_name: file_name.to_string(),
            remote_path,
            status: FileStatus::Failed {
                error: error.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Uploaded { .. })
    }
}

/// Outcome of a pass: either it never got to the files, or it went through all of them
#[derive(Debug)]
pub enum PassOutcome {
    Aborted(SyncError),
    Completed(Vec<FileResult>),
}

/// A finished reconciliation pass
#[derive(Debug)]
pub struct PassReport {
    pub started_at: DateTime<Utc>,
    pub outcome: PassOutcome,
}

impl PassReport {
    pub fn aborted(started_at: DateTime<Utc>, error: SyncError) -> Self {
        Self {
            started_at,
            outcome: PassOutcome::Aborted(error),
        }
    }

    pub fn completed(started_at: DateTime<Utc>, results: Vec<FileResult>) -> Self {
        Self {
            started_at,
            outcome: PassOutcome::Completed(results),
        }
    }

    /// Per-file results; empty for an aborted pass
    pub fn results(&self) -> &[FileResult] {
        match &self.outcome {
            PassOutcome::Completed(results) => results,
            PassOutcome::Aborted(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&SyncError> {
        match &self.outcome {
            PassOutcome::Aborted(e) => Some(e),
            PassOutcome::Completed(_) => None,
        }
    }

    pub fn uploaded_count(&self) -> usize {
        self.results().iter().filter(|r| r.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results().iter().filter(|r| !r.is_success()).count()
    }
}
