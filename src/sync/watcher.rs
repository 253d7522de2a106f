// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Periodic driver for a sync session
//!
//! Ticks right away and then once per interval until the shutdown future
//! resolves. Each pass runs on the blocking pool and is awaited before the
//! next tick, so passes never overlap and shutdown never cuts one short.

use super::session::SyncSession;
use super::types::PassReport;
use crate::error::{Result, SyncError};
use crate::storage::RemoteStorage;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Default polling interval
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Time between the start of two passes
    pub interval: Duration,
    /// Stop after this many passes (None = until shutdown)
    pub max_passes: Option<u64>,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            max_passes: None,
        }
    }
}

/// Drive `session` until `shutdown` resolves or `max_passes` is reached
///
/// Returns the session so the caller can inspect what was uploaded.
pub async fn watch<F, R>(
    mut session: SyncSession,
    storage: Arc<dyn RemoteStorage>,
    options: WatchOptions,
    shutdown: F,
    mut on_report: R,
) -> Result<SyncSession>
where
    F: Future<Output = ()>,
    R: FnMut(&PassReport),
{
    tokio::pin!(shutdown);

    let mut ticker = tokio::time::interval(options.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut passes: u64 = 0;
    session.start();

    while session.is_running() {
        if options.max_passes.is_some_and(|max| passes >= max) {
            session.stop();
            break;
        }

        tokio::select! {
            biased;
            _ = &mut shutdown => {
                log::info!("Shutdown requested, no further passes");
                session.stop();
                break;
            }
            _ = ticker.tick() => {}
        }

        let worker_storage = Arc::clone(&storage);
        let (returned, report) = tokio::task::spawn_blocking(move || {
            let report = session.tick(worker_storage.as_ref());
            (session, report)
        })
        .await
        .map_err(|e| SyncError::Worker(e.to_string()))?;
        session = returned;

        if let Some(report) = report {
            on_report(&report);
            passes += 1;
        }
    }

    Ok(session)
}
