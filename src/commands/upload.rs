// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Sync and watch commands

use anyhow::{anyhow, Result};
use std::path::Path;
use std::sync::Arc;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use crate::cli::TargetArgs;
use crate::colors::{Status, StyledText};
use crate::config::{validate_interval, Settings};
use crate::dropbox::DropboxClient;
use crate::storage::{LocalMirrorStorage, RemoteStorage};
use crate::sync::{watch, FileStatus, PassReport, SyncSession, WatchOptions};

#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Remote Path")]
    remote_path: String,
    #[tabled(rename = "Result")]
    result: String,
}

/// Run a single pass
pub fn sync_once(config_path: &Path, target: &TargetArgs) -> Result<()> {
    let settings = Settings::load_from(config_path)?;
    let mut session = build_session(&settings, target)?;
    let storage = open_storage(&settings, target)?;

    session.start();
    let report = session
        .tick(storage.as_ref())
        .ok_or_else(|| anyhow!("Sync session is not running"))?;
    print_report(&report);

    if let Some(error) = report.error() {
        return Err(anyhow!("{}", error));
    }
    if report.failed_count() > 0 {
        return Err(anyhow!(
            "{} file(s) failed to upload; they will be retried on the next run",
            report.failed_count()
        ));
    }
    Ok(())
}

/// Run passes every interval until Ctrl-C
pub fn watch_folder(
    config_path: &Path,
    target: &TargetArgs,
    interval: Option<u64>,
    max_passes: Option<u64>,
) -> Result<()> {
    let settings = Settings::load_from(config_path)?;
    let session = build_session(&settings, target)?;
    let storage = open_storage(&settings, target)?;

    let options = WatchOptions {
        interval: match interval {
            Some(secs) => validate_interval(secs)?,
            None => settings.interval()?,
        },
        max_passes,
    };

    println!(
        "{} Watching {} -> {} ({}) every {}s. Press Ctrl-C to stop.",
        Status::info(),
        session.local_folder().display().to_string().path(),
        session.remote_folder().path(),
        storage.name(),
        options.interval.as_secs()
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Could not listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let session = rt.block_on(watch(session, storage, options, shutdown, print_report))?;

    println!(
        "{} Stopped. {} file(s) uploaded this session.",
        Status::info(),
        session.uploaded().len().to_string().count()
    );
    Ok(())
}

fn build_session(settings: &Settings, target: &TargetArgs) -> Result<SyncSession> {
    let local_folder = match &target.local_folder {
        Some(folder) => folder.clone(),
        None => settings.require_local_folder()?.to_path_buf(),
    };
    let remote_folder = target
        .dropbox_folder
        .clone()
        .unwrap_or_else(|| settings.dropbox_folder.clone());

    Ok(SyncSession::new(local_folder, remote_folder))
}

/// Pick the backend; for Dropbox, make sure the token is accepted first
fn open_storage(settings: &Settings, target: &TargetArgs) -> Result<Arc<dyn RemoteStorage>> {
    if let Some(mirror) = &target.mirror {
        return Ok(Arc::new(LocalMirrorStorage::new(mirror)));
    }

    let client = DropboxClient::new(settings.require_token()?);
    match client.get_current_account() {
        Ok(account) => println!(
            "{} Signed in as {}",
            Status::ok(),
            account.name.display_name.header()
        ),
        Err(e) if e.is_auth() => {
            return Err(anyhow!("{}. Run 'dropsync auth' to authorize again.", e));
        }
        // Uploads will report their own errors
        Err(e) => eprintln!("{} Could not verify account: {}", Status::warn(), e),
    }

    Ok(Arc::new(client))
}

/// Print the outcome of one pass
pub fn print_report(report: &PassReport) {
    let stamp = report
        .started_at
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    if let Some(error) = report.error() {
        eprintln!("{} {} {}", stamp.dim(), Status::error(), error);
        return;
    }

    if report.results().is_empty() {
        println!("{} {} No new files", stamp.dim(), Status::info());
        return;
    }

    let rows: Vec<FileRow> = report
        .results()
        .iter()
        .map(|r| FileRow {
            file: r.file_name.clone(),
            remote_path: r.remote_path.clone(),
            result: match &r.status {
                FileStatus::Uploaded { size } => format!("uploaded ({} bytes)", size),
                FileStatus::Failed { error } => format!("failed: {}", error),
            },
        })
        .collect();

    let table = Table::new(rows)
        .with(TableStyle::ascii_rounded())
        .to_string();

    println!("{}", stamp.dim());
    println!("{}", table);
    println!(
        "{} {} uploaded, {} failed",
        Status::summary(),
        report.uploaded_count().to_string().count(),
        report.failed_count().to_string().err()
    );
}
