//! Upload command: one file selection on the data portal
//!
//! Runs the upload cycle, shows a spinner that follows the session through
//! its states and renders the terminal session.

use super::shared::{RunSummary, print_json, setup_logging};
use crate::Result;
use crate::app::models::{FileSelection, UploadSession, UploadStatus};
use crate::app::services::upload::UploadPortal;
use crate::cli::args::{OutputFormat, UploadArgs};
use crate::config::PortalConfig;
use crate::constants::messages;
use chrono::{DateTime, Utc};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// JSON report of a finished upload cycle
#[derive(Debug, Serialize)]
struct UploadReport<'a> {
    session: &'a UploadSession,
    upload_delay_ms: u64,
    completed_at: DateTime<Utc>,
}

/// Upload command runner
pub async fn run_upload(args: UploadArgs) -> Result<RunSummary> {
    setup_logging(args.get_log_level())?;

    info!("Starting data portal upload");
    debug!("Upload arguments: {:?}", args);

    args.validate()?;

    let config = args.apply_to(PortalConfig::from_env()?);
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let portal = UploadPortal::from_config(&config);
    let selection = build_selection(&args);

    let progress = if args.show_progress() && selection.is_some() {
        Some(spawn_progress(portal.subscribe()))
    } else {
        None
    };

    let session = portal.select(selection).await?;

    if let Some((progress_bar, handle)) = progress {
        handle.abort();
        progress_bar.finish_and_clear();
    }

    match args.format {
        OutputFormat::Human => print_session(&session),
        OutputFormat::Json => print_json(&UploadReport {
            session: &session,
            upload_delay_ms: config.upload_delay_ms,
            completed_at: Utc::now(),
        })?,
    }

    Ok(RunSummary::for_upload(session.status()))
}

/// Turn the file argument into a selection for the requested target
fn build_selection(args: &UploadArgs) -> Option<FileSelection> {
    args.path.as_ref().map(|path| {
        let selection = FileSelection::from_path(path, args.file_type.into());
        match &args.mime_type {
            Some(mime_type) => selection.with_mime_type(mime_type.trim()),
            None => selection,
        }
    })
}

/// Spinner following the session through its states
fn spawn_progress(
    mut receiver: watch::Receiver<UploadSession>,
) -> (ProgressBar, JoinHandle<()>) {
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress_bar.set_message(status_message(UploadStatus::Idle));
    progress_bar.enable_steady_tick(Duration::from_millis(100));

    let task_bar = progress_bar.clone();
    let handle = tokio::spawn(async move {
        while receiver.changed().await.is_ok() {
            let status = receiver.borrow_and_update().status();
            task_bar.set_message(status_message(status));
            if status.is_terminal() {
                break;
            }
        }
    });

    (progress_bar, handle)
}

fn status_message(status: UploadStatus) -> &'static str {
    match status {
        UploadStatus::Idle => "Waiting for a file...",
        UploadStatus::Reading => "Reading your file...",
        UploadStatus::Uploading => "Uploading your data...",
        UploadStatus::Success => "Upload complete",
        UploadStatus::Error => "Upload failed",
    }
}

/// Render a session for humans
fn print_session(session: &UploadSession) {
    match session {
        UploadSession::Idle => {
            println!("{}", "No file selected.".dimmed());
        }
        UploadSession::Reading { .. } | UploadSession::Uploading { .. } => {
            println!("{}", status_message(session.status()).bright_blue());
        }
        UploadSession::Error { failure, .. } => {
            println!("{}", failure.message.bright_red().bold());
        }
        UploadSession::Success { file, preview } => {
            println!(
                "{}  {}",
                format!("Loaded {}", file.file_name).bright_green().bold(),
                format!("{} data rows detected", preview.row_count).green()
            );
            println!();
            println!("{}", "Preview (first rows):".dimmed());
            if preview.is_empty() {
                println!("{}", messages::NO_PREVIEW);
            } else {
                for line in preview.preview.lines() {
                    println!("  {}", line);
                }
            }
        }
    }
}
