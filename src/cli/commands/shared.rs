//! Shared components for CLI commands
//!
//! Common types and helpers used across the command implementations.

use crate::Result;
use crate::app::models::UploadStatus;
use serde::Serialize;
use tracing::debug;

/// Outcome of a command run, mapped to the process exit code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Final status when the command ran an upload cycle
    pub upload_status: Option<UploadStatus>,
}

impl RunSummary {
    pub fn for_upload(status: UploadStatus) -> Self {
        Self {
            upload_status: Some(status),
        }
    }

    /// Exit code: 1 when an upload cycle ended in `error`, 0 otherwise
    pub fn exit_code(&self) -> i32 {
        match self.upload_status {
            Some(UploadStatus::Error) => 1,
            _ => 0,
        }
    }
}

/// Set up structured logging at the given level
///
/// `RUST_LOG` takes precedence when set. Safe to call more than once; only
/// the first call installs a subscriber.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("exoplanet_portal={}", log_level)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok();

    if installed {
        debug!("Logging initialized at level: {}", log_level);
    }
    Ok(())
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
