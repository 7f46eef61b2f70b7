//! Submission capability
//!
//! The portal hands decoded uploads to a [`Submitter`]. The only
//! implementation shipped is [`SimulatedSubmitter`], which waits a fixed
//! delay and transfers nothing; a networked implementation can replace it
//! without touching the session transitions.

use crate::app::models::{FileKind, FileSelection};
use crate::config::{PortalConfig, SimulatedOutcome};
use crate::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Decoded upload handed to the submission step
#[derive(Debug, Clone, Copy)]
pub struct SubmissionRequest<'a> {
    pub file_name: &'a str,
    pub file_type: FileKind,
    pub text: &'a str,
    pub row_count: usize,
}

impl<'a> SubmissionRequest<'a> {
    pub fn new(selection: &'a FileSelection, text: &'a str, row_count: usize) -> Self {
        Self {
            file_name: &selection.name,
            file_type: selection.kind,
            text,
            row_count,
        }
    }
}

/// Deferred submission of an upload
pub trait Submitter {
    /// Submit the upload; resolves `Ok` on acceptance
    fn submit(&self, request: &SubmissionRequest<'_>) -> impl Future<Output = Result<()>> + Send;
}

/// Fixed-delay stand-in for a real upload call
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
    outcome: SimulatedOutcome,
}

impl SimulatedSubmitter {
    /// Submitter that always accepts after `delay`
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            outcome: SimulatedOutcome::Accept,
        }
    }

    /// Submitter that always rejects after `delay`
    pub fn rejecting(delay: Duration) -> Self {
        Self {
            delay,
            outcome: SimulatedOutcome::Reject,
        }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self {
            delay: config.upload_delay(),
            outcome: config.submission_outcome,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, request: &SubmissionRequest<'_>) -> Result<()> {
        info!(
            "Submitting {} ({} data rows, {} bytes)",
            request.file_name,
            request.row_count,
            request.text.len()
        );

        tokio::time::sleep(self.delay).await;

        match self.outcome {
            SimulatedOutcome::Accept => {
                debug!("Simulated submission of {} accepted", request.file_name);
                Ok(())
            }
            SimulatedOutcome::Reject => Err(Error::submission(format!(
                "simulated submission of {} rejected",
                request.file_name
            ))),
        }
    }
}
