//! Upload portal: drives one session through a full cycle

use super::decoder::decode_text;
use super::submitter::{SimulatedSubmitter, SubmissionRequest, Submitter};
use crate::Result;
use crate::app::models::{FileSelection, UploadSession};
use crate::config::PortalConfig;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Owner of the single live upload session
///
/// Every state the session passes through is published on a watch channel,
/// so renderers observe transitions without sharing the session itself.
/// The portal does not refuse a new selection while a cycle is in flight;
/// callers check [`UploadSession::is_busy`] before triggering one.
#[derive(Debug)]
pub struct UploadPortal<S = SimulatedSubmitter> {
    submitter: S,
    preview_lines: usize,
    state: watch::Sender<UploadSession>,
}

impl UploadPortal<SimulatedSubmitter> {
    /// Create a portal with the simulated submitter described by `config`
    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(SimulatedSubmitter::from_config(config), config.preview_lines)
    }
}

impl<S: Submitter> UploadPortal<S> {
    pub fn new(submitter: S, preview_lines: usize) -> Self {
        let (state, _) = watch::channel(UploadSession::Idle);
        Self {
            submitter,
            preview_lines,
            state,
        }
    }

    /// Snapshot of the current session
    pub fn session(&self) -> UploadSession {
        self.state.borrow().clone()
    }

    /// Receiver notified on every transition
    pub fn subscribe(&self) -> watch::Receiver<UploadSession> {
        self.state.subscribe()
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Run one upload cycle for a selection and return the terminal session
    ///
    /// Selecting no file leaves the current session untouched. Upload
    /// failures end the session in `error` and are still returned as `Ok`.
    pub async fn select(&self, selection: Option<FileSelection>) -> Result<UploadSession> {
        let Some(selection) = selection else {
            debug!("No file selected; keeping current session");
            return Ok(self.session());
        };

        info!("Starting {} upload of {}", selection.kind, selection.name);

        let session = self.publish(UploadSession::begin(&selection));
        if session.is_terminal() {
            warn!(
                "Selection {} rejected: {}",
                selection.name,
                session.message().unwrap_or_default()
            );
            return Ok(session);
        }

        let text = match decode_text(selection.path()).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not decode {}: {}", selection.name, e);
                return Ok(self.publish(session.decode_failed()?));
            }
        };

        let session = self.publish(session.decoded(&text, self.preview_lines)?);
        let row_count = session.row_count().unwrap_or_default();
        debug!("Decoded {}: {} data rows", selection.name, row_count);

        let request = SubmissionRequest::new(&selection, &text, row_count);
        let session = match self.submitter.submit(&request).await {
            Ok(()) => session.submitted()?,
            Err(e) => {
                warn!("Submission of {} failed: {}", selection.name, e);
                session.submission_failed()?
            }
        };

        let session = self.publish(session);
        info!("Upload of {} finished: {}", selection.name, session.status());
        Ok(session)
    }

    /// Replace the live session and notify subscribers
    fn publish(&self, session: UploadSession) -> UploadSession {
        debug!("Upload session -> {}", session.status());
        self.state.send_replace(session.clone());
        session
    }
}
