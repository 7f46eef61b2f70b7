//! Upload state machine for user-selected CSV and DAT files
//!
//! One upload cycle moves a session through
//! `idle -> reading -> uploading -> success`, ending in `error` when the
//! selection has the wrong type, the file cannot be decoded, or the
//! submission step rejects.
//!
//! ## Architecture
//!
//! - [`session`] - Pure transitions on [`UploadSession`] values
//! - [`preview`] - Line-oriented preview of decoded text
//! - [`decoder`] - Asynchronous file-to-text decoding
//! - [`submitter`] - The submission capability and its simulated implementation
//! - [`portal`] - Drives one cycle and publishes every state for rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use exoplanet_portal::app::services::upload::UploadPortal;
//! use exoplanet_portal::{FileKind, FileSelection, PortalConfig};
//!
//! # async fn example() -> exoplanet_portal::Result<()> {
//! let portal = UploadPortal::from_config(&PortalConfig::default());
//! let selection = FileSelection::from_path("observations.csv", FileKind::Csv);
//! let session = portal.select(Some(selection)).await?;
//!
//! println!("{}: {:?} data rows", session.status(), session.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! [`UploadSession`]: crate::app::models::UploadSession

pub mod decoder;
pub mod portal;
pub mod preview;
pub mod session;
pub mod submitter;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use decoder::decode_text;
pub use portal::UploadPortal;
pub use session::selection_matches;
pub use submitter::{SimulatedSubmitter, SubmissionRequest, Submitter};
