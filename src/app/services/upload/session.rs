//! Upload session transitions
//!
//! Every transition consumes the current session and returns the next one,
//! so a session is always replaced as a whole. Starting a new cycle is
//! allowed from any state; the steps inside a cycle are only allowed from
//! their source state and fail with [`Error::InvalidTransition`] otherwise.

use crate::app::models::{
    FileKind, FileSelection, SessionFile, TextPreview, UploadFailure, UploadSession,
};
use crate::constants::CSV_MIME_TYPE;
use crate::{Error, Result};
use tracing::debug;

/// Check a selection against the type it was declared for
///
/// CSV accepts the `text/csv` MIME type or a `.csv` name; DAT only accepts a
/// `.dat` name. Suffixes are compared case-insensitively.
pub fn selection_matches(selection: &FileSelection) -> bool {
    let has_suffix = selection
        .name
        .to_lowercase()
        .ends_with(selection.kind.suffix());

    match selection.kind {
        FileKind::Csv => selection.mime_type.as_deref() == Some(CSV_MIME_TYPE) || has_suffix,
        FileKind::Dat => has_suffix,
    }
}

impl UploadSession {
    /// Start a new cycle for a selection, replacing whatever came before
    ///
    /// Yields `reading`, or `error` when the selection fails the type check.
    pub fn begin(selection: &FileSelection) -> Self {
        let file = SessionFile {
            file_type: selection.kind,
            file_name: selection.name.clone(),
        };

        if !selection_matches(selection) {
            debug!(
                "Rejected {} for {} upload (mime: {:?})",
                selection.name, selection.kind, selection.mime_type
            );
            return UploadSession::Error {
                file: Some(file),
                failure: UploadFailure::validation(selection.kind),
            };
        }

        UploadSession::Reading { file }
    }

    /// `reading -> uploading` once the file text is available
    pub fn decoded(self, text: &str, preview_lines: usize) -> Result<Self> {
        match self {
            UploadSession::Reading { file } => Ok(UploadSession::Uploading {
                file,
                preview: TextPreview::from_text(text, preview_lines),
            }),
            other => Err(Error::invalid_transition("finish decoding", other.status())),
        }
    }

    /// `reading -> error` when the file could not be decoded
    pub fn decode_failed(self) -> Result<Self> {
        match self {
            UploadSession::Reading { file } => Ok(UploadSession::Error {
                file: Some(file),
                failure: UploadFailure::decode(),
            }),
            other => Err(Error::invalid_transition("fail decoding", other.status())),
        }
    }

    /// `uploading -> success` when the submission step resolves
    pub fn submitted(self) -> Result<Self> {
        match self {
            UploadSession::Uploading { file, preview } => {
                Ok(UploadSession::Success { file, preview })
            }
            other => Err(Error::invalid_transition("complete submission", other.status())),
        }
    }

    /// `uploading -> error` when the submission step rejects
    pub fn submission_failed(self) -> Result<Self> {
        match self {
            UploadSession::Uploading { file, .. } => Ok(UploadSession::Error {
                file: Some(file),
                failure: UploadFailure::submission(),
            }),
            other => Err(Error::invalid_transition("fail submission", other.status())),
        }
    }
}
