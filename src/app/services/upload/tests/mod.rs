//! Test utilities and mock submitters for upload testing
//!
//! Provides temporary upload files, selection helpers and submitters that
//! record what they were handed.

use std::io::Write;
use std::sync::Mutex;
use tempfile::{Builder, NamedTempFile};

use crate::app::models::{FileKind, FileSelection};
use crate::app::services::upload::{SubmissionRequest, Submitter};
use crate::{Error, Result};


/// Submission captured by [`RecordingSubmitter`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSubmission {
    pub file_name: String,
    pub file_type: FileKind,
    pub text: String,
    pub row_count: usize,
}

/// Submitter that resolves immediately and records every request
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    pub reject: bool,
    pub seen: Mutex<Vec<RecordedSubmission>>,
}

impl RecordingSubmitter {
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    pub fn submissions(&self) -> Vec<RecordedSubmission> {
        self.seen.lock().unwrap().clone()
    }
}

impl Submitter for RecordingSubmitter {
    async fn submit(&self, request: &SubmissionRequest<'_>) -> Result<()> {
        self.seen.lock().unwrap().push(RecordedSubmission {
            file_name: request.file_name.to_string(),
            file_type: request.file_type,
            text: request.text.to_string(),
            row_count: request.row_count,
        });

        if self.reject {
            Err(Error::submission("rejected by test submitter"))
        } else {
            Ok(())
        }
    }
}

/// Helper to create a temporary file with the given suffix and content
pub fn create_upload_file(suffix: &str, content: &[u8]) -> NamedTempFile {
    let mut temp_file = Builder::new().suffix(suffix).tempfile().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Helper to create a selection for a temporary file
pub fn select(file: &NamedTempFile, kind: FileKind) -> FileSelection {
    FileSelection::from_path(file.path(), kind)
}

/// Header plus six data rows, with blank lines sprinkled in
pub fn create_observation_csv() -> String {
    "kepid,koi_period,koi_prad\n\
     \n\
     1,9.48,2.26\r\n\
     2,54.41,2.83\n\
     \n\
     3,19.89,14.60\n\
     4,1.73,33.46\n\
     5,2.52,2.75\n\
     6,11.09,3.90\n"
        .to_string()
}
