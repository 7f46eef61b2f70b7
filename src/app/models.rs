//! Data models for the exoplanet portal
//!
//! This module contains the core data structures: the upload session and its
//! supporting types, and the flat header-keyed record produced by the record
//! parser. State transitions of [`UploadSession`] live in
//! [`crate::app::services::upload`].

use crate::constants::{CSV_SUFFIX, DAT_SUFFIX, messages};
use crate::{Error, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// =============================================================================
// Upload Target
// =============================================================================

/// Declared type of an upload target, chosen when the selection is triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Csv,
    Dat,
}

impl FileKind {
    /// File name suffix accepted for this target
    pub fn suffix(self) -> &'static str {
        match self {
            FileKind::Csv => CSV_SUFFIX,
            FileKind::Dat => DAT_SUFFIX,
        }
    }

    /// Message shown when a selection does not match this target
    pub fn type_mismatch_message(self) -> &'static str {
        match self {
            FileKind::Csv => messages::CSV_TYPE_REQUIRED,
            FileKind::Dat => messages::DAT_TYPE_REQUIRED,
        }
    }

    /// Accept attribute of the matching file picker (`.csv,text/csv`)
    pub fn accept_filter(self) -> &'static str {
        match self {
            FileKind::Csv => ".csv,text/csv",
            FileKind::Dat => ".dat,text/plain",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Csv => write!(f, "csv"),
            FileKind::Dat => write!(f, "dat"),
        }
    }
}

impl FromStr for FileKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(FileKind::Csv),
            "dat" => Ok(FileKind::Dat),
            other => Err(Error::configuration(format!(
                "Invalid upload type '{}': must be csv or dat",
                other
            ))),
        }
    }
}

/// A file picked by the user for a given upload target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    /// Location the text is decoded from
    pub path: PathBuf,

    /// Display name of the file (last path component)
    pub name: String,

    /// MIME type reported by the picker, if any
    pub mime_type: Option<String>,

    /// Upload target the selection was made for
    pub kind: FileKind,
}

impl FileSelection {
    /// Create a selection from a path, using its last component as the name
    pub fn from_path(path: impl Into<PathBuf>, kind: FileKind) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Self {
            path,
            name,
            mime_type: None,
            kind,
        }
    }

    /// Attach the MIME type reported for the file
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Identity of the file a live session works on; fixed for the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionFile {
    pub file_type: FileKind,
    pub file_name: String,
}

// =============================================================================
// Upload Session
// =============================================================================

/// Status label of an upload session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Idle,
    Reading,
    Uploading,
    Success,
    Error,
}

impl UploadStatus {
    /// Check if no further transition happens without a new selection
    pub fn is_terminal(self) -> bool {
        matches!(self, UploadStatus::Success | UploadStatus::Error)
    }

    /// Check if a cycle is in flight and new selections should be refused
    pub fn is_busy(self) -> bool {
        matches!(self, UploadStatus::Reading | UploadStatus::Uploading)
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UploadStatus::Idle => "idle",
            UploadStatus::Reading => "reading",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Success => "success",
            UploadStatus::Error => "error",
        };
        f.write_str(label)
    }
}

/// Why an upload session ended in `error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadFailureKind {
    /// Wrong type or extension for the declared target, detected before any read
    Validation,
    /// The file bytes could not be turned into text
    Decode,
    /// The submission step rejected the upload
    Submission,
}

/// Terminal failure of a session: a kind plus its fixed user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadFailure {
    pub kind: UploadFailureKind,
    pub message: &'static str,
}

impl UploadFailure {
    pub fn validation(kind: FileKind) -> Self {
        Self {
            kind: UploadFailureKind::Validation,
            message: kind.type_mismatch_message(),
        }
    }

    pub fn decode() -> Self {
        Self {
            kind: UploadFailureKind::Decode,
            message: messages::READ_FAILED,
        }
    }

    pub fn submission() -> Self {
        Self {
            kind: UploadFailureKind::Submission,
            message: messages::SUBMISSION_FAILED,
        }
    }
}

/// Line-oriented view of decoded file text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPreview {
    /// First non-empty trimmed lines, joined with `\n`
    pub preview: String,

    /// Non-empty trimmed lines after the header line
    pub row_count: usize,
}

/// One file-selection-to-completion cycle
///
/// The value is replaced wholesale on every transition. Payload fields only
/// exist in the states where they are defined, so a preview can never be
/// observed before decoding finished.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum UploadSession {
    #[default]
    Idle,
    Reading {
        file: SessionFile,
    },
    Uploading {
        file: SessionFile,
        preview: TextPreview,
    },
    Success {
        file: SessionFile,
        preview: TextPreview,
    },
    Error {
        file: Option<SessionFile>,
        failure: UploadFailure,
    },
}

impl UploadSession {
    pub fn status(&self) -> UploadStatus {
        match self {
            UploadSession::Idle => UploadStatus::Idle,
            UploadSession::Reading { .. } => UploadStatus::Reading,
            UploadSession::Uploading { .. } => UploadStatus::Uploading,
            UploadSession::Success { .. } => UploadStatus::Success,
            UploadSession::Error { .. } => UploadStatus::Error,
        }
    }

    fn file(&self) -> Option<&SessionFile> {
        match self {
            UploadSession::Idle => None,
            UploadSession::Reading { file }
            | UploadSession::Uploading { file, .. }
            | UploadSession::Success { file, .. } => Some(file),
            UploadSession::Error { file, .. } => file.as_ref(),
        }
    }

    pub fn file_type(&self) -> Option<FileKind> {
        self.file().map(|f| f.file_type)
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file().map(|f| f.file_name.as_str())
    }

    fn text_preview(&self) -> Option<&TextPreview> {
        match self {
            UploadSession::Uploading { preview, .. } | UploadSession::Success { preview, .. } => {
                Some(preview)
            }
            _ => None,
        }
    }

    /// Data rows detected, defined once decoding completed
    pub fn row_count(&self) -> Option<usize> {
        self.text_preview().map(|p| p.row_count)
    }

    /// Preview text, defined once decoding completed
    pub fn preview(&self) -> Option<&str> {
        self.text_preview().map(|p| p.preview.as_str())
    }

    /// Failure message, present only in `error`
    pub fn message(&self) -> Option<&'static str> {
        match self {
            UploadSession::Error { failure, .. } => Some(failure.message),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&UploadFailure> {
        match self {
            UploadSession::Error { failure, .. } => Some(failure),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.status().is_busy()
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}

// =============================================================================
// Tabular Record
// =============================================================================

/// Flat mapping from column name to cell value, in header order
///
/// Inserting an existing column keeps its position and replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularRecord {
    fields: Vec<(String, String)>,
}

impl TabularRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Value of a column, treating an empty cell as absent
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|value| !value.is_empty())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TabularRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = TabularRecord::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

impl Serialize for TabularRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_parsing() {
        assert_eq!("csv".parse::<FileKind>().unwrap(), FileKind::Csv);
        assert_eq!(" DAT ".parse::<FileKind>().unwrap(), FileKind::Dat);
        assert!("txt".parse::<FileKind>().is_err());
    }

    #[test]
    fn test_file_kind_messages() {
        assert_eq!(
            FileKind::Csv.type_mismatch_message(),
            "Please choose a .csv file."
        );
        assert_eq!(
            FileKind::Dat.type_mismatch_message(),
            "Please choose a .dat file."
        );
    }

    #[test]
    fn test_selection_name_from_path() {
        let selection = FileSelection::from_path("/tmp/obs/koi.csv", FileKind::Csv);
        assert_eq!(selection.name, "koi.csv");
        assert!(selection.mime_type.is_none());

        let selection = selection.with_mime_type("text/csv");
        assert_eq!(selection.mime_type.as_deref(), Some("text/csv"));
    }

    #[test]
    fn test_status_classification() {
        assert!(UploadStatus::Reading.is_busy());
        assert!(UploadStatus::Uploading.is_busy());
        assert!(!UploadStatus::Idle.is_busy());
        assert!(UploadStatus::Success.is_terminal());
        assert!(UploadStatus::Error.is_terminal());
        assert!(!UploadStatus::Uploading.is_terminal());
    }

    #[test]
    fn test_idle_session_has_no_payload() {
        let session = UploadSession::default();
        assert_eq!(session.status(), UploadStatus::Idle);
        assert_eq!(session.file_name(), None);
        assert_eq!(session.row_count(), None);
        assert_eq!(session.preview(), None);
        assert_eq!(session.message(), None);
    }

    #[test]
    fn test_error_session_exposes_message() {
        let session = UploadSession::Error {
            file: None,
            failure: UploadFailure::decode(),
        };
        assert_eq!(
            session.message(),
            Some("We could not read that file. Please try again.")
        );
        assert_eq!(session.preview(), None);
    }

    #[test]
    fn test_session_serializes_with_status_tag() {
        let session = UploadSession::Success {
            file: SessionFile {
                file_type: FileKind::Csv,
                file_name: "koi.csv".to_string(),
            },
            preview: TextPreview {
                preview: "a,b\n1,2".to_string(),
                row_count: 1,
            },
        };
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["file"]["file_type"], "csv");
        assert_eq!(json["preview"]["row_count"], 1);
    }

    #[test]
    fn test_record_insert_keeps_first_position() {
        let mut record = TabularRecord::new();
        record.insert("a", "1");
        record.insert("b", "2");
        record.insert("a", "3");

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("a"), Some("3"));
        assert_eq!(record.columns().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_record_non_empty() {
        let record: TabularRecord = [("kepler_name", ""), ("kepid", "10797460")]
            .into_iter()
            .collect();
        assert!(record.contains("kepler_name"));
        assert_eq!(record.non_empty("kepler_name"), None);
        assert_eq!(record.non_empty("kepid"), Some("10797460"));
    }

    #[test]
    fn test_record_serializes_in_column_order() {
        let record: TabularRecord = [("z", "1"), ("a", "2")].into_iter().collect();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"z":"1","a":"2"}"#);
    }
}
