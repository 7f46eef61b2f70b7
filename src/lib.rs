//! Exoplanet Portal Library
//!
//! Core of the planetary-data portal: everything behind the "Bring Your Own
//! Data" view and the planet detail card, without the browser.
//!
//! This library provides tools for:
//! - Running one file-selection-to-completion upload cycle as an explicit
//!   finite-state session (validate, decode, preview, simulated submission)
//! - Parsing comma-delimited snapshot text into header-keyed flat records
//! - Formatting numeric record fields and classifying host stars by
//!   effective temperature
//! - Building the planet detail card from the bundled Kepler sample record

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod display;
        pub mod record_parser;
        pub mod sample_planet;
        pub mod upload;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FileKind, FileSelection, TabularRecord, UploadSession, UploadStatus};
pub use config::PortalConfig;

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for portal operations
///
/// Failures of an upload cycle itself (wrong file type, unreadable file,
/// rejected submission) are not errors at this level: they end the session
/// in its `error` state and are reported through [`UploadSession`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A session transition was requested from a state that does not allow it
    #[error("Invalid upload transition: cannot {action} while {status}")]
    InvalidTransition {
        action: &'static str,
        status: UploadStatus,
    },

    /// The submission step rejected the upload
    #[error("Submission failed: {message}")]
    Submission { message: String },

    /// Report serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    Interrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid transition error
    pub fn invalid_transition(action: &'static str, status: UploadStatus) -> Self {
        Self::InvalidTransition { action, status }
    }

    /// Create a submission error
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
