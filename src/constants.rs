//! Application constants for the exoplanet portal
//!
//! This module contains the fixed user-facing messages, default values and
//! classification thresholds used throughout the portal.

use std::time::Duration;

// =============================================================================
// Upload Defaults
// =============================================================================

/// Number of non-empty lines kept in an upload preview
pub const DEFAULT_PREVIEW_LINES: usize = 5;

/// Delay of the simulated submission step in milliseconds
pub const DEFAULT_UPLOAD_DELAY_MS: u64 = 1200;

/// Default simulated submission delay as a duration
pub const DEFAULT_UPLOAD_DELAY: Duration = Duration::from_millis(DEFAULT_UPLOAD_DELAY_MS);

/// MIME type accepted for CSV selections regardless of file name
pub const CSV_MIME_TYPE: &str = "text/csv";

/// File name suffixes accepted per upload target
pub const CSV_SUFFIX: &str = ".csv";
pub const DAT_SUFFIX: &str = ".dat";

/// Environment variables consulted when building the configuration
pub mod env_vars {
    pub const UPLOAD_DELAY_MS: &str = "PORTAL_UPLOAD_DELAY_MS";
    pub const PREVIEW_LINES: &str = "PORTAL_PREVIEW_LINES";
}

// =============================================================================
// User-Facing Messages
// =============================================================================

/// Fixed messages shown when an upload session ends in `error`
pub mod messages {
    pub const CSV_TYPE_REQUIRED: &str = "Please choose a .csv file.";
    pub const DAT_TYPE_REQUIRED: &str = "Please choose a .dat file.";
    pub const READ_FAILED: &str = "We could not read that file. Please try again.";
    pub const SUBMISSION_FAILED: &str = "Simulated upload failed. Please try again.";

    /// Shown in place of an empty preview
    pub const NO_PREVIEW: &str = "No preview available.";

    /// Planet card without any record data
    pub const NO_PLANET_HEADING: &str = "No planet data available";
    pub const NO_PLANET_BODY: &str =
        "Pass a planet record to the component to explore its properties.";
}

// =============================================================================
// Record Parsing and Display
// =============================================================================

/// Lines starting with this marker are ignored by the record parser
pub const COMMENT_MARKER: char = '#';

/// Field separator of snapshot files (no quoting support)
pub const FIELD_DELIMITER: char = ',';

/// Glyph rendered for missing, empty or non-numeric values
pub const PLACEHOLDER: &str = "—";

/// Record keys with special meaning on the planet card
pub mod record_keys {
    pub const KEPLER_NAME: &str = "kepler_name";
    pub const KEPOI_NAME: &str = "kepoi_name";
    pub const KEPID: &str = "kepid";
    pub const DISPOSITION: &str = "koi_disposition";
    pub const SCORE: &str = "koi_score";
    pub const STELLAR_TEMPERATURE: &str = "koi_steff";

    /// Derived field: spectral class computed from the stellar temperature
    pub const SPECTRAL_CLASS: &str = "obfgam";
}

/// Card fallbacks for missing identity fields
pub const UNNAMED_PLANET: &str = "Unnamed Planet";
pub const UNKNOWN_DISPOSITION: &str = "UNKNOWN";

/// Lower effective temperature bounds (Kelvin) of the spectral classes
///
/// Anything below the K bound is class M.
pub mod spectral_thresholds {
    pub const O: f64 = 30_000.0;
    pub const B: f64 = 10_000.0;
    pub const A: f64 = 7_500.0;
    pub const F: f64 = 6_000.0;
    pub const G: f64 = 5_300.0;
    pub const K: f64 = 3_900.0;
}
