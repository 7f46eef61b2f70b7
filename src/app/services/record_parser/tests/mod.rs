//! Test utilities for record parser testing
//!
//! Provides snapshot text fixtures shared by the test modules.

// Test modules
mod lines_tests;

/// Helper to create a KOI snapshot with a comment preamble and two planets
pub fn create_koi_snapshot() -> String {
    r#"# This file was produced by the NASA Exoplanet Archive
# COLUMN kepid:          KepID
# COLUMN kepoi_name:     KOI Name
#
kepid,kepoi_name,kepler_name,koi_disposition,koi_steff
10797460,K00752.01,Kepler-227 b,CONFIRMED,5455
10797460,K00752.02,Kepler-227 c,CONFIRMED,5455
"#
    .to_string()
}

/// Helper to create a snapshot with Windows line endings and blank lines
pub fn create_crlf_snapshot() -> String {
    "\r\n  a,b,c  \r\n\r\n1,2,3\r\n\r\n".to_string()
}
