//! Tabular record parser for comma-delimited snapshot text
//!
//! Converts raw text into flat records keyed by a shared header row. The
//! format is deliberately minimal: fields are split on every `,` with no
//! quoting or escaping, so a value containing a literal comma shifts the
//! fields after it.
//!
//! ## Architecture
//!
//! - [`lines`] - Line splitting, trimming and comment filtering
//! - [`record`] - Header-to-value mapping and the two parse modes
//!
//! ## Usage
//!
//! ```rust
//! use exoplanet_portal::app::services::record_parser::parse_first_record;
//!
//! let text = "# KOI snapshot\nkepid,koi_steff\n10797460,5455\n";
//! let record = parse_first_record(text).expect("header and data row present");
//! assert_eq!(record.get("koi_steff"), Some("5455"));
//! ```

pub mod lines;
pub mod record;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use lines::{clean_lines, non_empty_lines, split_fields};
pub use record::{map_record, parse_first_record, parse_records};
