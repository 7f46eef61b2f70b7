//! Bundled sample-planet record
//!
//! The detail card shown alongside the data portal is backed by a snapshot
//! of the Kepler cumulative KOI table compiled into the binary. Only the
//! first planet row is used.

use crate::app::models::TabularRecord;
use crate::app::services::record_parser::parse_first_record;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Raw text of the bundled snapshot
pub const SAMPLE_SNAPSHOT: &str = include_str!("../../../assets/sample_planet.csv");

static SAMPLE_PLANET: LazyLock<TabularRecord> = LazyLock::new(|| {
    match parse_first_record(SAMPLE_SNAPSHOT) {
        Some(record) => {
            debug!("Loaded sample planet with {} columns", record.len());
            record
        }
        None => {
            warn!("Bundled snapshot has no planet row; using an empty record");
            TabularRecord::new()
        }
    }
});

/// The sample-planet record, parsed once on first access
pub fn sample_planet() -> &'static TabularRecord {
    &SAMPLE_PLANET
}
