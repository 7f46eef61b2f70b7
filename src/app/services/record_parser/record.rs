//! Header-to-value record construction

use super::lines::{clean_lines, split_fields};
use crate::app::models::TabularRecord;
use tracing::debug;

/// Match header positions to values by index
///
/// Missing values default to an empty string and values beyond the header
/// count are dropped.
pub fn map_record(headers: &[&str], values: &[&str]) -> TabularRecord {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| (*header, values.get(index).copied().unwrap_or("")))
        .collect()
}

/// Build a record from the header line and the first data line
///
/// Returns `None` when fewer than two content lines survive cleaning.
pub fn parse_first_record(text: &str) -> Option<TabularRecord> {
    let lines = clean_lines(text);

    let [header_line, data_line, ..] = lines.as_slice() else {
        debug!(
            "No record available: {} content line(s) after cleaning",
            lines.len()
        );
        return None;
    };

    let headers = split_fields(header_line);
    let values = split_fields(data_line);

    Some(map_record(&headers, &values))
}

/// Build one record per data line, all keyed by the header line
pub fn parse_records(text: &str) -> Vec<TabularRecord> {
    let lines = clean_lines(text);

    let Some((header_line, data_lines)) = lines.split_first() else {
        return Vec::new();
    };

    let headers = split_fields(header_line);
    let records: Vec<TabularRecord> = data_lines
        .iter()
        .map(|line| map_record(&headers, &split_fields(line)))
        .collect();

    debug!(
        "Parsed {} record(s) over {} column(s)",
        records.len(),
        headers.len()
    );

    records
}
