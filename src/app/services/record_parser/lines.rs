//! Line-level helpers shared by the record parser and the upload preview

use crate::constants::{COMMENT_MARKER, FIELD_DELIMITER};

/// Split text on line boundaries (`\n` or `\r\n`), trim, and drop empty lines
///
/// This is the view used by the upload preview: comment lines are kept.
pub fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Lines the record parser treats as content: non-empty and not comments
pub fn clean_lines(text: &str) -> Vec<&str> {
    non_empty_lines(text)
        .filter(|line| !line.starts_with(COMMENT_MARKER))
        .collect()
}

/// Split a line into fields on every delimiter
///
/// No quoting support: `"a,b"` yields two fields and fields are not trimmed.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).collect()
}
