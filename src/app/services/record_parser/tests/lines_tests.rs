//! Tests for line cleaning and field splitting

use super::*;
use crate::app::services::record_parser::{clean_lines, non_empty_lines, split_fields};

#[test]
fn test_clean_lines_drops_comments_and_blanks() {
    let snapshot = create_koi_snapshot();
    let lines = clean_lines(&snapshot);

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("kepid,"));
    assert!(lines.iter().all(|line| !line.starts_with('#')));
}

#[test]
fn test_clean_lines_handles_crlf_and_trims() {
    let snapshot = create_crlf_snapshot();
    let lines = clean_lines(&snapshot);

    assert_eq!(lines, vec!["a,b,c", "1,2,3"]);
}

#[test]
fn test_indented_comment_is_still_a_comment() {
    // Trimming happens before the comment check
    let lines = clean_lines("   # note\na\nb");
    assert_eq!(lines, vec!["a", "b"]);
}

#[test]
fn test_non_empty_lines_keeps_comments() {
    let lines: Vec<&str> = non_empty_lines("# header note\n\n a \n").collect();
    assert_eq!(lines, vec!["# header note", "a"]);
}

#[test]
fn test_split_fields_has_no_quoting() {
    let fields = split_fields(r#"Kepler-1 b,"Smith, J.",5"#);
    assert_eq!(fields, vec!["Kepler-1 b", "\"Smith", " J.\"", "5"]);
}

#[test]
fn test_split_fields_keeps_empty_cells() {
    assert_eq!(split_fields("a,,c,"), vec!["a", "", "c", ""]);
}
