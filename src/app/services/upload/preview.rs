//! Line-oriented preview of decoded upload text

use crate::app::models::TextPreview;
use crate::app::services::record_parser::non_empty_lines;

impl TextPreview {
    /// Build a preview from decoded text
    ///
    /// Lines are trimmed and empty ones dropped. The first `limit` survivors
    /// form the preview and every survivor after the header line counts as a
    /// data row. Content is not checked for well-formed delimited data.
    pub fn from_text(text: &str, limit: usize) -> Self {
        let lines: Vec<&str> = non_empty_lines(text).collect();

        Self {
            preview: lines
                .iter()
                .take(limit)
                .copied()
                .collect::<Vec<_>>()
                .join("\n"),
            row_count: lines.len().saturating_sub(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.preview.is_empty()
    }
}
