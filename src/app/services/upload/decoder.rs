//! Asynchronous decoding of a selected file into text

use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Read a file and decode it as UTF-8
///
/// Both I/O faults and invalid UTF-8 are reported as [`Error::Io`].
pub async fn decode_text(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|e| {
        Error::io(
            format!("File {} is not valid UTF-8 text", path.display()),
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}
