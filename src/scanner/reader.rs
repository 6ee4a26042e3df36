use std::fs;
use std::path::Path;

use crate::error::{BrowserError, Result};

/// Contents of a file opened for preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContents {
    pub text: String,
    /// Size in bytes as read from disk
    pub size: u64,
}

/// Read a whole file as text.
///
/// Only a failed read is an error. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD.
pub fn read_file(path: &Path) -> Result<FileContents> {
    let bytes = fs::read(path).map_err(|source| BrowserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let size = bytes.len() as u64;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    Ok(FileContents { text, size })
}
