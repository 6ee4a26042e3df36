use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{BrowserError, Result};

use super::options::ScanOptions;

/// Walk `root` and return every Markdown file as a path relative to `root`.
///
/// Siblings are visited in file-name order so the resulting list, and the
/// tree built from it, is identical from one run to the next. Any walk error
/// aborts the scan.
pub fn find_markdown_files(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(BrowserError::PathNotFound(root.to_path_buf()));
    }

    let mut walker = WalkDir::new(root)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name();

    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut files = Vec::new();

    for result in walker {
        let entry = result.map_err(|source| BrowserError::Walk {
            root: root.to_path_buf(),
            source,
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        if !options.matches(&entry.file_name().to_string_lossy()) {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(root) {
            files.push(relative.to_path_buf());
        }
    }

    tracing::info!(root = %root.display(), count = files.len(), "Found markdown files");

    Ok(files)
}
