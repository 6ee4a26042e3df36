/// Configuration options for the Markdown file walk.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File name suffix that marks a file as Markdown
    pub extension: String,

    /// Maximum depth to recurse (None = unlimited)
    pub max_depth: Option<usize>,

    /// Follow symbolic links
    pub follow_symlinks: bool,
}

/// Suffix used when no other extension is configured.
pub const MARKDOWN_EXTENSION: &str = ".md";

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: MARKDOWN_EXTENSION.to_string(),
            max_depth: None,
            follow_symlinks: false,
        }
    }
}

impl ScanOptions {
    /// Create a new ScanOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file name suffix to match
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set maximum recursion depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Whether a file name carries the configured suffix.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.extension)
    }
}
