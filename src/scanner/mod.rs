mod options;
mod reader;
mod size;
mod walker;

pub use options::{ScanOptions, MARKDOWN_EXTENSION};
pub use reader::{read_file, FileContents};
pub use size::format_size;
pub use walker::find_markdown_files;
