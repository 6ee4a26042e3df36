//! mdbrowse - A terminal browser for directories of Markdown files
//!
//! This crate provides:
//! - A tree of Markdown files built from a directory walk
//! - A line-oriented Markdown styler for terminal previews
//! - An interactive TUI tying the two together

pub mod cli;
pub mod config;
pub mod error;
pub mod markdown;
pub mod scanner;
pub mod tree;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{BrowserError, Result};
