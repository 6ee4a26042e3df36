use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Directory browsed when no root is given.
pub const DEFAULT_ROOT: &str = "pages";

/// mdbrowse - Browse a directory of Markdown notes in the terminal
#[derive(Parser, Debug)]
#[command(name = "mdbrowse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the Markdown files
    #[arg(default_value = DEFAULT_ROOT, value_name = "DIR")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, value_name = "PATH")]
    pub config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
