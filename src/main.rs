use anyhow::Result;
use clap::Parser;

use mdbrowse::cli::Cli;
use mdbrowse::config::Config;
use mdbrowse::scanner::{find_markdown_files, ScanOptions};
use mdbrowse::tree;
use mdbrowse::tui::{self, App};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    let files = find_markdown_files(&cli.root, &ScanOptions::default())?;

    let config = Config::load(&cli.config)?;

    tracing::debug!(?config, "Loaded configuration");

    let tree = tree::build(&files, &config.ignore_set());

    tracing::info!(root = %cli.root.display(), files = tree.leaf_count(), "Starting TUI");

    tui::run(App::new(cli.root, tree))?;

    Ok(())
}

fn log_level(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("mdbrowse={}", log_level(verbosity, quiet)))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_is_quieter_than_default() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(0, true), "error");
        assert_eq!(log_level(3, true), "error");
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_level(1, false), "info");
        assert_eq!(log_level(2, false), "debug");
        assert_eq!(log_level(9, false), "trace");
    }
}
