use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bare file names (not paths) hidden from the tree
    #[serde(rename = "ignoreFiles")]
    pub ignore_files: Vec<String>,
}

impl Config {
    /// Read and parse a JSON config file.
    ///
    /// Both a missing file and malformed JSON are errors; the caller treats
    /// them as fatal at startup.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config =
            serde_json::from_str(&data).map_err(|source| ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            ignored = config.ignore_files.len(),
            "Config parsed"
        );

        Ok(config)
    }

    /// The ignore set consulted while building the tree.
    pub fn ignore_set(&self) -> HashSet<String> {
        self.ignore_files.iter().cloned().collect()
    }
}
