//! Shared input and configuration loading for CLI commands

use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::ParserConfig;
use crate::{Error, Result};

/// Read report text from a file, or from stdin when no path was given
pub fn read_input(input_path: Option<&Path>) -> Result<String> {
    match input_path {
        Some(path) => {
            debug!("reading report from {}", path.display());
            std::fs::read_to_string(path)
                .map_err(|e| Error::io(format!("failed to read report file {}", path.display()), e))
        }
        None => {
            debug!("reading report from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| Error::io("failed to read report from stdin", e))?;
            Ok(buffer)
        }
    }
}

/// Load parser configuration from a JSON file, or built-in defaults
pub fn load_config(config_path: Option<&PathBuf>) -> Result<ParserConfig> {
    match config_path {
        Some(path) => ParserConfig::from_json_file(path),
        None => Ok(ParserConfig::default()),
    }
}
