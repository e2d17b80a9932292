//! Runtime configuration.
//!
//! Values come from CLI flags with environment-variable fallbacks
//! (`TASKLIST_DATA_FILE`, `TASKLIST_HOST`, `TASKLIST_PORT`); the defaults
//! below apply when neither is set.

use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "tasks.json";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 1220;

/// Configuration shared by the CLI and the HTTP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the backing JSON task file.
    pub data_file: PathBuf,
    /// Bind address for the HTTP server.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
