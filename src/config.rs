// Configuration for the issues client and cache.
// Loads an optional JSON file, falling back to built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{IssuesError, Result};

/// Endpoint serving the issues feed.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwcq6COyb4e-Cr5XoUChvGNLwN6_vQAEEsJyuLg0q6coddgNynwkudjo24tMs5z7Whj/exec";

const DEFAULT_TTL_SECS: u64 = 5 * 60;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL of the issues feed.
    pub endpoint: String,
    /// How long a fetched feed is served from memory.
    pub ttl_secs: u64,
    /// Request timeout for a single fetch.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            ttl_secs: DEFAULT_TTL_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// read if present, otherwise defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(IssuesError::Config("endpoint must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(IssuesError::Config("timeout_secs must be > 0".into()));
        }
        Ok(())
    }

    /// Cache TTL as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Per-user config file location (~/.config/issue-desk/config.json on Linux).
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "issue-desk").map(|dirs| dirs.config_dir().join("config.json"))
}
