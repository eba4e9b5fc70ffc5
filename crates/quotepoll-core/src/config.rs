//! Configuration loading for the poll endpoint.
//!
//! The config file lives at `$SNAP_DATA/config.toml` with a single
//! recognized key:
//!
//! ```toml
//! endpoint = "https://quotes.example.test/quotes"
//! ```
//!
//! Loading is strictly best-effort: any read or parse failure falls back to
//! the default endpoint supplied by the caller. The endpoint URL is passed
//! through as-is, with no well-formedness validation.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Built-in endpoint used when no config file can be loaded.
pub const DEFAULT_ENDPOINT: &str = "https://thesimpsonsquoteapi.glitch.me:443/quotes";

/// File name looked up inside `$SNAP_DATA`.
pub const CONFIG_FILE: &str = "config.toml";

/// Resolved poll configuration, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub endpoint: String,
}

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Resolves the config file path from the `SNAP_DATA` environment variable.
///
/// When the variable is unset the directory component is empty and the path
/// degrades to a bare `config.toml` relative to the working directory.
pub fn config_path() -> PathBuf {
    let snap_dir = env::var_os("SNAP_DATA")
        .map(PathBuf::from)
        .unwrap_or_default();
    snap_dir.join(CONFIG_FILE)
}

/// Loads the configuration from `$SNAP_DATA/config.toml`.
pub fn load() -> Result<Config, ConfigError> {
    load_from(&config_path())
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read and
/// [`ConfigError::Parse`] when it is not valid TOML or lacks the `endpoint`
/// key.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Loads the configuration, substituting `default_endpoint` on any failure.
///
/// The fallback is logged so a misconfigured install is visible in the
/// output rather than silently polling the wrong place.
pub fn load_or(default_endpoint: &str) -> Config {
    match load() {
        Ok(config) => config,
        Err(error) => {
            warn!(%error, "error loading config");
            warn!(endpoint = default_endpoint, "using default endpoint");
            Config {
                endpoint: default_endpoint.to_owned(),
            }
        }
    }
}
