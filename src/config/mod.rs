//! Configuration loading with precedence handling.
//!
//! Settings come from, lowest to highest: hardcoded defaults, the TOML
//! config file, the `TEMPLEDIT_CONFIG` environment variable (file
//! location only), and CLI flags. A missing config file is not an
//! error; a malformed one is.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are
/// used. Corresponds to `~/.config/templedit/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Maximum number of history snapshots kept per editing session.
    #[serde(default)]
    pub history_capacity: Option<usize>,

    /// Pretty-print exported JSON.
    #[serde(default)]
    pub pretty_export: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// History snapshot cap per session.
    pub history_capacity: usize,
    /// Pretty-print exported JSON.
    pub pretty_export: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            history_capacity: crate::history::DEFAULT_CAPACITY,
            pretty_export: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/templedit/templedit.log` on Unix-like
/// systems. If the state directory cannot be determined, falls back to
/// the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("templedit").join("templedit.log")
    } else {
        PathBuf::from("templedit.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/templedit/config.toml` on Unix, the appropriate
/// path on other platforms. `None` if the home directory cannot be
/// determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("templedit").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults). Returns `Err` if the file exists but cannot be read or
/// parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence for the file location (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TEMPLEDIT_CONFIG` environment variable
/// 3. Default path `~/.config/templedit/config.toml`
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("TEMPLEDIT_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a config file into defaults to create a resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        history_capacity: config.history_capacity.unwrap_or(defaults.history_capacity),
        pretty_export: config.pretty_export.unwrap_or(defaults.pretty_export),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to a resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually
/// set are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    history_capacity: Option<usize>,
    compact: bool,
) -> ResolvedConfig {
    if let Some(capacity) = history_capacity {
        config.history_capacity = capacity;
    }

    if compact {
        config.pretty_export = false;
    }

    config
}
