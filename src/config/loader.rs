//! Configuration file loading with precedence handling.

use crate::form::FormEndpoint;
use crate::tracker::TrackerConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "FOLIO_CONFIG";
/// Environment variable overriding the form endpoint access key.
pub const ENV_ACCESS_KEY: &str = "FOLIO_ACCESS_KEY";
/// Environment variable overriding the submission subject line.
pub const ENV_SUBJECT: &str = "FOLIO_SUBJECT";
/// Environment variable overriding the form endpoint URL.
pub const ENV_ENDPOINT: &str = "FOLIO_ENDPOINT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
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
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Portfolio content file (TOML). Built-in sample content when absent.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Contact form endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Access key sent with every submission.
    #[serde(default)]
    pub access_key: Option<String>,

    /// Subject line sent with every submission.
    #[serde(default)]
    pub subject: Option<String>,

    /// Scroll tracker threshold overrides.
    #[serde(default)]
    pub tracker: Option<TrackerSection>,
}

/// `[tracker]` section. Distances are in terminal rows, delays in milliseconds.
///
/// ```toml
/// [tracker]
/// band_margin = 4
/// settle_delay_ms = 800
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TrackerSection {
    /// Viewport fraction where the probe line sits.
    #[serde(default)]
    pub probe_fraction: Option<f64>,
    /// Rows each section band is shifted up by.
    #[serde(default)]
    pub band_margin: Option<f64>,
    /// Rows from the end that select the last section.
    #[serde(default)]
    pub bottom_snap: Option<f64>,
    /// Scroll offset above which the back-to-top hint shows.
    #[serde(default)]
    pub scroll_top_threshold: Option<f64>,
    /// Programmatic scroll settle delay in milliseconds.
    #[serde(default)]
    pub settle_delay_ms: Option<u64>,
    /// Backstop recompute delay in milliseconds.
    #[serde(default)]
    pub backstop_delay_ms: Option<u64>,
    /// Viewport fraction trimmed from each edge of the intersection root.
    #[serde(default)]
    pub intersection_margin: Option<f64>,
    /// Visible ratio that counts as intersecting.
    #[serde(default)]
    pub intersection_threshold: Option<f64>,
}

impl TrackerSection {
    /// Overlay the fields that are set onto `base`.
    pub fn apply_to(&self, base: TrackerConfig) -> TrackerConfig {
        TrackerConfig {
            probe_fraction: self.probe_fraction.unwrap_or(base.probe_fraction),
            band_margin: self.band_margin.unwrap_or(base.band_margin),
            bottom_snap: self.bottom_snap.unwrap_or(base.bottom_snap),
            scroll_top_threshold: self
                .scroll_top_threshold
                .unwrap_or(base.scroll_top_threshold),
            settle_delay: self
                .settle_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(base.settle_delay),
            backstop_delay: self
                .backstop_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(base.backstop_delay),
            intersection_margin: self
                .intersection_margin
                .unwrap_or(base.intersection_margin),
            intersection_threshold: self
                .intersection_threshold
                .unwrap_or(base.intersection_threshold),
        }
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Portfolio content file; `None` uses the built-in content.
    pub content_path: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Where contact form submissions go.
    pub endpoint: FormEndpoint,
    /// Tracker thresholds, in rows.
    pub tracker: TrackerConfig,
    /// Render with colors.
    pub color: bool,
    /// Section to scroll to on startup.
    pub start_section: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            log_file_path: default_log_path(),
            endpoint: FormEndpoint::default(),
            tracker: TrackerConfig::for_rows(),
            color: true,
            start_section: None,
        }
    }
}

/// CLI flags that take precedence over every other source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--content`
    pub content_path: Option<PathBuf>,
    /// `--endpoint`
    pub endpoint: Option<String>,
    /// `--no-color`
    pub no_color: bool,
    /// `--section`
    pub start_section: Option<String>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/folio/folio.log` on Unix-like systems, or the
/// platform equivalent. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("folio").join("folio.log")
    } else {
        PathBuf::from("folio.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/folio/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
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
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FOLIO_CONFIG` environment variable
/// 3. Default path `~/.config/folio/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `FOLIO_CONFIG` is set to something that is not valid UTF-8.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(ENV_CONFIG) {
        Ok(env_path) if !env_path.is_empty() => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        _ => {}
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        content_path: config.content_path.or(defaults.content_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        endpoint: FormEndpoint {
            url: config.endpoint.unwrap_or(defaults.endpoint.url),
            access_key: config.access_key.unwrap_or(defaults.endpoint.access_key),
            subject: config.subject.unwrap_or(defaults.endpoint.subject),
        },
        tracker: match config.tracker {
            Some(section) => section.apply_to(defaults.tracker),
            None => defaults.tracker,
        },
        ..defaults
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `FOLIO_ACCESS_KEY`, `FOLIO_SUBJECT` and `FOLIO_ENDPOINT`. Empty
/// values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

    if let Some(key) = var(ENV_ACCESS_KEY) {
        config.endpoint.access_key = key;
    }
    if let Some(subject) = var(ENV_SUBJECT) {
        config.endpoint.subject = subject;
    }
    if let Some(url) = var(ENV_ENDPOINT) {
        config.endpoint.url = url;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(path) = cli.content_path {
        config.content_path = Some(path);
    }
    if let Some(url) = cli.endpoint {
        config.endpoint.url = url;
    }
    if cli.no_color {
        config.color = false;
    }
    if let Some(section) = cli.start_section {
        config.start_section = Some(section);
    }
    config
}

/// Full chain: file lookup, merge, env, CLI.
///
/// # Errors
///
/// Propagates [`load_config_with_precedence`] errors.
pub fn resolve(
    config_path: Option<PathBuf>,
    cli: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let config = apply_env_overrides(merge_config(file));
    Ok(apply_cli_overrides(config, cli))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
