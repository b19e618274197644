//! Configuration file loading
//!
//! A config file holds the same settings as the command line. YAML is the
//! default format; a `.toml` extension selects TOML. Every field is
//! optional, and values given on the command line win over the file.

#![allow(clippy::result_large_err)]

use crate::errors::{invalid_config, io_error, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}' (expected text or json)", other)),
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report lines
    #[default]
    Text,
    /// The structured diff as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

/// A log level as written by the user: a numeric level (10 debug, 20 info,
/// 30 warning, 40 error) or a level name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LogLevelSetting {
    Number(u32),
    Name(String),
}

impl LogLevelSetting {
    /// Resolve to a tracing level filter
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for an unknown level name.
    pub fn to_level_filter(&self) -> Result<LevelFilter> {
        match self {
            LogLevelSetting::Number(n) => Ok(match n {
                0..=9 => LevelFilter::TRACE,
                10..=19 => LevelFilter::DEBUG,
                20..=29 => LevelFilter::INFO,
                30..=39 => LevelFilter::WARN,
                _ => LevelFilter::ERROR,
            }),
            LogLevelSetting::Name(name) => match name.to_ascii_lowercase().as_str() {
                "trace" | "notset" => Ok(LevelFilter::TRACE),
                "debug" => Ok(LevelFilter::DEBUG),
                "info" => Ok(LevelFilter::INFO),
                "warn" | "warning" => Ok(LevelFilter::WARN),
                "error" | "critical" => Ok(LevelFilter::ERROR),
                "off" => Ok(LevelFilter::OFF),
                other => Err(invalid_config(format!("unknown log level '{}'", other))),
            },
        }
    }
}

impl FromStr for LogLevelSetting {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().parse::<u32>() {
            Ok(n) => LogLevelSetting::Number(n),
            Err(_) => LogLevelSetting::Name(s.trim().to_string()),
        })
    }
}

impl fmt::Display for LogLevelSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevelSetting::Number(n) => write!(f, "{}", n),
            LogLevelSetting::Name(name) => f.write_str(name),
        }
    }
}

/// Settings shared by the config file and the command line
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffConfig {
    /// Source files or glob patterns
    pub files: Vec<String>,
    pub loglevel: Option<LogLevelSetting>,
    pub logformat: Option<LogFormat>,
    /// Top-level key holding the record array
    pub records_key: Option<String>,
    /// Field naming a record in the report
    pub id_field: Option<String>,
    /// Print old and new values of changed fields
    pub show_values: Option<bool>,
    /// Accept designs without a `name` field
    pub allow_missing_name: Option<bool>,
    pub format: Option<OutputFormat>,
    /// Verbosity count, as with repeated `-v`
    pub verbose: Option<u8>,
}

impl DiffConfig {
    /// Layer `overrides` on top of `self`.
    ///
    /// Every value set in `overrides` wins. `files` from `overrides` replace
    /// the configured files only when non-empty.
    pub fn merge(self, overrides: DiffConfig) -> DiffConfig {
        DiffConfig {
            files: if overrides.files.is_empty() {
                self.files
            } else {
                overrides.files
            },
            loglevel: overrides.loglevel.or(self.loglevel),
            logformat: overrides.logformat.or(self.logformat),
            records_key: overrides.records_key.or(self.records_key),
            id_field: overrides.id_field.or(self.id_field),
            show_values: overrides.show_values.or(self.show_values),
            allow_missing_name: overrides.allow_missing_name.or(self.allow_missing_name),
            format: overrides.format.or(self.format),
            verbose: overrides.verbose.or(self.verbose),
        }
    }
}

/// Load a config file, choosing the format by extension
///
/// # Errors
///
/// - `NotFound` / `Io` - the file cannot be read
/// - `InvalidConfig` - the content does not parse or has unknown keys
pub fn load_config(path: &Path) -> Result<DiffConfig> {
    let content = fs::read_to_string(path).map_err(|e| io_error("load_config", path, e))?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let config = if is_toml {
        parse_toml_config(&content)
    } else {
        parse_yaml_config(&content)
    }
    .map_err(|e| e.with_path(path.display().to_string()))?;

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Parse YAML config content. An empty document is an empty config.
pub fn parse_yaml_config(content: &str) -> Result<DiffConfig> {
    if content.trim().is_empty() {
        return Ok(DiffConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| invalid_config(format!("YAML parse error: {}", e)))
}

/// Parse TOML config content
pub fn parse_toml_config(content: &str) -> Result<DiffConfig> {
    toml::from_str(content).map_err(|e| invalid_config(format!("TOML parse error: {}", e)))
}
