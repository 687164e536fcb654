//! Configuration management for cpename consumers

use crate::logging::{LogConfig, LogFormat};
use cpename_core::{Encoding, Error, Name, Result};
use cpename_match::{MatchOptions, Matcher};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Naming and matching settings
    #[serde(default)]
    pub naming: NamingConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config: {}", e)))
    }

    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Merge with environment variables (CPENAME_ prefix)
    pub fn merge_env(mut self) -> Result<Self> {
        if let Ok(val) = std::env::var("CPENAME_DEFAULT_ENCODING") {
            self.naming.default_encoding = parse_encoding(&val)?;
        }
        if let Ok(val) = std::env::var("CPENAME_IGNORE_CASE") {
            self.naming.ignore_case = val.parse().map_err(|_| {
                Error::Configuration(format!(
                    "CPENAME_IGNORE_CASE must be true or false, got {:?}",
                    val
                ))
            })?;
        }

        // Logging
        if let Ok(val) = std::env::var("CPENAME_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("CPENAME_LOG_FORMAT") {
            self.logging.format = val;
        }

        Ok(self)
    }

    /// Matching options from the naming section
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            ignore_case: self.naming.ignore_case,
        }
    }

    /// A matcher configured from the naming section
    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.match_options())
    }

    /// Parse a name in the configured default encoding
    pub fn unbind(&self, text: &str) -> Result<Name> {
        Name::unbind(text, self.naming.default_encoding)
    }

    /// Render a name in the configured default encoding
    pub fn bind(&self, name: &Name) -> Result<String> {
        name.bind(self.naming.default_encoding)
    }

    /// Subscriber settings from the logging section
    pub fn log_config(&self) -> Result<LogConfig> {
        let format: LogFormat = self.logging.format.parse()?;
        Ok(LogConfig::new().level(self.logging.level.clone()).format(format))
    }
}

fn parse_encoding(value: &str) -> Result<Encoding> {
    toml::Value::String(value.to_string())
        .try_into()
        .map_err(|_| Error::Configuration(format!("Unknown encoding: {}", value)))
}

/// Naming configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Encoding used when none is given (wfn, fs, uri, uri22)
    #[serde(default)]
    pub default_encoding: Encoding,

    /// Compare attribute values case-insensitively
    #[serde(default = "default_true")]
    pub ignore_case: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            default_encoding: Encoding::Fs,
            ignore_case: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (pretty, json, compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_log_format() -> String {
    String::from("pretty")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Builder for constructing Config
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn default_encoding(mut self, encoding: Encoding) -> Self {
        self.config.naming.default_encoding = encoding;
        self
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.config.naming.ignore_case = ignore_case;
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn log_format(mut self, format: impl Into<String>) -> Self {
        self.config.logging.format = format.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
