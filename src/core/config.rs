//! Configuration management for the autocomplete service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{AutocompleteError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Corpus configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Text file the index is built from
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,
}

/// Query configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Number of results when `top` is absent or unparsable
    #[serde(default = "default_top")]
    pub default_top: usize,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9000
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("shakespeare-complete.txt")
}

fn default_top() -> usize {
    25
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_top: default_top(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AutocompleteError::ConfigError(format!("Failed to read config file: {e}"))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load config, preferring an explicit file when one is given
    ///
    /// Priority order for the file:
    /// 1. `explicit` (the `--config` flag)
    /// 2. AUTOCOMPLETE_CONFIG env var
    /// 3. XDG config file (~/.config/autocomplete/config.toml)
    /// 4. ./autocomplete.toml
    /// 5. Defaults
    pub fn load_from(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::discover_file() {
                Some(path) => Self::from_file(path)?,
                None => Self::default(),
            },
        };

        // Validated by the caller once command-line overrides are applied
        config.merge_env();

        Ok(config)
    }

    /// Locate a config file without an explicit path
    fn discover_file() -> Option<PathBuf> {
        if let Ok(path) = env::var("AUTOCOMPLETE_CONFIG") {
            return Some(PathBuf::from(path));
        }

        let xdg_file = env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(dirs::config_dir)
            .map(|dir| dir.join("autocomplete").join("config.toml"));
        if let Some(path) = xdg_file.filter(|p| p.exists()) {
            return Some(path);
        }

        let local = PathBuf::from("autocomplete.toml");
        local.exists().then_some(local)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("AUTOCOMPLETE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("AUTOCOMPLETE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Corpus configuration
        if let Ok(path) = env::var("AUTOCOMPLETE_CORPUS") {
            self.corpus.path = PathBuf::from(path);
        }

        // Query configuration
        if let Ok(top) = env::var("AUTOCOMPLETE_DEFAULT_TOP") {
            if let Ok(t) = top.parse() {
                self.query.default_top = t;
            }
        }

        // Logging configuration
        if let Ok(format) = env::var("AUTOCOMPLETE_LOG_FORMAT") {
            match format.to_ascii_lowercase().as_str() {
                "json" => self.logging.format = LogFormat::Json,
                "pretty" => self.logging.format = LogFormat::Pretty,
                _ => {}
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AutocompleteError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        if self.server.host.trim().is_empty() {
            return Err(AutocompleteError::ConfigError(
                "Host cannot be empty".to_string(),
            ));
        }

        if self.corpus.path.as_os_str().is_empty() {
            return Err(AutocompleteError::ConfigError(
                "Corpus path cannot be empty".to_string(),
            ));
        }

        if self.query.default_top == 0 {
            return Err(AutocompleteError::ConfigError(
                "Default top must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}", self.listen_addr());
        tracing::info!("  Corpus: {:?}", self.corpus.path);
        tracing::info!("  Default top: {}", self.query.default_top);
        tracing::info!("  Log format: {:?}", self.logging.format);
    }
}
