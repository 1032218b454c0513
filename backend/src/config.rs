//! Service configuration.
//!
//! Settings come from a TOML file (see `seat_vacancy.toml`) with environment
//! variables layered on top. The narrative API key is only ever read from the
//! environment.
//!
//! # Environment Variables
//!
//! - `SEAT_VACANCY_CONFIG`: explicit config file path
//! - `HOST`, `PORT`: bind address
//! - `CHART_SOURCE`: `file` | `local`
//! - `CHART_DIR`: directory of scraper dumps
//! - `GEMINI_API_KEY`: narrative service key
//! - `GEMINI_MODEL`, `GEMINI_ENDPOINT`: narrative model and API base

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::charts::ChartSourceType;
use crate::narrative::gemini::{
    GeminiConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
use crate::services::narrative::{NarrativeFormatter, DEFAULT_FRAGMENT_CAP};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub charts: ChartSettings,
    #[serde(default)]
    pub narrative: NarrativeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where chart snapshots come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(rename = "type", default = "default_chart_source")]
    pub source_type: ChartSourceType,
    #[serde(default = "default_chart_directory")]
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_fragment_cap")]
    pub fragment_cap: usize,
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_chart_source() -> ChartSourceType {
    ChartSourceType::File
}

fn default_chart_directory() -> PathBuf {
    PathBuf::from("charts")
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_fragment_cap() -> usize {
    DEFAULT_FRAGMENT_CAP
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            source_type: default_chart_source(),
            directory: default_chart_directory(),
        }
    }
}

impl Default for NarrativeSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            fragment_cap: default_fragment_cap(),
            api_key: None,
        }
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}

/// Non-empty value of an environment variable.
fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Parse a TOML document. Missing sections and keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            path: path.as_ref().display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve the config file, then apply environment overrides.
    ///
    /// Looks at `SEAT_VACANCY_CONFIG` first, then `seat_vacancy.toml`,
    /// `backend/seat_vacancy.toml` and `../seat_vacancy.toml`. Without any
    /// file the defaults are used.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env_value("SEAT_VACANCY_CONFIG") {
            Some(path) => Self::from_file(path)?,
            None => {
                let search_paths = [
                    PathBuf::from("seat_vacancy.toml"),
                    PathBuf::from("backend/seat_vacancy.toml"),
                    PathBuf::from("../seat_vacancy.toml"),
                ];
                match search_paths.iter().find(|p| p.exists()) {
                    Some(path) => {
                        log::info!("Using configuration from {}", path.display());
                        Self::from_file(path)?
                    }
                    None => Self::default(),
                }
            }
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Layer environment variables over the current values.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(host) = env_value("HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_value("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| invalid("PORT", format!("'{}' is not a valid port number", port)))?;
        }
        if let Some(kind) = env_value("CHART_SOURCE") {
            self.charts.source_type = kind.parse().map_err(|e: String| invalid("CHART_SOURCE", e))?;
        }
        if let Some(dir) = env_value("CHART_DIR") {
            self.charts.directory = PathBuf::from(dir);
        }
        if let Some(model) = env_value("GEMINI_MODEL") {
            self.narrative.model = model;
        }
        if let Some(endpoint) = env_value("GEMINI_ENDPOINT") {
            self.narrative.endpoint = endpoint;
        }
        self.narrative.api_key = env_value("GEMINI_API_KEY");
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.narrative.fragment_cap == 0 {
            return Err(invalid("narrative.fragment_cap", "must be at least 1"));
        }
        if self.narrative.timeout_secs == 0 {
            return Err(invalid("narrative.timeout_secs", "must be at least 1"));
        }
        if self.narrative.model.trim().is_empty() {
            return Err(invalid("narrative.model", "must not be empty"));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| invalid("server.host", e.to_string()))
    }

    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            endpoint: self.narrative.endpoint.clone(),
            model: self.narrative.model.clone(),
            api_key: self.narrative.api_key.clone(),
            timeout: Duration::from_secs(self.narrative.timeout_secs),
        }
    }

    pub fn formatter(&self) -> NarrativeFormatter {
        NarrativeFormatter::new(self.narrative.fragment_cap)
    }
}
