//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `espanel.toml` in the working directory unless a path is given.
//! Every field has a sensible default so the file is optional. Environment
//! variables take precedence over file values, and command-line flags take
//! precedence over both.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use espanel_adapter_http_hyper::HttpConfig;

const DEFAULT_PATH: &str = "espanel.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which device to talk to.
    pub device: DeviceConfig,
    /// Status polling settings.
    pub poller: PollerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Values given on the command line, applied after the environment.
#[derive(Debug, Default)]
pub struct FlagOverrides {
    pub base_url: Option<String>,
    pub backend: Option<Backend>,
}

/// Device settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Base URL of the device (HTTP backend only).
    pub base_url: String,
    /// Backend answering the device API.
    pub backend: Backend,
}

/// Where device calls go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// A real device over HTTP.
    #[default]
    Http,
    /// The in-process simulated device.
    Virtual,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "virtual" => Ok(Self::Virtual),
            other => Err(ConfigError::Validation(format!(
                "unknown backend {other:?}, expected \"http\" or \"virtual\""
            ))),
        }
    }
}

/// Status polling configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Interval between polls, in milliseconds.
    pub interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or `espanel.toml` if present), apply
    /// environment-variable overrides, then the command-line `flags`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed, if an explicit `path`
    /// cannot be read, or if the result fails validation.
    pub fn load(path: Option<&Path>, flags: &FlagOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_required_file(path)?,
            None => Self::from_file(Path::new(DEFAULT_PATH))?,
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.apply_flags(flags);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn from_required_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply overrides looked up by variable name.
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("ESPANEL_URL") {
            self.device.base_url = val;
        }
        if let Some(val) = lookup("ESPANEL_BACKEND") {
            self.device.backend = val.parse()?;
        }
        if let Some(val) = lookup("ESPANEL_POLL_INTERVAL_MS") {
            if let Ok(interval_ms) = val.parse() {
                self.poller.interval_ms = interval_ms;
            }
        }
        if let Some(val) = lookup("ESPANEL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn apply_flags(&mut self, flags: &FlagOverrides) {
        if let Some(base_url) = &flags.base_url {
            self.device.base_url.clone_from(base_url);
        }
        if let Some(backend) = flags.backend {
            self.device.backend = backend;
        }
    }

    /// Check semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for a zero poll interval, or a
    /// missing / non-`http://` base URL when the HTTP backend is selected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poller.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if self.device.backend == Backend::Http && !self.device.base_url.starts_with("http://") {
            return Err(ConfigError::Validation(format!(
                "device base_url must start with http://, got {:?}",
                self.device.base_url
            )));
        }
        Ok(())
    }

    /// Settings for the HTTP device adapter.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            base_url: self.device.base_url.clone(),
        }
    }

    /// The poll interval as a [`Duration`].
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poller.interval_ms)
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            base_url: HttpConfig::default().base_url,
            backend: Backend::Http,
        }
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "espanel=info,espanel_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
