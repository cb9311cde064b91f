//! eval360 Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! An empty file is a valid config: the CLI talks to `http://localhost:3000`
//! and keeps its session in `~/.eval360/session.json`.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use eval360_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[api]\nurl = \"https://rrhh.example.com\"").unwrap();
//! assert_eq!(config.api.base_url(), "https://rrhh.example.com");
//! ```
//!
//! # Example Config
//!
//! ```toml
//! [api]
//! url = "http://localhost:3000"
//! timeout_secs = 30
//!
//! [session]
//! path = "~/.eval360/session.json"
//!
//! [log]
//! level = "warn"
//! format = "console"
//! ```

mod api;
mod error;
mod logging;
mod session;
mod validation;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use api::{API_URL_ENV, ApiConfig, DEFAULT_API_URL};
pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use session::SessionConfig;

/// Root configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Backend connection
    pub api: ApiConfig,

    /// Session persistence
    pub session: SessionConfig,

    /// Logging configuration
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Load from `path` if it exists, otherwise defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Default config file location (`~/.eval360/config.toml`)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".eval360").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".eval360/config.toml"))
    }

    /// Apply environment overrides from the process environment
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; currently only `EVAL360_API_URL`
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            validation::validate_api_url(url.trim())?;
            self.api.url = url.trim().to_string();
        }
        Ok(self)
    }

    /// Parse configuration from a TOML string
    ///
    /// Prefer using the `FromStr` trait implementation.
    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.api.url, DEFAULT_API_URL);
        assert_eq!(config.log.level, LogLevel::Warn);
        assert!(config.session.path.is_none());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[api]
url = "https://rrhh.example.com"
timeout_secs = 10

[session]
path = "/tmp/eval360/session.json"

[log]
level = "debug"
format = "json"
"#;
        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.api.url, "https://rrhh.example.com");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(
            config.session.file_path(),
            PathBuf::from("/tmp/eval360/session.json")
        );
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_str("[api\nurl = 1");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = Config::from_str("[api]\nurl = \"localhost:3000\"");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { section: "api", field: "url", .. })
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Config::from_str("[api]\ntimeout_secs = 0").is_err());
    }

    #[test]
    fn test_env_override() {
        let config = Config::default()
            .with_overrides(|key| (key == API_URL_ENV).then(|| "https://env.example.com".to_string()))
            .unwrap();
        assert_eq!(config.api.url, "https://env.example.com");
    }

    #[test]
    fn test_blank_env_override_ignored() {
        let config = Config::default()
            .with_overrides(|_| Some("  ".to_string()))
            .unwrap();
        assert_eq!(config.api.url, DEFAULT_API_URL);
    }

    #[test]
    fn test_invalid_env_override() {
        let result = Config::default().with_overrides(|_| Some("nope".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nurl = \"http://127.0.0.1:4000\"").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.api.url, "http://127.0.0.1:4000");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::from_file(&missing),
            Err(ConfigError::IoError { .. })
        ));
        assert_eq!(Config::load_or_default(&missing).unwrap(), Config::default());
    }
}
