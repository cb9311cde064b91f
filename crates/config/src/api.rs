//! API configuration
//!
//! Where the evaluation backend lives.

use serde::Deserialize;

/// Environment variable overriding `[api] url`
pub const API_URL_ENV: &str = "EVAL360_API_URL";

/// Default backend URL
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// API client configuration
///
/// # Example
///
/// ```toml
/// [api]
/// url = "https://evaluaciones.example.com"
/// timeout_secs = 15
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL, without the `/api` suffix
    /// Default: "http://localhost:3000"
    pub url: String,

    /// Request timeout in seconds
    /// Default: 30
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.url, "http://localhost:3000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_custom_url() {
        let toml = r#"
url = "https://evaluaciones.example.com/"
"#;
        let config: ApiConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url(), "https://evaluaciones.example.com");
        assert_eq!(config.timeout_secs, 30);
    }
}
