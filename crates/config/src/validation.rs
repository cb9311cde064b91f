//! Configuration validation

use crate::Config;
use crate::error::{ConfigError, Result};

/// Validate the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_api_url(&config.api.url)?;
    if config.api.timeout_secs == 0 {
        return Err(ConfigError::invalid_value(
            "api",
            "timeout_secs",
            "must be greater than 0",
        ));
    }
    if let Some(ref path) = config.session.path
        && path.as_os_str().is_empty()
    {
        return Err(ConfigError::invalid_value("session", "path", "must not be empty"));
    }
    Ok(())
}

/// Backend URL must be an absolute http(s) URL
pub fn validate_api_url(url: &str) -> Result<()> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| {
            ConfigError::invalid_value("api", "url", format!("'{url}' must start with http:// or https://"))
        })?;
    if rest.trim_matches('/').is_empty() {
        return Err(ConfigError::invalid_value("api", "url", format!("'{url}' has no host")));
    }
    Ok(())
}
