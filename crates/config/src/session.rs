//! Session storage configuration

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Where the signed-in session is persisted
///
/// # Example
///
/// ```toml
/// [session]
/// path = "~/.eval360/session.json"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Session file path
    /// Default: "~/.eval360/session.json" (expanded at runtime)
    pub path: Option<PathBuf>,
}

impl SessionConfig {
    /// Session file path, expanding ~ to the home directory
    pub fn file_path(&self) -> PathBuf {
        if let Some(ref path) = self.path {
            expand_tilde(path)
        } else {
            dirs::home_dir()
                .map(|h| h.join(".eval360").join("session.json"))
                .unwrap_or_else(|| PathBuf::from(".eval360/session.json"))
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    path.to_str()
        .and_then(|s| s.strip_prefix("~/"))
        .and_then(|stripped| dirs::home_dir().map(|home| home.join(stripped)))
        .unwrap_or_else(|| path.to_path_buf())
}
