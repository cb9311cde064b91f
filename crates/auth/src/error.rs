//! Session storage error types

use std::io;
use thiserror::Error;

/// Result type for auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur while persisting session state
///
/// Reading a session never produces one of these: `SessionStore::load`
/// folds every failure into the empty session.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Failed to read or write the backing file
    #[error("failed to access session file '{path}': {source}")]
    IoError {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Backing file exists but is not a JSON object of strings
    #[error("corrupt session file '{path}': {message}")]
    CorruptStore {
        /// Path to the file
        path: String,
        /// Parser message
        message: String,
    },

    /// Token to persist is empty; it could never be loaded back
    #[error("refusing to save a session with an empty token")]
    EmptyToken,

    /// Profile could not be serialized
    #[error("failed to serialize user profile: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AuthError {
    /// Create an IoError
    pub fn io_error(path: impl Into<String>, source: io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a CorruptStore error
    pub fn corrupt_store(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CorruptStore {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = AuthError::io_error(
            "/home/ana/.eval360/session.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert!(err.to_string().contains("session.json"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_corrupt_store() {
        let err = AuthError::corrupt_store("/tmp/session.json", "expected value at line 1");
        assert!(err.to_string().contains("corrupt"));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_empty_token() {
        assert!(AuthError::EmptyToken.to_string().contains("empty token"));
    }
}
