//! Error types for the REST client

use eval360_auth::AuthError;
use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Message used when the backend gives no usable error message
pub const UNKNOWN_ERROR: &str = "Error desconocido";

/// Errors that can occur when talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failed, timed out or was reset
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        /// Endpoint path
        endpoint: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Input rejected before any request was made
    #[error("invalid {field}: {message}")]
    Validation {
        /// Offending field
        field: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// Authenticated endpoint called without a token
    #[error("not signed in")]
    NotAuthenticated,

    /// Persisting the session failed
    #[error(transparent)]
    Session(#[from] AuthError),
}

impl ApiError {
    /// Create a Validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a Decode error
    pub fn decode(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// HTTP status, if the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The token was rejected or is missing
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::NotAuthenticated) || self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = ApiError::Server {
            status: 401,
            message: "Credenciales inválidas".into(),
        };
        assert_eq!(err.to_string(), "server error (401): Credenciales inválidas");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_validation_error() {
        let err = ApiError::validation("email", "Formato de email no válido");
        assert!(err.to_string().contains("email"));
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_not_authenticated() {
        assert!(ApiError::NotAuthenticated.is_unauthorized());
    }
}
