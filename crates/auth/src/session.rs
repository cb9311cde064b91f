//! Client-held session
//!
//! A session is the pair (token, profile) written after a successful login
//! and removed on logout. It has no expiry on the client side: a token stays
//! in place until the user logs out, whatever its lifetime on the server.
//!
//! # Storage layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `token` | raw bearer token |
//! | `user` | JSON-encoded [`UserProfile`] |

use tracing::{debug, info, warn};

use crate::error::{AuthError, Result};
use crate::roles::Role;
use crate::store::KeyValueStore;
use crate::user::UserProfile;

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key for the JSON user profile
pub const USER_KEY: &str = "user";

/// Current session as read from storage
///
/// `load` only ever produces sessions with both fields set or both empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Bearer token for API calls
    pub token: Option<String>,
    /// Signed-in user
    pub user: Option<UserProfile>,
}

impl Session {
    /// The anonymous session
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an authenticated session
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    /// True when both token and profile are present
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Role of the signed-in user, if any
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Reads and writes the session through a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Wrap a key-value backend
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Access the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the current session
    ///
    /// Never fails. A missing entry, an unreadable backend, malformed JSON or
    /// an unknown role all produce the empty session.
    pub fn load(&self) -> Session {
        let token = match self.storage.get(TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => return Session::empty(),
            Err(e) => {
                warn!(error = %e, "Session storage unreadable, treating as signed out");
                return Session::empty();
            }
        };

        let raw_user = match self.storage.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Token present without user profile");
                return Session::empty();
            }
            Err(e) => {
                warn!(error = %e, "Session storage unreadable, treating as signed out");
                return Session::empty();
            }
        };

        match serde_json::from_str::<UserProfile>(&raw_user) {
            Ok(user) => Session::new(token, user),
            Err(e) => {
                warn!(error = %e, "Malformed stored user profile, treating as signed out");
                Session::empty()
            }
        }
    }

    /// Persist a new session
    ///
    /// Writes the token first, then the profile. There is no rollback: if the
    /// profile write fails the new token stays written. An empty token is
    /// rejected before anything is written, since `load` reads it as signed out.
    pub fn save(&self, token: &str, user: &UserProfile) -> Result<()> {
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }
        let json = serde_json::to_string(user)?;
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &json)?;

        info!(user_id = %user.id, role = %user.role, "Session saved");
        Ok(())
    }

    /// Remove token and profile
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;

        debug!("Session cleared");
        Ok(())
    }
}
