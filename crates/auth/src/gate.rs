//! Route gate
//!
//! Wraps a protected view. Each evaluation reads the session, asks the access
//! policy, and either hands back the protected content or a redirect to the
//! fallback location. Nothing is cached between evaluations: after a login
//! or logout the next evaluation sees the new session.
//!
//! A missing session and a session with the wrong role are indistinguishable
//! here; both redirect.

use std::fmt;

use tracing::debug;

use crate::policy::{AccessDecision, decide};
use crate::roles::RoleSet;
use crate::session::{Session, SessionStore};
use crate::store::KeyValueStore;

/// Where denied requests are sent
pub const FALLBACK_PATH: &str = "/home";

/// A requested location (path plus optional query string)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Absolute path, e.g. `/dashboard-admin/admin/users`
    pub path: String,
    /// Query string without the leading `?`
    pub query: Option<String>,
}

impl Location {
    /// Location with no query string
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
        }
    }

    /// Parse `path?query`. A missing leading slash is added.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let (path, query) = match s.split_once('?') {
            Some((p, q)) => (p, (!q.is_empty()).then(|| q.to_string())),
            None => (s, None),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self { path, query }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.query {
            Some(q) => write!(f, "{}?{}", self.path, q),
            None => write!(f, "{}", self.path),
        }
    }
}

/// Client-side redirect issued by a denied gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Target path
    pub to: String,
    /// Originally requested location, kept for a post-login return
    pub from: Location,
}

/// Result of evaluating a gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome<T> {
    /// Access permitted, render the content
    Render(T),
    /// Access denied, navigate away
    Redirect(Redirect),
}

impl<T> GateOutcome<T> {
    /// True if the content renders
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }

    /// Protected content, if permitted
    pub fn into_content(self) -> Option<T> {
        match self {
            Self::Render(content) => Some(content),
            Self::Redirect(_) => None,
        }
    }

    /// Redirect, if denied
    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            Self::Render(_) => None,
            Self::Redirect(r) => Some(r),
        }
    }

    /// Map the rendered content
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> GateOutcome<U> {
        match self {
            Self::Render(content) => GateOutcome::Render(f(content)),
            Self::Redirect(r) => GateOutcome::Redirect(r),
        }
    }
}

/// Allow-list attached to a protected route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    /// Roles allowed on the route
    pub allowed_roles: RoleSet,
}

impl RouteGuard {
    /// Guard allowing the given roles
    pub const fn new(allowed_roles: RoleSet) -> Self {
        Self { allowed_roles }
    }

    /// Decide for a session
    pub fn decide(&self, session: &Session) -> AccessDecision {
        decide(session.role(), self.allowed_roles)
    }
}

/// Gate in front of one protected view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGate {
    guard: RouteGuard,
    fallback: String,
}

impl RouteGate {
    /// Gate redirecting to [`FALLBACK_PATH`] on deny
    pub fn new(guard: RouteGuard) -> Self {
        Self {
            guard,
            fallback: FALLBACK_PATH.to_string(),
        }
    }

    /// Use a different fallback path
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// The guard this gate enforces
    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    /// Evaluate against an already loaded session
    pub fn evaluate<T>(&self, session: &Session, requested: Location, content: T) -> GateOutcome<T> {
        let decision = self.guard.decide(session);
        debug!(
            path = %requested,
            role = ?session.role(),
            allowed = %self.guard.allowed_roles,
            %decision,
            "Route gate evaluated"
        );

        match decision {
            AccessDecision::Permit => GateOutcome::Render(content),
            AccessDecision::Deny => GateOutcome::Redirect(Redirect {
                to: self.fallback.clone(),
                from: requested,
            }),
        }
    }

    /// Load the session from `store` and evaluate
    pub fn check<S: KeyValueStore, T>(
        &self,
        store: &SessionStore<S>,
        requested: Location,
        content: T,
    ) -> GateOutcome<T> {
        self.evaluate(&store.load(), requested, content)
    }
}
