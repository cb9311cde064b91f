//! Access policy
//!
//! Maps (current role, allowed roles) to a permit/deny decision.

use std::fmt;

use crate::roles::{Role, RoleSet};

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessDecision {
    /// Protected content may render
    Permit,
    /// Caller must redirect away
    Deny,
}

impl AccessDecision {
    /// True for `Permit`
    pub fn is_permit(&self) -> bool {
        matches!(self, Self::Permit)
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permit => write!(f, "permit"),
            Self::Deny => write!(f, "deny"),
        }
    }
}

/// Decide whether `role` may access a route allowing `allowed`
///
/// Denies when there is no role or the role is not in the allow-list. An
/// empty allow-list denies everyone.
pub fn decide(role: Option<Role>, allowed: RoleSet) -> AccessDecision {
    match role {
        Some(role) if allowed.contains(role) => AccessDecision::Permit,
        _ => AccessDecision::Deny,
    }
}
