//! eval360 - Authentication
//!
//! Session lifecycle and role-based access control for the evaluation
//! front-end.
//!
//! # Overview
//!
//! Three roles, gated by explicit allow-lists:
//!
//! | Role | Typical access |
//! |------|----------------|
//! | `Employee` | Own evaluation report |
//! | `Manager` | Dashboard tables and statistics (read-only) |
//! | `Admin` | Everything, including create/edit views |
//!
//! # Components
//!
//! - [`SessionStore`] - token + profile persisted through a [`KeyValueStore`]
//! - [`decide`] - pure access policy
//! - [`RouteGate`] - render-or-redirect for one protected view
//! - [`RouteTable`] - the application's route surface
//! - [`NavShell`] - header links, sidebar and logout
//!
//! # Example
//!
//! ```
//! use eval360_auth::{
//!     Location, MemoryStore, Role, RoleSet, RouteGate, RouteGuard, SessionStore, UserProfile,
//! };
//!
//! let store = SessionStore::new(MemoryStore::new());
//! let gate = RouteGate::new(RouteGuard::new(RoleSet::of(&[Role::Admin])));
//!
//! // Anonymous users are redirected
//! assert!(!gate.check(&store, Location::new("/dashboard-admin"), ()).is_render());
//!
//! store.save("token", &UserProfile::new("1", "ana@example.com", Role::Admin)).unwrap();
//! assert!(gate.check(&store, Location::new("/dashboard-admin"), ()).is_render());
//! ```

mod error;
mod gate;
mod policy;
mod roles;
mod routes;
mod session;
mod shell;
mod store;
mod user;

#[cfg(test)]
mod session_test;

pub use error::{AuthError, Result};

// RBAC types
pub use policy::{AccessDecision, decide};
pub use roles::{Role, RoleSet};
pub use user::UserProfile;

// Session lifecycle
pub use session::{Session, SessionStore, TOKEN_KEY, USER_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};

// Routing
pub use gate::{FALLBACK_PATH, GateOutcome, Location, Redirect, RouteGate, RouteGuard};
pub use routes::{
    DASHBOARD_READERS, DASHBOARD_WRITERS, Navigation, Route, RouteMatch, RouteTable, View,
};

// Navigation shell
pub use shell::{
    BRAND, LOGIN_PATH, NavItem, NavLink, NavShell, NavView, SidebarGroup, SidebarSection,
    landing_for,
};
