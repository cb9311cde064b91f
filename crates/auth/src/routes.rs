//! Application route table
//!
//! Static description of every view the front-end can show, which of them
//! are protected, and by which allow-list. Patterns are `/`-separated
//! segments; a segment starting with `:` binds a parameter.
//!
//! | Path | View | Allowed |
//! |------|------|---------|
//! | `/dashboard-admin` | Statistics | Admin, Manager |
//! | `/dashboard-admin/admin/users` | UserTable | Admin, Manager |
//! | `/dashboard-admin/admin/users/create` | CreateUser | Admin |
//! | `/dashboard-admin/admin/evaluations/create` | CreateEvaluation | Admin |
//! | ... | ... | ... |

use std::collections::HashMap;
use std::fmt;

use crate::gate::{GateOutcome, Location, Redirect, RouteGate, RouteGuard};
use crate::roles::{Role, RoleSet};
use crate::session::Session;

/// Roles allowed on the read-only dashboard views
pub const DASHBOARD_READERS: RoleSet = RoleSet::of(&[Role::Admin, Role::Manager]);

/// Roles allowed on the dashboard's create/edit views
pub const DASHBOARD_WRITERS: RoleSet = RoleSet::of(&[Role::Admin]);

/// Views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Public landing page (no header)
    Landing,
    /// Home page, also the redirect fallback
    Home,
    /// Registration form
    Register,
    /// Login form
    Login,
    /// Signed-in employee's own evaluation report
    EmployeeProfile,
    /// Static documentation
    Documentation,
    /// Aggregate statistics charts
    Statistics,
    /// User table
    UserTable,
    /// Create user form
    CreateUser,
    /// Edit user form
    EditUser,
    /// Evaluation table
    EvaluationTable,
    /// Multi-criteria evaluation form
    CreateEvaluation,
    /// Edit evaluation form
    EditEvaluation,
}

impl View {
    /// Page title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Evaluaciones 360°",
            Self::Home => "Inicio",
            Self::Register => "Registro de usuarios",
            Self::Login => "Iniciar Sesión",
            Self::EmployeeProfile => "Perfil del empleado",
            Self::Documentation => "Documentación",
            Self::Statistics => "Estadísticas",
            Self::UserTable => "Usuarios",
            Self::CreateUser => "Crear usuario",
            Self::EditUser => "Editar usuario",
            Self::EvaluationTable => "Evaluaciones",
            Self::CreateEvaluation => "Evaluación de Empleados",
            Self::EditEvaluation => "Editar evaluación",
        }
    }

    /// Whether the navigation header is shown on this view
    pub fn shows_header(&self) -> bool {
        !matches!(self, Self::Landing)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One entry of the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Path pattern
    pub pattern: &'static str,
    /// View rendered on match
    pub view: View,
    /// Allow-list, `None` for public routes
    pub guard: Option<RouteGuard>,
}

impl Route {
    /// Public route
    pub const fn public(pattern: &'static str, view: View) -> Self {
        Self {
            pattern,
            view,
            guard: None,
        }
    }

    /// Route protected by an allow-list
    pub const fn protected(pattern: &'static str, view: View, allowed: RoleSet) -> Self {
        Self {
            pattern,
            view,
            guard: Some(RouteGuard::new(allowed)),
        }
    }

    /// Match a path, returning bound parameters
    fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let mut pattern = segments(self.pattern);
        let mut actual = segments(path);
        let mut params = HashMap::new();

        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return Some(params),
                (Some(p), Some(a)) => {
                    if let Some(name) = p.strip_prefix(':') {
                        params.insert(name.to_string(), a.to_string());
                    } else if p != a {
                        return None;
                    }
                }
                _ => return None,
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// A resolved route with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched route
    pub route: Route,
    /// Requested location
    pub location: Location,
    /// Bound `:name` parameters
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    /// Matched view
    pub fn view(&self) -> View {
        self.route.view
    }

    /// Bound parameter by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Result of navigating to a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Render the matched view
    Render(RouteMatch),
    /// Gate denied access
    Redirect(Redirect),
    /// No route matches the path
    NotFound(Location),
}

/// Ordered list of routes; first match wins
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::app()
    }
}

impl RouteTable {
    /// Empty table
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a route
    #[must_use]
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// The application's route surface
    pub fn app() -> Self {
        Self::new()
            .route(Route::public("/", View::Landing))
            .route(Route::public("/home", View::Home))
            .route(Route::public("/register", View::Register))
            .route(Route::public("/login", View::Login))
            .route(Route::public("/employee", View::EmployeeProfile))
            .route(Route::public("/documentation", View::Documentation))
            .route(Route::protected("/dashboard-admin", View::Statistics, DASHBOARD_READERS))
            .route(Route::protected(
                "/dashboard-admin/admin/users",
                View::UserTable,
                DASHBOARD_READERS,
            ))
            .route(Route::protected(
                "/dashboard-admin/admin/users/create",
                View::CreateUser,
                DASHBOARD_WRITERS,
            ))
            .route(Route::protected(
                "/dashboard-admin/admin/users/edit/:id",
                View::EditUser,
                DASHBOARD_WRITERS,
            ))
            .route(Route::protected(
                "/dashboard-admin/admin/evaluations",
                View::EvaluationTable,
                DASHBOARD_READERS,
            ))
            .route(Route::protected(
                "/dashboard-admin/admin/evaluations/create",
                View::CreateEvaluation,
                DASHBOARD_WRITERS,
            ))
            .route(Route::protected(
                "/dashboard-admin/admin/evaluations/edit/:id",
                View::EditEvaluation,
                DASHBOARD_WRITERS,
            ))
            .route(Route::protected(
                "/dashboard-admin/admin/statistics",
                View::Statistics,
                DASHBOARD_READERS,
            ))
    }

    /// All routes in match order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a location without checking access
    pub fn resolve(&self, location: &Location) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            route.matches(&location.path).map(|params| RouteMatch {
                route: route.clone(),
                location: location.clone(),
                params,
            })
        })
    }

    /// Resolve a location and run its gate against `session`
    pub fn navigate(&self, session: &Session, location: Location) -> Navigation {
        let Some(matched) = self.resolve(&location) else {
            return Navigation::NotFound(location);
        };

        let Some(guard) = matched.route.guard else {
            return Navigation::Render(matched);
        };

        let requested = matched.location.clone();
        match RouteGate::new(guard).evaluate(session, requested, matched) {
            GateOutcome::Render(matched) => Navigation::Render(matched),
            GateOutcome::Redirect(redirect) => Navigation::Redirect(redirect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_public_routes() {
        let table = RouteTable::app();
        let m = table.resolve(&Location::new("/login")).unwrap();
        assert_eq!(m.view(), View::Login);
        assert!(m.route.guard.is_none());

        let m = table.resolve(&Location::new("/")).unwrap();
        assert_eq!(m.view(), View::Landing);
        assert!(!m.view().shows_header());
    }

    #[test]
    fn test_resolve_trailing_slash() {
        let table = RouteTable::app();
        let m = table.resolve(&Location::new("/dashboard-admin/")).unwrap();
        assert_eq!(m.view(), View::Statistics);
    }

    #[test]
    fn test_resolve_binds_params() {
        let table = RouteTable::app();
        let m = table
            .resolve(&Location::parse("/dashboard-admin/admin/users/edit/64f0c2"))
            .unwrap();
        assert_eq!(m.view(), View::EditUser);
        assert_eq!(m.param("id"), Some("64f0c2"));
        assert_eq!(m.param("missing"), None);
    }

    #[test]
    fn test_resolve_unknown() {
        let table = RouteTable::app();
        assert!(table.resolve(&Location::new("/nope")).is_none());
        assert!(
            table
                .resolve(&Location::new("/dashboard-admin/admin/users/edit"))
                .is_none()
        );
    }

    #[test]
    fn test_guards_match_dashboard() {
        let table = RouteTable::app();
        let guard = |path: &str| {
            table
                .resolve(&Location::new(path))
                .and_then(|m| m.route.guard)
                .map(|g| g.allowed_roles)
        };

        assert_eq!(guard("/dashboard-admin"), Some(DASHBOARD_READERS));
        assert_eq!(guard("/dashboard-admin/admin/users/create"), Some(DASHBOARD_WRITERS));
        assert_eq!(guard("/dashboard-admin/admin/evaluations"), Some(DASHBOARD_READERS));
        assert_eq!(guard("/employee"), None);
    }

    #[test]
    fn test_navigate_not_found() {
        let table = RouteTable::app();
        let nav = table.navigate(&Session::empty(), Location::new("/missing"));
        assert_eq!(nav, Navigation::NotFound(Location::new("/missing")));
    }
}
