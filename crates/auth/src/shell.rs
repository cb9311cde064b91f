//! Navigation shell
//!
//! Decides which navigation entries are shown for the current session and
//! owns the logout action. Rendering is left to the front-end; this module
//! only produces the list of entries.
//!
//! # Links
//!
//! - Always: `Inicio`, `Documentación`
//! - Signed in: `Panel Admin` (Admin only), the user's name, `Cerrar sesión`
//! - Signed out: `Registro`, `Iniciar sesión`
//!
//! Logout clears the session store and resets all in-memory shell state,
//! so nothing rendered for the previous user survives.

use tracing::info;

use crate::error::Result;
use crate::gate::Location;
use crate::roles::Role;
use crate::session::{Session, SessionStore};
use crate::store::KeyValueStore;

/// Brand shown in the header
pub const BRAND: &str = "Evaluaciones";

/// Login view path, the target after logout
pub const LOGIN_PATH: &str = "/login";

/// Navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Visible label
    pub label: &'static str,
    /// Target path
    pub to: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, to: &'static str) -> Self {
        Self { label, to }
    }
}

const HOME: NavLink = NavLink::new("Inicio", "/home");
const DOCUMENTATION: NavLink = NavLink::new("Documentación", "/documentation");
const ADMIN_PANEL: NavLink = NavLink::new("Panel Admin", "/dashboard-admin");
const REGISTER: NavLink = NavLink::new("Registro", "/register");
const LOGIN: NavLink = NavLink::new("Iniciar sesión", LOGIN_PATH);

/// Entry of the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    /// Client-side link
    Link(NavLink),
    /// Signed-in user's display name
    UserName(String),
    /// Logout button
    Logout,
}

/// Header contents for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    /// Brand text
    pub brand: &'static str,
    /// Entries in display order
    pub items: Vec<NavItem>,
    /// Collapsed menu open (small screens)
    pub menu_open: bool,
}

impl NavView {
    /// Links only, in display order
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.items.iter().filter_map(|item| match item {
            NavItem::Link(link) => Some(link),
            _ => None,
        })
    }

    /// Check whether a link to `path` is shown
    pub fn has_link(&self, path: &str) -> bool {
        self.links().any(|l| l.to == path)
    }

    /// True if the logout action is shown
    pub fn has_logout(&self) -> bool {
        self.items.contains(&NavItem::Logout)
    }

    /// Displayed user name, if signed in
    pub fn user_name(&self) -> Option<&str> {
        self.items.iter().find_map(|item| match item {
            NavItem::UserName(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

/// Collapsible sidebar section of the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSection {
    /// Section heading
    pub title: &'static str,
    /// Whether the section is expanded
    pub open: bool,
    /// Links inside the section
    pub links: Vec<NavLink>,
}

/// Sidebar section identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarGroup {
    /// User management
    Users,
    /// Evaluation management
    Evaluations,
}

/// In-memory UI state, dropped wholesale on logout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ShellState {
    menu_open: bool,
    users_open: bool,
    evaluations_open: bool,
}

/// Where to land after a successful login
pub fn landing_for(role: Role) -> Location {
    match role {
        Role::Admin => Location::new("/dashboard-admin"),
        Role::Employee => Location::new("/employee"),
        Role::Manager => Location::new("/"),
    }
}

/// Header and sidebar decision logic
#[derive(Debug)]
pub struct NavShell<S> {
    store: SessionStore<S>,
    state: ShellState,
}

impl<S: KeyValueStore> NavShell<S> {
    /// Create a shell reading from `store`
    pub fn new(store: SessionStore<S>) -> Self {
        Self {
            store,
            state: ShellState::default(),
        }
    }

    /// Session store backing this shell
    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Load the session and build the header
    pub fn render(&self) -> NavView {
        let mut view = Self::render_session(&self.store.load());
        view.menu_open = self.state.menu_open;
        view
    }

    /// Build the header for a given session
    pub fn render_session(session: &Session) -> NavView {
        let mut items = vec![NavItem::Link(HOME), NavItem::Link(DOCUMENTATION)];

        match (&session.token, &session.user) {
            (Some(_), Some(user)) => {
                if user.role == Role::Admin {
                    items.push(NavItem::Link(ADMIN_PANEL));
                }
                items.push(NavItem::UserName(user.display_name()));
                items.push(NavItem::Logout);
            }
            _ => {
                items.push(NavItem::Link(REGISTER));
                items.push(NavItem::Link(LOGIN));
            }
        }

        NavView {
            brand: BRAND,
            items,
            menu_open: false,
        }
    }

    /// Toggle the collapsed header menu
    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
    }

    /// Toggle a sidebar section
    pub fn toggle_section(&mut self, group: SidebarGroup) {
        match group {
            SidebarGroup::Users => self.state.users_open = !self.state.users_open,
            SidebarGroup::Evaluations => {
                self.state.evaluations_open = !self.state.evaluations_open
            }
        }
    }

    /// Dashboard sidebar
    pub fn sidebar(&self) -> Vec<SidebarSection> {
        vec![
            SidebarSection {
                title: "Usuarios",
                open: self.state.users_open,
                links: vec![
                    NavLink::new("Ver todos los usuarios", "/dashboard-admin/admin/users"),
                    NavLink::new("Crear usuario", "/dashboard-admin/admin/users/create"),
                ],
            },
            SidebarSection {
                title: "Evaluaciones",
                open: self.state.evaluations_open,
                links: vec![
                    NavLink::new(
                        "Ver todas las evaluaciones",
                        "/dashboard-admin/admin/evaluations",
                    ),
                    NavLink::new(
                        "Crear evaluación",
                        "/dashboard-admin/admin/evaluations/create",
                    ),
                ],
            },
        ]
    }

    /// Clear the session, reset UI state, and return the login location
    pub fn logout(&mut self) -> Result<Location> {
        self.store.clear()?;
        self.state = ShellState::default();

        info!("User logged out");
        Ok(Location::new(LOGIN_PATH))
    }
}
