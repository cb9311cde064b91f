//! Roles and role allow-lists
//!
//! The platform knows exactly three roles. Access is decided by membership
//! in a route's allow-list, not by a hierarchy: an `Admin` is not implicitly
//! allowed where only `Manager` is listed.
//!
//! # Wire format
//!
//! Roles travel as `"Admin"`, `"Manager"` and `"Employee"` in API payloads
//! and in the persisted user profile.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User role in the evaluation platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Evaluated staff member
    Employee,
    /// Reads dashboards, tables and statistics
    Manager,
    /// Full dashboard access, creates users and evaluations
    Admin,
}

impl Role {
    /// All roles, in declaration order
    pub const ALL: [Role; 3] = [Role::Employee, Role::Manager, Role::Admin];

    /// Parse role from string
    ///
    /// Case-insensitive. Accepts the Spanish labels used by the user table.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "employee" | "empleado" => Some(Self::Employee),
            "manager" | "gerente" => Some(Self::Manager),
            "admin" | "administrador" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Manager => "Manager",
            Self::Admin => "Admin",
        }
    }

    /// Label shown in role pickers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Employee => "Empleado",
            Self::Manager => "Gerente",
            Self::Admin => "Administrador",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Employee => 0b001,
            Self::Manager => 0b010,
            Self::Admin => 0b100,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Set of roles allowed on a protected route
///
/// An empty set is valid and denies everyone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    /// The empty allow-list
    pub const EMPTY: RoleSet = RoleSet(0);

    /// Build a set from a slice of roles
    pub const fn of(roles: &[Role]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < roles.len() {
            bits |= roles[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Add a role to the set
    #[must_use]
    pub const fn with(self, role: Role) -> Self {
        Self(self.0 | role.bit())
    }

    /// Check membership
    pub const fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    /// True if no role is allowed
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of roles in the set
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate roles in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(|r| self.contains(*r))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, RoleSet::with)
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|r| r.as_str()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}
