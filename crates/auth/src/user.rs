//! Signed-in user profile
//!
//! `UserProfile` is what the login endpoint tells us about the user and what
//! the session store persists under the `user` key.

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Profile of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user ID
    pub id: String,

    /// First name
    #[serde(default)]
    pub first_name: String,

    /// Last name
    #[serde(default)]
    pub last_name: String,

    /// Email address
    #[serde(default)]
    pub email: String,

    /// Platform role
    pub role: Role,
}

impl UserProfile {
    /// Create a profile with only an ID, email and role
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
            email: email.into(),
            role,
        }
    }

    /// Set first and last name
    #[must_use]
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Name shown in the navigation bar
    pub fn display_name(&self) -> String {
        match (self.first_name.as_str(), self.last_name.as_str()) {
            ("", "") => self.email.clone(),
            (first, "") => first.to_string(),
            ("", last) => last.to_string(),
            (first, last) => format!("{} {}", first, last),
        }
    }

    /// Check if the user is an administrator
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let mut user = UserProfile::new("1", "ana@example.com", Role::Employee);
        assert_eq!(user.display_name(), "ana@example.com");

        user.first_name = "Ana".to_string();
        assert_eq!(user.display_name(), "Ana");

        user.last_name = "Pérez".to_string();
        assert_eq!(user.display_name(), "Ana Pérez");
    }

    #[test]
    fn test_is_admin() {
        assert!(UserProfile::new("1", "a@example.com", Role::Admin).is_admin());
        assert!(!UserProfile::new("2", "m@example.com", Role::Manager).is_admin());
    }

    #[test]
    fn test_json_field_names() {
        let user = UserProfile::new("64f0", "ana@example.com", Role::Manager).with_name("Ana", "Pérez");
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], "64f0");
        assert_eq!(value["first_name"], "Ana");
        assert_eq!(value["last_name"], "Pérez");
        assert_eq!(value["email"], "ana@example.com");
        assert_eq!(value["role"], "Manager");
    }

    #[test]
    fn test_unknown_role_rejected() {
        let json = r#"{"id":"1","first_name":"A","last_name":"B","email":"a@b.c","role":"Viewer"}"#;
        assert!(serde_json::from_str::<UserProfile>(json).is_err());
    }
}
