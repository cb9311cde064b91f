//! Input checks run before any request is sent

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ApiError, Result};

/// Minimum login password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Non-empty after trimming
pub fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(field, "Este campo es obligatorio"));
    }
    Ok(())
}

/// `local@domain.tld` shape
///
/// Local part: letters, digits and `_ . + -`. Domain: a label of letters,
/// digits and `-`, a dot, then letters, digits, `-` and `.`.
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").unwrap());

/// Required, and matching [`EMAIL`] once trimmed
pub fn validate_email(email: &str) -> Result<()> {
    require("email", email)?;
    if EMAIL.is_match(email.trim()) {
        Ok(())
    } else {
        Err(ApiError::validation("email", "Formato de email no válido"))
    }
}

/// Login password: required, at least [`MIN_PASSWORD_LEN`] characters
pub fn validate_login_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(ApiError::validation("password", "Este campo es obligatorio"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(
            "password",
            format!("La contraseña debe tener al menos {MIN_PASSWORD_LEN} caracteres"),
        ));
    }
    Ok(())
}
