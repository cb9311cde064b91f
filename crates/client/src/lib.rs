//! eval360 - REST Client
//!
//! Typed access to the evaluation backend plus the login flow that fills
//! the session store.
//!
//! # Example
//!
//! ```no_run
//! use eval360_auth::{MemoryStore, SessionStore};
//! use eval360_client::{ApiClient, Credentials, sign_in};
//!
//! # async fn run() -> eval360_client::Result<()> {
//! let client = ApiClient::new("http://localhost:3000")?;
//! let store = SessionStore::new(MemoryStore::new());
//!
//! let landing = sign_in(&client, &store, &Credentials::new("ana@example.com", "secreto123")).await?;
//! println!("go to {landing}");
//!
//! let client = client.with_session(&store.load());
//! for user in client.list_users().await? {
//!     println!("{} <{}>", user.full_name(), user.email);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Failed responses become [`ApiError::Server`] carrying the backend's
//! message. Login reads it from `error.message`, every other endpoint from
//! `message`; both fall back to "Error desconocido".

mod client;
mod error;
mod flows;
mod types;
mod validation;


pub use client::ApiClient;
pub use error::{ApiError, Result, UNKNOWN_ERROR};
pub use flows::{sign_in, sign_up};
pub use types::{
    Credentials, DEFAULT_OCCUPATION, EmployeeReport, Feedback, LoginResponse, Registration,
    ReportEvaluation, UserRecord, UserUpdate,
};
pub use validation::{MIN_PASSWORD_LEN, validate_email, validate_login_password};
