//! Command implementations for the eval360 CLI

pub mod auth;
pub mod evaluations;
pub mod nav;
pub mod report;
pub mod users;
