//! Login and registration wired to the session store

use eval360_auth::{KeyValueStore, Location, SessionStore, landing_for};
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{Credentials, Registration};

/// Log in and persist the session
///
/// On success the token and profile are saved and the landing location for
/// the user's role is returned. On any failure nothing is written.
pub async fn sign_in<S: KeyValueStore>(
    client: &ApiClient,
    store: &SessionStore<S>,
    credentials: &Credentials,
) -> Result<Location> {
    let response = match client.login(credentials).await {
        Ok(r) => r,
        Err(e) => {
            warn!(email = %credentials.email, error = %e, "Login failed");
            return Err(e);
        }
    };

    let (token, profile) = response.into_session();
    store.save(&token, &profile)?;

    let landing = landing_for(profile.role);
    info!(user_id = %profile.id, role = %profile.role, landing = %landing, "Logged in");
    Ok(landing)
}

/// Register a new account; the caller stays signed out
pub async fn sign_up(client: &ApiClient, registration: &Registration) -> Result<()> {
    client.register(registration).await?;
    info!(email = %registration.email, "Registered");
    Ok(())
}
