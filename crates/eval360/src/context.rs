//! Shared state for commands: config, session store and route gate

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use eval360_auth::{
    FileStore, Location, Navigation, RouteMatch, RouteTable, Session, SessionStore,
};
use eval360_client::ApiClient;
use eval360_config::Config;
use tracing::debug;

/// Per-invocation context
pub struct AppContext {
    pub config: Config,
    /// Shared so the navigation shell can hold its own handle
    pub store: SessionStore<Arc<FileStore>>,
    pub routes: RouteTable,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let store = SessionStore::new(Arc::new(FileStore::new(config.session.file_path())));
        Self {
            config,
            store,
            routes: RouteTable::app(),
        }
    }

    /// Unauthenticated client for the configured backend
    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::with_timeout(
            self.config.api.base_url(),
            Duration::from_secs(self.config.api.timeout_secs),
        )
        .context("failed to build HTTP client")
    }

    /// Client carrying the stored token; fails when signed out
    pub fn signed_in(&self) -> Result<(ApiClient, Session)> {
        let session = self.store.load();
        if !session.is_authenticated() {
            bail!("not signed in (run `eval360 login`)");
        }
        Ok((self.client()?.with_session(&session), session))
    }

    /// Run the route gate for `path` before touching the backend
    ///
    /// Mirrors navigating to the view: a denied gate is reported as the
    /// redirect it would cause.
    pub fn enter(&self, path: &str) -> Result<(ApiClient, Session, RouteMatch)> {
        let session = self.store.load();
        match self.routes.navigate(&session, Location::parse(path)) {
            Navigation::Render(matched) => {
                debug!(path, view = %matched.view(), "View entered");
                let (client, session) = self.signed_in()?;
                Ok((client, session, matched))
            }
            Navigation::Redirect(redirect) => {
                bail!("access denied to {} (redirected to {})", redirect.from, redirect.to)
            }
            Navigation::NotFound(location) => bail!("no view at {location}"),
        }
    }
}
