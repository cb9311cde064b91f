//! HTTP client for the evaluation backend

use std::time::Duration;

use eval360_auth::Session;
use eval360_evaluation::{Evaluation, NewEvaluation, QuestionBank, Statistics};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, Result, UNKNOWN_ERROR};
use crate::types::{Credentials, EmployeeReport, LoginResponse, Registration, UserRecord, UserUpdate};

/// Where the backend puts the human-readable error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorShape {
    /// `{"error": {"message": "..."}}` (login)
    Nested,
    /// `{"message": "..."}` (everything else)
    Flat,
}

/// Extract the error message from a failed response body
fn error_message(body: &str, shape: ErrorShape) -> String {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return UNKNOWN_ERROR.to_string(),
    };
    let message = match shape {
        ErrorShape::Nested => value.pointer("/error/message"),
        ErrorShape::Flat => value.get("message"),
    };
    message
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .unwrap_or(UNKNOWN_ERROR)
        .to_string()
}

/// Typed client for the `/api` endpoints
///
/// Authenticated endpoints send the token as `Authorization: Bearer`.
/// Path parameters are percent-encoded as single segments.
/// Requests are not retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client for `base_url` (e.g. `http://localhost:3000`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Client with a request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let base = Url::parse(&base_url).map_err(|e| ApiError::validation("base_url", e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::validation("base_url", format!("{base_url} cannot carry a path")));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base,
            base_url,
            token: None,
        })
    }

    /// Use `token` for authenticated endpoints
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Use the token of a loaded session, if any
    pub fn with_session(mut self, session: &Session) -> Self {
        self.token = session.token().map(str::to_string);
        self
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token in use
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// `POST /api/auth/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        credentials.validate()?;
        let request = self
            .request(Method::POST, self.url(&["api", "auth", "login"]))
            .json(&credentials.normalized());
        self.fetch(request, "/api/auth/login", ErrorShape::Nested).await
    }

    /// `POST /api/auth/register`
    ///
    /// A blank occupation is sent as "Por actualizar".
    pub async fn register(&self, registration: &Registration) -> Result<()> {
        registration.validate()?;
        let request = self
            .request(Method::POST, self.url(&["api", "auth", "register"]))
            .json(&registration.normalized());
        self.execute(request, "/api/auth/register", ErrorShape::Flat).await
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// `GET /api/user`
    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        self.get_authed(&["api", "user"]).await
    }

    /// `PUT /api/user/{id}`
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<()> {
        self.send_authed(Method::PUT, &["api", "user", id], Some(update)).await
    }

    /// `DELETE /api/user/{id}`
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.send_authed::<()>(Method::DELETE, &["api", "user", id], None).await
    }

    /// `GET /api/employees`
    pub async fn list_employees(&self) -> Result<Vec<UserRecord>> {
        self.get_authed(&["api", "employees"]).await
    }

    // =========================================================================
    // Evaluations
    // =========================================================================

    /// `GET /api/evaluation/view-evaluations`
    pub async fn list_evaluations(&self) -> Result<Vec<Evaluation>> {
        self.get_authed(&["api", "evaluation", "view-evaluations"]).await
    }

    /// `GET /api/evaluation/all`
    pub async fn evaluation_questions(&self) -> Result<QuestionBank> {
        self.get_authed(&["api", "evaluation", "all"]).await
    }

    /// `POST /api/evaluation`
    pub async fn create_evaluation(&self, evaluation: &NewEvaluation) -> Result<()> {
        self.send_authed(Method::POST, &["api", "evaluation"], Some(evaluation)).await
    }

    /// `PUT /api/evaluation/{id}`
    pub async fn update_evaluation(&self, id: &str, evaluation: &NewEvaluation) -> Result<()> {
        self.send_authed(Method::PUT, &["api", "evaluation", id], Some(evaluation))
            .await
    }

    /// `DELETE /api/evaluation/{id}`
    pub async fn delete_evaluation(&self, id: &str) -> Result<()> {
        self.send_authed::<()>(Method::DELETE, &["api", "evaluation", id], None)
            .await
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// `GET /api/reports/employee/{id}`
    pub async fn employee_report(&self, id: &str) -> Result<EmployeeReport> {
        self.get_authed(&["api", "reports", "employee", id]).await
    }

    /// `GET /api/stats`
    pub async fn statistics(&self) -> Result<Statistics> {
        self.get_authed(&["api", "stats"]).await
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    /// Base URL with `segments` appended, each percent-encoded
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // the base was checked to carry a path in `with_timeout`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    fn authed(&self, method: Method, url: Url) -> Result<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ApiError::NotAuthenticated)?;
        Ok(self.request(method, url).bearer_auth(token))
    }

    async fn get_authed<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.url(segments);
        let path = url.path().to_string();
        let request = self.authed(Method::GET, url)?;
        self.fetch(request, &path, ErrorShape::Flat).await
    }

    async fn send_authed<B: Serialize>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<()> {
        let url = self.url(segments);
        let path = url.path().to_string();
        let mut request = self.authed(method, url)?;
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request, &path, ErrorShape::Flat).await
    }

    /// Send and decode a JSON body
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder, path: &str, shape: ErrorShape) -> Result<T> {
        let response = self.dispatch(request, path, shape).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::decode(path, e))
    }

    /// Send and ignore the success body
    async fn execute(&self, request: RequestBuilder, path: &str, shape: ErrorShape) -> Result<()> {
        self.dispatch(request, path, shape).await?;
        Ok(())
    }

    async fn dispatch(&self, request: RequestBuilder, path: &str, shape: ErrorShape) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(path, status = status.as_u16(), "API response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            message: error_message(&body, shape),
        })
    }
}
