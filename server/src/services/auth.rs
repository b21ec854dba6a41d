//! Auth backend client: remote session invalidation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sessions are owned by an external auth service. This server never inspects
//! session contents; it only forwards the caller's access token to the
//! backend's logout endpoint and reports whether the backend accepted it.
//!
//! TRADE-OFFS
//! ==========
//! No retry is attempted. A failed sign-out is surfaced once to the HTTP
//! caller, who decides whether to try again.

use std::time::Duration;

use async_trait::async_trait;

/// Which sessions of an identity a sign-out invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutScope {
    /// Every session of the identity, on every device.
    Global,
    /// Only the session that owns the token.
    Local,
    /// Every session except the one that owns the token.
    Others,
}

impl SignOutScope {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Local => "local",
            Self::Others => "others",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    /// The backend could not be reached or the request did not complete.
    #[error("auth request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success status.
    #[error("auth backend rejected sign-out (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Remote session invalidation. Implemented by [`RemoteAuth`] in production
/// and by in-memory fakes in tests.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Invalidate the session(s) identified by `access_token`.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the backend cannot be reached or refuses
    /// the sign-out.
    async fn sign_out(&self, access_token: &str, scope: SignOutScope) -> Result<(), AuthError>;
}

/// HTTP client for the auth backend's `/auth/v1/logout` endpoint.
pub struct RemoteAuth {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RemoteAuth {
    /// Build a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Request(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), api_key: api_key.to_owned() })
    }

    pub(crate) fn logout_url(&self, scope: SignOutScope) -> String {
        format!("{}/auth/v1/logout?scope={}", self.base_url, scope.as_str())
    }
}

#[async_trait]
impl AuthBackend for RemoteAuth {
    async fn sign_out(&self, access_token: &str, scope: SignOutScope) -> Result<(), AuthError> {
        let resp = self
            .http
            .post(self.logout_url(scope))
            .bearer_auth(access_token)
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = resp.status().as_u16();
        if resp.status().is_success() || session_already_gone(status) {
            tracing::debug!(status, scope = scope.as_str(), "remote sign-out accepted");
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        Err(AuthError::Rejected { status, message: error_message(&body) })
    }
}

/// `401`/`404` mean the token no longer maps to a live session, which is the
/// state a sign-out is trying to reach.
pub(crate) fn session_already_gone(status: u16) -> bool {
    matches!(status, 401 | 404)
}

/// Pull a human-readable message out of a backend error body.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
                return text.to_owned();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() { "sign-out rejected".to_owned() } else { trimmed.to_owned() }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
