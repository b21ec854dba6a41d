//! Auth routes: remote session termination.

use axum::extract::State;
use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::services::auth::{AuthError, SignOutScope};
use crate::state::AppState;

pub const NO_STORE_CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";

/// Headers that forbid browsers, proxies and CDNs from storing a response.
#[must_use]
pub fn no_store_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (header::CACHE_CONTROL, HeaderValue::from_static(NO_STORE_CACHE_CONTROL)),
        (header::PRAGMA, HeaderValue::from_static("no-cache")),
        (header::EXPIRES, HeaderValue::from_static("0")),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogoutResponse {
    fn ok() -> Self {
        Self { success: true, error: None }
    }

    fn failed(err: &AuthError) -> Self {
        let message = match err {
            AuthError::Rejected { message, .. } => message.clone(),
            AuthError::Request(_) => err.to_string(),
        };
        Self { success: false, error: Some(message) }
    }
}

/// Map a backend failure onto the status returned to our caller. Backend
/// error statuses pass through; anything else becomes `502`.
pub(crate) fn error_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::Request(_) => StatusCode::BAD_GATEWAY,
        AuthError::Rejected { status, .. } => StatusCode::from_u16(*status)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::BAD_GATEWAY),
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/logout`: sign out every session of the caller, expire the
/// session cookie.
///
/// A request without a session cookie has nothing left to invalidate and
/// succeeds, so repeated logouts are harmless.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let token = jar
        .get(&state.cookies.name)
        .map(Cookie::value)
        .unwrap_or_default()
        .to_owned();

    if token.is_empty() {
        tracing::debug!("logout without session cookie");
    } else if let Err(e) = state.auth.sign_out(&token, SignOutScope::Global).await {
        tracing::error!(error = %e, "remote sign-out failed");
        return (error_status(&e), no_store_headers(), Json(LogoutResponse::failed(&e))).into_response();
    }

    let cleared = Cookie::build((state.cookies.name.clone(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.cookies.secure)
        .max_age(Duration::ZERO);

    let jar = CookieJar::new().add(cleared);
    (StatusCode::OK, jar, no_store_headers(), Json(LogoutResponse::ok())).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
