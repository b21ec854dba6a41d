//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed logout leaves
//! the page usable and the user can retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Deserialize)]
struct LogoutErrorBody {
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_failed_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<LogoutErrorBody>(body).ok().and_then(|b| b.error) {
        Some(reason) => format!("logout failed ({status}): {reason}"),
        None => format!("logout failed: {status}"),
    }
}

/// Sign out every session of the current user via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server reports a
/// non-success status.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(logout_failed_message(status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
