//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the auth backend behind a trait object so tests can swap in fakes,
//! plus the cookie policy the logout route needs to expire the session cookie.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::auth::AuthBackend;

/// Name and attributes of the cookie that carries the caller's access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookiePolicy {
    pub name: String,
    pub secure: bool,
}

impl CookiePolicy {
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        Self { name: config.cookie_name.clone(), secure: config.cookie_secure }
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthBackend>,
    pub cookies: CookiePolicy,
}

impl AppState {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthBackend>, cookies: CookiePolicy) -> Self {
        Self { auth, cookies }
    }
}
