use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Method, Request};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;
use crate::services::auth::AuthBackend;
use crate::state::CookiePolicy;

// =============================================================================
// FakeAuth
// =============================================================================

/// Records every sign-out call and answers with a fixed result.
struct FakeAuth {
    result: Result<(), AuthError>,
    calls: Mutex<Vec<(String, SignOutScope)>>,
}

impl FakeAuth {
    fn new(result: Result<(), AuthError>) -> Arc<Self> {
        Arc::new(Self { result, calls: Mutex::new(Vec::new()) })
    }

    fn calls(&self) -> Vec<(String, SignOutScope)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl AuthBackend for FakeAuth {
    async fn sign_out(&self, access_token: &str, scope: SignOutScope) -> Result<(), AuthError> {
        self.calls.lock().unwrap().push((access_token.to_owned(), scope));
        self.result.clone()
    }
}

fn app(auth: Arc<FakeAuth>) -> axum::Router {
    let cookies = CookiePolicy { name: "session_token".into(), secure: false };
    api_routes(AppState::new(auth, cookies))
}

fn logout_request(cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::POST).uri("/api/auth/logout");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn assert_no_store(headers: &axum::http::HeaderMap) {
    assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), NO_STORE_CACHE_CONTROL);
    assert_eq!(headers.get(header::PRAGMA).unwrap(), "no-cache");
    assert_eq!(headers.get(header::EXPIRES).unwrap(), "0");
}

async fn read_body(response: Response) -> LogoutResponse {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// error_status
// =============================================================================

#[test]
fn error_status_transport_failure_is_bad_gateway() {
    assert_eq!(error_status(&AuthError::Request("timeout".into())), StatusCode::BAD_GATEWAY);
}

#[test]
fn error_status_passes_backend_error_status_through() {
    let err = AuthError::Rejected { status: 503, message: "down".into() };
    assert_eq!(error_status(&err), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn error_status_non_error_backend_status_becomes_bad_gateway() {
    let err = AuthError::Rejected { status: 302, message: "redirect".into() };
    assert_eq!(error_status(&err), StatusCode::BAD_GATEWAY);
}

#[test]
fn no_store_headers_values() {
    let headers = no_store_headers();
    assert_eq!(headers[0].0, header::CACHE_CONTROL);
    assert_eq!(headers[0].1, "no-store, no-cache, must-revalidate, proxy-revalidate");
    assert_eq!(headers[1].1, "no-cache");
    assert_eq!(headers[2].1, "0");
}

// =============================================================================
// POST /api/auth/logout
// =============================================================================

#[tokio::test]
async fn logout_signs_out_globally_and_returns_success() {
    let auth = FakeAuth::new(Ok(()));
    let response = app(auth.clone())
        .oneshot(logout_request(Some("session_token=tok-1")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_no_store(response.headers());
    assert_eq!(auth.calls(), vec![("tok-1".to_owned(), SignOutScope::Global)]);
    assert_eq!(read_body(response).await, LogoutResponse { success: true, error: None });
}

#[tokio::test]
async fn logout_expires_session_cookie() {
    let auth = FakeAuth::new(Ok(()));
    let response = app(auth)
        .oneshot(logout_request(Some("session_token=tok-1")))
        .await
        .unwrap();

    let set_cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("session_token="));
    assert!(set_cookie.contains("Max-Age=0"));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn logout_without_cookie_succeeds_without_remote_call() {
    let auth = FakeAuth::new(Ok(()));
    let response = app(auth.clone()).oneshot(logout_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_no_store(response.headers());
    assert!(auth.calls().is_empty());
}

#[tokio::test]
async fn repeated_logout_still_succeeds() {
    let auth = FakeAuth::new(Ok(()));
    let router = app(auth.clone());

    let first = router.clone().oneshot(logout_request(Some("session_token=tok-1"))).await.unwrap();
    let second = router.oneshot(logout_request(Some("session_token=tok-1"))).await.unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_no_store(second.headers());
    assert_eq!(auth.calls().len(), 2);
}

#[tokio::test]
async fn logout_backend_rejection_is_propagated_with_headers() {
    let auth = FakeAuth::new(Err(AuthError::Rejected { status: 500, message: "db unavailable".into() }));
    let response = app(auth)
        .oneshot(logout_request(Some("session_token=tok-1")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_no_store(response.headers());
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(
        read_body(response).await,
        LogoutResponse { success: false, error: Some("db unavailable".into()) }
    );
}

#[tokio::test]
async fn logout_transport_failure_is_bad_gateway_with_headers() {
    let auth = FakeAuth::new(Err(AuthError::Request("connection refused".into())));
    let response = app(auth)
        .oneshot(logout_request(Some("session_token=tok-1")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_no_store(response.headers());
    let body = read_body(response).await;
    assert!(!body.success);
    assert!(body.error.unwrap().contains("connection refused"));
}

#[tokio::test]
async fn logout_rejects_get() {
    let auth = FakeAuth::new(Ok(()));
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/auth/logout")
        .body(Body::empty())
        .unwrap();
    let response = app(auth.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(auth.calls().is_empty());
}

#[tokio::test]
async fn healthz_is_ok() {
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let response = app(FakeAuth::new(Ok(()))).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
