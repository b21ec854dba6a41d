mod config;
mod routes;
mod services;
mod state;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let auth = match services::auth::RemoteAuth::new(
        &config.auth_url,
        &config.auth_api_key,
        Duration::from_secs(config.auth_timeout_secs),
    ) {
        Ok(auth) => auth,
        Err(e) => {
            tracing::error!(error = %e, "auth client init failed");
            return ExitCode::FAILURE;
        }
    };

    let state = state::AppState::new(Arc::new(auth), state::CookiePolicy::from_config(&config));

    let app = match routes::leptos_app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "leptos app init failed");
            return ExitCode::FAILURE;
        }
    };

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, auth_url = %config.auth_url, "portal listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
