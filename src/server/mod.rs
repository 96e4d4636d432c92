//! HTTP server for therapy-summary
//!
//! One endpoint, `POST /api/generate-summary`, behind a single-origin CORS
//! policy.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod state;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Settings;
use crate::llm::{build_provider, CompletionProvider};

pub use error::{ApiError, ErrorBody};
pub use state::AppState;

/// Path of the summary endpoint
pub const SUMMARY_ROUTE: &str = "/api/generate-summary";

/// CORS policy: credentialed requests from exactly one origin, any method or
/// header. Other origins get no `Access-Control-Allow-Origin` at all. Methods
/// and headers are mirrored since wildcards cannot be combined with
/// credentials.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(allowed_origin.trim())
        .with_context(|| format!("Invalid allowed origin: {}", allowed_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Build the router with its middleware.
pub fn build_router(state: Arc<AppState>) -> Result<Router> {
    let cors = cors_layer(&state.settings.server.allowed_origin)?;

    Ok(Router::new()
        .route(SUMMARY_ROUTE, post(handlers::generate_summary))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Build the router for `settings` with the given completion provider.
pub fn app(settings: Arc<Settings>, provider: Arc<dyn CompletionProvider>) -> Result<Router> {
    build_router(Arc::new(AppState::new(settings, provider)))
}

/// Validate configuration, bind the listener and serve until Ctrl-C.
pub async fn run(settings: Arc<Settings>) -> Result<()> {
    settings.require_secrets()?;

    let provider: Arc<dyn CompletionProvider> = Arc::from(build_provider(&settings)?);
    let router = app(settings.clone(), provider)?;

    let addr = settings.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        "Listening on http://{} (model: {}, allowed origin: {})",
        listener.local_addr()?,
        settings.llm.model,
        settings.server.allowed_origin
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
