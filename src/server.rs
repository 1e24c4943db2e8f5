//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::clock::{Clock, SystemClock};
use crate::config::ServerConfig;
use crate::error::ServeError;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
}

/// Create application state backed by the system clock.
pub fn create_app_state() -> AppState {
    create_app_state_with_clock(Arc::new(SystemClock))
}

/// Create application state with a specific clock source (used by tests).
pub fn create_app_state_with_clock(clock: Arc<dyn Clock>) -> AppState {
    AppState { clock }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/time", get(handle_time))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and drive the router until the process
/// is stopped.
///
/// The router is taken by ownership; the listening address is logged
/// once the bind succeeds.
pub async fn serve(config: &ServerConfig, app: Router) -> Result<(), ServeError> {
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(addr = %addr, "Clockd server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

// Wrapper handler to extract state components for the underlying API handler

async fn handle_time(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    api::handle_time(axum::extract::State(state.clock)).await
}
