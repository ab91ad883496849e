//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Application state holding the injected object store

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use updock_core::storage::ObjectStore;

/// Application state shared across handlers.
///
/// The store is injected at construction time, so handlers never touch
/// process-global state and tests can substitute a double.
#[derive(Clone)]
pub struct AppState {
    /// Object store receiving uploaded files.
    pub store: Arc<dyn ObjectStore>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
