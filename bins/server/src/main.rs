//! Updock API Server
//!
//! Main entry point for the Updock upload gateway.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use updock_api::{AppState, create_router};
use updock_core::storage::{StorageBackend, StorageService};
use updock_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "updock=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; missing or empty credentials abort startup
    let config = AppConfig::load().context("failed to load configuration")?;

    // Create storage service
    let storage = StorageService::new(StorageBackend::s3(
        config.aws_bucket_name.clone(),
        config.aws_region.clone(),
        config.aws_access_key.clone(),
        config.aws_secret_key.clone(),
        config.aws_endpoint.clone(),
    ))
    .context("failed to initialize object storage")?;
    info!(
        backend = %storage.backend_name(),
        bucket = %storage.bucket(),
        region = %config.aws_region,
        "Object storage configured"
    );

    // Create application state
    let state = AppState {
        store: Arc::new(storage),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
