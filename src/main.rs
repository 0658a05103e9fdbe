//! Comment Statistics Service
//!
//! Periodically pulls posts and comments from a content API, counts the words
//! in each post's comments, stores the counts in SQLite and serves them over REST.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod stats;
mod upstream;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use stats::Aggregator;
use upstream::ContentClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Comment Statistics Service");
    tracing::info!("Upstream: {}", config.upstream_base_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.database_url).await?;
    let repo = Arc::new(Repository::new(pool));
    tracing::info!("Database connected");

    // Start background statistics refresh
    let source = ContentClient::new(&config.upstream_base_url, config.upstream_timeout)?;
    let aggregator = Aggregator::new(source, repo.clone());
    stats::spawn_refresh_loop(aggregator, config.refresh_interval);

    let state = AppState { repo };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/post/{id}/comments/statistics",
            get(api::get_post_statistics),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
