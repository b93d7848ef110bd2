//! SOC Dashboard Backend Server
//!
//! Serves synthetic security-event data and pre-aggregated statistics for the
//! dashboard UI. Every event is fabricated at request or seed time; nothing is
//! persisted and nothing survives a restart.

mod config;
mod error;
mod generator;
mod handlers;
mod models;
mod stats;
mod store;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use store::EventStore;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "soc_dashboard=debug,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("SOC Dashboard server starting...");
    tracing::info!("Environment: {}", config.environment);

    // Build application state
    let state = AppState {
        store: Arc::new(EventStore::new()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EventStore>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/dashboard/stats", get(handlers::dashboard::stats))
        .route("/events/recent", get(handlers::events::recent))
        .route("/events/realtime", get(handlers::events::realtime))
        .route("/threats/map", get(handlers::threats::map))
        .route("/timeline", get(handlers::timeline::hourly))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
