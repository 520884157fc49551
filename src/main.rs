//! VoltMarket Profiles Server
//!
//! Read-only HTTP facade over the profile aggregation engine: buyer and
//! seller profile summaries plus full review histories, assembled from raw
//! records fetched from the upstream marketplace API.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};

use voltmarket_profiles::client::MarketClient;
use voltmarket_profiles::config::Config;
use voltmarket_profiles::middleware::request_context;
use voltmarket_profiles::profile::ProfileEngine;
use voltmarket_profiles::routes;
use voltmarket_profiles::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    tracing::info!(
        environment = config.environment.as_str(),
        upstream = %config.marketplace_api_url,
        "Starting profile service"
    );

    // Upstream marketplace client
    let market_client = match MarketClient::new(
        &config.marketplace_api_url,
        Duration::from_secs(config.http_timeout_seconds),
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build marketplace client: {}", e);
            std::process::exit(1);
        }
    };

    let profile_engine = ProfileEngine::new(config.recent_review_limit);

    let app_state = AppState::new(Arc::new(market_client), Arc::new(profile_engine));

    // Create the app router
    let app = Router::new()
        .merge(routes::health_routes())
        .merge(routes::profile_routes())
        .with_state(app_state)
        .layer(axum::middleware::from_fn(request_context))
        .layer(configure_cors(config.cors_allowed_origins.as_deref()));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check at http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server shutdown complete");
}

fn configure_cors(allowed_origins: Option<&str>) -> CorsLayer {
    let Some(allowed_origins) = allowed_origins.filter(|s| !s.is_empty()) else {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
