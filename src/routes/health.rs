//! Health route definitions

use axum::{routing::get, Router};

use crate::handlers::health::{health_check, root};
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
