//! Profile route definitions

use axum::{routing::get, Router};

use crate::handlers::profile::{get_buyer_profile, get_seller_profile, get_seller_reviews};
use crate::state::AppState;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/api/buyers/:buyer_id/profile", get(get_buyer_profile))
        .route("/api/sellers/:seller_id/profile", get(get_seller_profile))
        .route("/api/sellers/:seller_id/reviews", get(get_seller_reviews))
}
