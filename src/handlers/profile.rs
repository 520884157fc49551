//! Profile API handlers
//!
//! Handlers own no aggregation policy: fetch the raw envelope, hand it to
//! the engine, serialize the result.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ApiError;
use crate::models::ApiResponse;
use crate::profile::{
    decompose_reviews, rating_summary, AggregationInput, ProfileSummary, ReviewHistory,
};
use crate::state::AppState;

/// GET /api/buyers/:id/profile - Display-ready buyer profile
pub async fn get_buyer_profile(
    State(state): State<AppState>,
    Path(buyer_id): Path<i64>,
) -> Result<Json<ApiResponse<ProfileSummary>>, ApiError> {
    let record = state.market_client.fetch_buyer_profile(buyer_id).await?;
    let summary = state
        .profile_engine
        .aggregate(AggregationInput::from_buyer_record(record))?;

    Ok(Json(ApiResponse::ok(summary)))
}

/// GET /api/sellers/:id/profile - Display-ready seller profile
pub async fn get_seller_profile(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
) -> Result<Json<ApiResponse<ProfileSummary>>, ApiError> {
    let record = state.market_client.fetch_seller_profile(seller_id).await?;
    let summary = state
        .profile_engine
        .aggregate(AggregationInput::from_seller_record(record))?;

    Ok(Json(ApiResponse::ok(summary)))
}

/// GET /api/sellers/:id/reviews - Full review history with link outcomes
///
/// Unlike the profile endpoints this path sees the complete collection, so
/// the rating summary is computed here rather than trusted from upstream.
pub async fn get_seller_reviews(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
) -> Result<Json<ApiResponse<ReviewHistory>>, ApiError> {
    let records = state.market_client.fetch_seller_reviews(seller_id).await?;
    let (reviews, resolved_orders) = decompose_reviews(&records);

    let history = ReviewHistory {
        rating: rating_summary(&reviews).into(),
        reviews: state.profile_engine.review_history(&reviews, &resolved_orders),
    };

    Ok(Json(ApiResponse::ok(history)))
}
