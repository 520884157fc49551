//! Client for the upstream marketplace API.
//!
//! Exactly one fetch happens per profile view; retries and caching belong
//! to callers. An upstream 404 for the requested party surfaces as
//! [`ApiError::NotFound`] so the facade can abort the view.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::models::{BuyerProfileRecord, ReviewRecord, SellerProfileRecord};

/// HTTP client for the marketplace API.
#[derive(Debug, Clone)]
pub struct MarketClient {
    http: reqwest::Client,
    base_url: String,
}

impl MarketClient {
    /// Build a client against the given base URL with a request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw buyer profile envelope.
    pub async fn fetch_buyer_profile(&self, buyer_id: i64) -> ApiResult<BuyerProfileRecord> {
        self.get_json(
            &self.endpoint(&format!("/api/buyers/{}/profile", buyer_id)),
            "buyer profile",
        )
        .await
    }

    /// Fetch the raw seller profile envelope.
    pub async fn fetch_seller_profile(&self, seller_id: i64) -> ApiResult<SellerProfileRecord> {
        self.get_json(
            &self.endpoint(&format!("/api/sellers/{}/profile", seller_id)),
            "seller profile",
        )
        .await
    }

    /// Fetch a seller's full review history.
    pub async fn fetch_seller_reviews(&self, seller_id: i64) -> ApiResult<Vec<ReviewRecord>> {
        self.get_json(
            &self.endpoint(&format!("/api/sellers/{}/reviews", seller_id)),
            "seller reviews",
        )
        .await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> ApiResult<T> {
        tracing::debug!(url = %url, "Fetching {} from marketplace API", what);

        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(format!("{} not found", what)));
        }
        let response = response.error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}
