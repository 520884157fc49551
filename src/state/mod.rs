//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::client::MarketClient;
use crate::profile::ProfileEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub market_client: Arc<MarketClient>,
    pub profile_engine: Arc<ProfileEngine>,
}

impl AppState {
    pub fn new(market_client: Arc<MarketClient>, profile_engine: Arc<ProfileEngine>) -> Self {
        Self {
            market_client,
            profile_engine,
        }
    }
}

impl FromRef<AppState> for Arc<MarketClient> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.market_client.clone()
    }
}

impl FromRef<AppState> for Arc<ProfileEngine> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.profile_engine.clone()
    }
}
