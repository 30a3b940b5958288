pub mod debug;
pub mod freight;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/freight/estimate", post(freight::estimate_freight))
        .route("/freight/hubs", get(freight::list_hubs))
        .route("/freight/tiers", get(freight::list_tiers))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
