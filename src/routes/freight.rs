use crate::models::{EstimateRequest, EstimateResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// POST /freight/estimate
/// Estimate freight cost from the nearest hub to a destination city
pub async fn estimate_freight(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EstimateRequest>,
) -> (StatusCode, Json<EstimateResponse>) {
    tracing::info!(
        location = %request.location_name,
        product = request.product_name.as_deref().unwrap_or("-"),
        "Freight estimate request: {} ({:?})",
        request.location_name,
        request.weight_kg
    );

    match state.estimator.estimate(&request).await {
        Ok(estimate) => {
            if estimate.hub_source.is_fallback() {
                tracing::warn!(
                    "Estimate for '{}' measured from fallback hub '{}'",
                    request.location_name,
                    estimate.hub
                );
            }
            (StatusCode::OK, Json(EstimateResponse::ok(estimate)))
        }
        Err(e) => {
            if e.is_input_error() {
                tracing::info!("Rejected freight estimate: {}", e);
            } else {
                tracing::error!("Freight estimate failed: {}", e);
            }
            (
                e.status_code(),
                Json(EstimateResponse::failure(e.public_message())),
            )
        }
    }
}

/// GET /freight/hubs
/// Hubs an estimate would currently be measured from
pub async fn list_hubs(State(state): State<Arc<AppState>>) -> Json<Value> {
    let (hubs, source) = state.estimator.resolve_hubs().await;
    Json(json!({
        "hubs": hubs,
        "source": source,
    }))
}

/// GET /freight/tiers
pub async fn list_tiers(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "tiers": state.estimator.tiers(),
        "ftlThresholdKg": state.estimator.ftl_threshold_kg(),
    }))
}
