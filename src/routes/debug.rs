use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if the hub registry is reachable
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    // Check hub registry
    match state.estimator.hub_repository().count().await {
        Ok(count) => {
            status["checks"]["hub_registry"] = json!("ok");
            status["checks"]["hub_count"] = json!(count);
            if count == 0 {
                status["checks"]["hub_registry"] = json!("empty, fallback hub in use");
            }
        }
        Err(e) => {
            status["checks"]["hub_registry"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    status["checks"]["city_count"] = json!(state.estimator.cities().len());

    Json(status)
}
