use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use freight_estimator::db::{HubRepository, StaticHubRepository};
use freight_estimator::models::Hub;
use freight_estimator::{AppError, Result};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

mod common;

struct DownHubRegistry;

#[async_trait]
impl HubRepository for DownHubRegistry {
    async fn find_active(&self) -> Result<Vec<Hub>> {
        Err(AppError::HubRegistry("store offline".to_string()))
    }

    async fn insert(&self, _hub: &Hub) -> Result<Uuid> {
        Err(AppError::HubRegistry("store offline".to_string()))
    }

    async fn count(&self) -> Result<i64> {
        Err(AppError::HubRegistry("store offline".to_string()))
    }
}

fn setup_test_app() -> axum::Router {
    freight_estimator::routes::create_router(common::create_default_test_state())
}

async fn post_estimate(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/freight/estimate")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_estimate_success_envelope() {
    let (status, json) = post_estimate(
        setup_test_app(),
        json!({"locationName": "Mumbai", "weightKg": 2500}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let data = &json["data"];
    assert_eq!(data["hub"], "Pune Depot");
    assert_eq!(data["weightKg"], 2500.0);
    assert_eq!(data["tier"], "LTL (Part Load)");
    assert_eq!(data["autoCalculated"], false);
    assert_eq!(data["hubSource"]["kind"], "configured");
    assert_eq!(data["rateInfo"], "INR 8.00/ton-km (min INR 5000)");
    assert!(data["estimatedCost"].as_f64().unwrap() >= 5000.0);
    assert!(data.get("distanceKm").is_some());
}

#[tokio::test]
async fn test_estimate_unknown_city() {
    let (status, json) = post_estimate(
        setup_test_app(),
        json!({"locationName": "Atlantis", "weightKg": 100}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json,
        json!({"success": false, "error": "City not found in database"})
    );
}

#[tokio::test]
async fn test_estimate_blank_city() {
    let (status, json) = post_estimate(
        setup_test_app(),
        json!({"locationName": "  ", "weightKg": 100}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json,
        json!({"success": false, "error": "City not found in database"})
    );
}

#[tokio::test]
async fn test_estimate_with_product_quantity() {
    let (status, json) = post_estimate(
        setup_test_app(),
        json!({
            "locationName": "Chennai",
            "weightKg": "200 units",
            "productName": "CLAY BRICK"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["weightKg"], 1000.0);
    assert_eq!(json["data"]["autoCalculated"], true);
    assert_eq!(json["data"]["rateInfo"], "INR 12.00/ton-km (min INR 2500)");
}

#[tokio::test]
async fn test_estimate_full_truck_load() {
    let (_, json) = post_estimate(
        setup_test_app(),
        json!({"locationName": "Jaipur", "weightKg": "10001 kg"}),
    )
    .await;
    assert_eq!(json["data"]["tier"], "FTL (Full Truck Load)");
}

#[tokio::test]
async fn test_estimate_hub_registry_down_uses_fallback() {
    let app = freight_estimator::routes::create_router(common::create_test_state(Arc::new(
        DownHubRegistry,
    )));
    let (status, json) = post_estimate(
        app,
        json!({"locationName": "Bangalore", "weightKg": 400}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["hub"], "Bangalore Studio");
    assert_eq!(json["data"]["distanceKm"], 0.0);
    assert_eq!(
        json["data"]["hubSource"],
        json!({"kind": "fallback", "reason": "unavailable"})
    );
    assert_eq!(json["data"]["estimatedCost"], 2500.0);
}

#[tokio::test]
async fn test_estimate_rejects_bad_weight() {
    let (status, json) = post_estimate(
        setup_test_app(),
        json!({"locationName": "Pune", "weightKg": "-20 kg"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_estimate_rejects_missing_fields() {
    let (status, _) = post_estimate(setup_test_app(), json!({"weightKg": 100})).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_list_hubs() {
    let (status, json) = get_json(setup_test_app(), "/freight/hubs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hubs"].as_array().unwrap().len(), 3);
    assert_eq!(json["hubs"][0]["name"], "Hosur Plant");
    assert_eq!(json["source"]["kind"], "configured");
}

#[tokio::test]
async fn test_list_hubs_empty_registry() {
    let app = freight_estimator::routes::create_router(common::create_test_state(Arc::new(
        StaticHubRepository::default(),
    )));
    let (_, json) = get_json(app, "/freight/hubs").await;
    assert_eq!(json["hubs"][0]["name"], "Bangalore Studio");
    assert_eq!(json["source"], json!({"kind": "fallback", "reason": "empty"}));
}

#[tokio::test]
async fn test_list_tiers() {
    let (status, json) = get_json(setup_test_app(), "/freight/tiers").await;
    assert_eq!(status, StatusCode::OK);
    let tiers = json["tiers"].as_array().unwrap();
    assert_eq!(tiers.len(), 4);
    assert_eq!(tiers[0]["maxWeightKg"], 1000.0);
    assert!(tiers[3]["maxWeightKg"].is_null());
    assert_eq!(json["ftlThresholdKg"], 10000.0);
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let (status, json) = get_json(setup_test_app(), "/debug/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["hub_count"], 3);
    assert!(json["checks"]["city_count"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_health_check_reports_registry_outage() {
    let app = freight_estimator::routes::create_router(common::create_test_state(Arc::new(
        DownHubRegistry,
    )));
    let (_, json) = get_json(app, "/debug/health").await;
    assert_eq!(json["status"], "error");
    assert!(json["checks"]["hub_registry"]["error"].is_string());
}
