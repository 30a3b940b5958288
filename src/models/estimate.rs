use crate::constants::{FTL_LABEL, LTL_LABEL};
use crate::models::WeightInput;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub location_name: String,
    pub weight_kg: WeightInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl EstimateRequest {
    pub fn new(
        location_name: impl Into<String>,
        weight_kg: impl Into<WeightInput>,
        product_name: Option<&str>,
    ) -> Self {
        EstimateRequest {
            location_name: location_name.into(),
            weight_kg: weight_kg.into(),
            product_name: product_name.map(str::to_string),
        }
    }

    /// Product name if one was given and is not blank.
    pub fn product_query(&self) -> Option<&str> {
        self.product_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Full Truck Load / Less-than-Truck-Load classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadClass {
    FullTruckLoad,
    PartLoad,
}

impl LoadClass {
    pub fn classify(weight_kg: f64, ftl_threshold_kg: f64) -> Self {
        if weight_kg > ftl_threshold_kg {
            LoadClass::FullTruckLoad
        } else {
            LoadClass::PartLoad
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadClass::FullTruckLoad => FTL_LABEL,
            LoadClass::PartLoad => LTL_LABEL,
        }
    }
}

impl fmt::Display for LoadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for LoadClass {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FallbackReason {
    /// The registry answered but had no active hubs.
    Empty,
    /// The registry query failed.
    Unavailable,
}

/// Where the origin hub of an estimate came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HubSource {
    Configured,
    Fallback { reason: FallbackReason },
}

impl HubSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, HubSource::Fallback { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreightEstimate {
    pub distance_km: f64,
    pub weight_kg: f64,
    pub estimated_cost: f64,
    pub hub: String,
    pub tier: LoadClass,
    pub rate_info: String,
    pub auto_calculated: bool,
    pub hub_source: HubSource,
}

/// `{success, data}` / `{success, error}` envelope returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<FreightEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EstimateResponse {
    pub fn ok(data: FreightEstimate) -> Self {
        EstimateResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        EstimateResponse {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
