//! Stable application-wide constants.
//!
//! Values here are physical constants, pricing defaults, and fallbacks for
//! env-var-based configuration. They should rarely change. Tier tables and
//! the fallback hub can be overridden at runtime, see
//! [`FreightConfig`](crate::config::FreightConfig).

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Database pool ---

pub const DB_MAX_CONNECTIONS: u32 = 10;
pub const DB_ACQUIRE_TIMEOUT_SECONDS: u64 = 5;

// --- Geometry ---

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// --- Freight pricing ---

pub const KG_PER_TONNE: f64 = 1000.0;

/// Shipments strictly heavier than this are classed as Full Truck Load.
/// Overridden by `FREIGHT_FTL_THRESHOLD_KG`.
pub const DEFAULT_FTL_THRESHOLD_KG: f64 = 10_000.0;

pub const FTL_LABEL: &str = "FTL (Full Truck Load)";
pub const LTL_LABEL: &str = "LTL (Part Load)";

/// Currency prefix used in rate labels.
pub const CURRENCY: &str = "INR";

/// Default pricing tiers as `(max_weight_kg, rate_per_ton_km, min_charge)`.
/// `None` marks the unbounded last tier.
pub const DEFAULT_TIERS: [(Option<f64>, f64, f64); 4] = [
    (Some(1_000.0), 12.0, 2_500.0),
    (Some(5_000.0), 8.0, 5_000.0),
    (Some(10_000.0), 6.0, 8_000.0),
    (None, 4.5, 12_000.0),
];

// --- Fallback hub ---
// Substituted when the hub registry errors or has no active hubs.

pub const DEFAULT_HUB_NAME: &str = "Bangalore Studio";
pub const DEFAULT_HUB_LAT: f64 = 12.9716;
pub const DEFAULT_HUB_LNG: f64 = 77.5946;

// --- Error messages that form part of the public contract ---

pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found in database";
