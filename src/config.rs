use crate::constants::*;
use crate::models::{CityRegistry, Coordinates, Hub, HubKind, TierTable};
use std::env;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub freight: FreightConfig,
}

#[derive(Debug, Clone)]
pub struct FreightConfig {
    /// Weight (kg) above which a shipment is Full Truck Load
    pub ftl_threshold_kg: f64,

    /// Pricing tiers, ascending by weight threshold
    pub tiers: TierTable,

    /// Optional JSON file replacing the built-in city table
    pub city_registry_path: Option<PathBuf>,

    /// Origin used when the hub registry has nothing to offer
    pub fallback_hub: Hub,
}

impl Default for FreightConfig {
    fn default() -> Self {
        Self {
            ftl_threshold_kg: DEFAULT_FTL_THRESHOLD_KG,
            tiers: TierTable::default(),
            city_registry_path: None,
            fallback_hub: Hub::default_fallback(),
        }
    }
}

impl FreightConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let ftl_threshold_kg: f64 = env::var("FREIGHT_FTL_THRESHOLD_KG")
            .unwrap_or_else(|_| defaults.ftl_threshold_kg.to_string())
            .parse()
            .map_err(|_| "Invalid FREIGHT_FTL_THRESHOLD_KG")?;
        if !ftl_threshold_kg.is_finite() || ftl_threshold_kg <= 0.0 {
            return Err("FREIGHT_FTL_THRESHOLD_KG must be a positive number".to_string());
        }

        let tiers = match env::var("FREIGHT_TIERS_JSON") {
            Ok(json) => {
                TierTable::from_json(&json).map_err(|e| format!("FREIGHT_TIERS_JSON: {}", e))?
            }
            Err(_) => defaults.tiers,
        };

        let fallback_lat: f64 = env::var("FREIGHT_FALLBACK_HUB_LAT")
            .unwrap_or_else(|_| DEFAULT_HUB_LAT.to_string())
            .parse()
            .map_err(|_| "Invalid FREIGHT_FALLBACK_HUB_LAT")?;
        let fallback_lng: f64 = env::var("FREIGHT_FALLBACK_HUB_LNG")
            .unwrap_or_else(|_| DEFAULT_HUB_LNG.to_string())
            .parse()
            .map_err(|_| "Invalid FREIGHT_FALLBACK_HUB_LNG")?;
        let fallback_hub = Hub {
            id: Uuid::nil(),
            name: env::var("FREIGHT_FALLBACK_HUB_NAME")
                .unwrap_or_else(|_| DEFAULT_HUB_NAME.to_string()),
            coordinates: Coordinates::new(fallback_lat, fallback_lng)
                .map_err(|e| format!("Fallback hub: {}", e))?,
            kind: HubKind::Studio,
            active: true,
        };

        Ok(Self {
            ftl_threshold_kg,
            tiers,
            city_registry_path: env::var("FREIGHT_CITY_REGISTRY_PATH").ok().map(PathBuf::from),
            fallback_hub,
        })
    }

    /// City registry from the configured file, or the built-in table.
    pub fn load_city_registry(&self) -> Result<CityRegistry, String> {
        match self.city_registry_path {
            Some(ref path) => CityRegistry::from_json_file(path),
            None => Ok(CityRegistry::builtin()),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            database_url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            freight: FreightConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const FREIGHT_VARS: [&str; 6] = [
        "FREIGHT_FTL_THRESHOLD_KG",
        "FREIGHT_TIERS_JSON",
        "FREIGHT_CITY_REGISTRY_PATH",
        "FREIGHT_FALLBACK_HUB_NAME",
        "FREIGHT_FALLBACK_HUB_LAT",
        "FREIGHT_FALLBACK_HUB_LNG",
    ];

    fn clear_freight_env() {
        for var in FREIGHT_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_freight_config_defaults() {
        clear_freight_env();
        let config = FreightConfig::from_env().unwrap();
        assert_eq!(config.ftl_threshold_kg, 10_000.0);
        assert_eq!(config.tiers, TierTable::default());
        assert_eq!(config.fallback_hub.name, "Bangalore Studio");
        assert!(config.city_registry_path.is_none());
        assert!(!config.load_city_registry().unwrap().is_empty());
    }

    #[test]
    #[serial]
    fn test_freight_config_overrides() {
        clear_freight_env();
        env::set_var("FREIGHT_FTL_THRESHOLD_KG", "9000");
        env::set_var(
            "FREIGHT_TIERS_JSON",
            r#"[{"maxWeightKg": null, "ratePerTonKm": 3, "minCharge": 900}]"#,
        );
        env::set_var("FREIGHT_FALLBACK_HUB_NAME", "Chennai Depot");
        env::set_var("FREIGHT_FALLBACK_HUB_LAT", "13.0827");
        env::set_var("FREIGHT_FALLBACK_HUB_LNG", "80.2707");

        let config = FreightConfig::from_env().unwrap();
        assert_eq!(config.ftl_threshold_kg, 9000.0);
        assert_eq!(config.tiers.tiers().len(), 1);
        assert_eq!(config.fallback_hub.name, "Chennai Depot");
        assert_eq!(config.fallback_hub.coordinates.lat, 13.0827);

        clear_freight_env();
    }

    #[test]
    #[serial]
    fn test_freight_config_rejects_bad_values() {
        clear_freight_env();
        env::set_var("FREIGHT_FTL_THRESHOLD_KG", "-1");
        assert!(FreightConfig::from_env().is_err());

        clear_freight_env();
        env::set_var("FREIGHT_TIERS_JSON", r#"[{"maxWeightKg": 100, "ratePerTonKm": 3, "minCharge": 9}]"#);
        assert!(FreightConfig::from_env().is_err());

        clear_freight_env();
        env::set_var("FREIGHT_FALLBACK_HUB_LAT", "95");
        assert!(FreightConfig::from_env().is_err());

        clear_freight_env();
    }
}
