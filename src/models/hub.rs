use crate::constants::{DEFAULT_HUB_LAT, DEFAULT_HUB_LNG, DEFAULT_HUB_NAME};
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum HubKind {
    Factory,
    #[default]
    Warehouse,
    Showroom,
    Studio,
}

impl fmt::Display for HubKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HubKind::Factory => "factory",
            HubKind::Warehouse => "warehouse",
            HubKind::Showroom => "showroom",
            HubKind::Studio => "studio",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for HubKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "factory" | "plant" => Ok(HubKind::Factory),
            "warehouse" | "depot" => Ok(HubKind::Warehouse),
            "showroom" => Ok(HubKind::Showroom),
            "studio" => Ok(HubKind::Studio),
            _ => Err(format!("Invalid hub kind: '{}'", s)),
        }
    }
}

/// A fixed logistics origin from which freight distance is measured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hub {
    pub id: Uuid,
    pub name: String,
    pub coordinates: Coordinates,
    pub kind: HubKind,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Hub {
    pub fn new(name: impl Into<String>, coordinates: Coordinates, kind: HubKind) -> Self {
        Hub {
            id: Uuid::new_v4(),
            name: name.into(),
            coordinates,
            kind,
            active: true,
        }
    }

    /// The hub substituted when the registry cannot supply any.
    pub fn default_fallback() -> Self {
        Hub {
            id: Uuid::nil(),
            name: DEFAULT_HUB_NAME.to_string(),
            coordinates: Coordinates {
                lat: DEFAULT_HUB_LAT,
                lng: DEFAULT_HUB_LNG,
            },
            kind: HubKind::Studio,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fallback_hub() {
        let hub = Hub::default_fallback();
        assert_eq!(hub.name, "Bangalore Studio");
        assert_eq!(hub.coordinates.lat, 12.9716);
        assert_eq!(hub.coordinates.lng, 77.5946);
        assert!(hub.active);
    }

    #[test]
    fn test_hub_kind_round_trip_through_str() {
        for kind in [
            HubKind::Factory,
            HubKind::Warehouse,
            HubKind::Showroom,
            HubKind::Studio,
        ] {
            assert_eq!(kind.to_string().parse::<HubKind>().unwrap(), kind);
        }
        assert_eq!("Plant".parse::<HubKind>().unwrap(), HubKind::Factory);
        assert!("airport".parse::<HubKind>().is_err());
    }
}
