use crate::constants::KG_PER_TONNE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance in kilometers
/// Prevents mixing up units and provides type safety
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DistanceKm(pub f64);

impl DistanceKm {
    pub fn new(km: f64) -> Result<Self, String> {
        if km < 0.0 {
            return Err("Distance cannot be negative".to_string());
        }
        if !km.is_finite() {
            return Err("Distance must be a finite number".to_string());
        }
        Ok(DistanceKm(km))
    }

    /// Get the raw kilometers value
    pub fn as_km(self) -> f64 {
        self.0
    }

    /// Create from raw value without validation (use carefully)
    pub fn from_raw(km: f64) -> Self {
        DistanceKm(km)
    }
}

impl fmt::Display for DistanceKm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}km", self.0)
    }
}

/// Shipment weight in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct WeightKg(pub f64);

impl WeightKg {
    pub fn new(kg: f64) -> Result<Self, String> {
        if !kg.is_finite() {
            return Err("Weight must be a finite number".to_string());
        }
        if kg < 0.0 {
            return Err("Weight cannot be negative".to_string());
        }
        Ok(WeightKg(kg))
    }

    pub fn as_kg(self) -> f64 {
        self.0
    }

    pub fn as_tonnes(self) -> f64 {
        self.0 / KG_PER_TONNE
    }

    pub fn from_tonnes(tonnes: f64) -> Result<Self, String> {
        Self::new(tonnes * KG_PER_TONNE)
    }
}

impl fmt::Display for WeightKg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}kg", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_km_creation() {
        assert!(DistanceKm::new(5.0).is_ok());
        assert!(DistanceKm::new(0.0).is_ok());
        assert!(DistanceKm::new(-1.0).is_err());
        assert!(DistanceKm::new(f64::INFINITY).is_err());
        assert!(DistanceKm::new(f64::NAN).is_err());
    }

    #[test]
    fn test_distance_km_display() {
        let d = DistanceKm::new(5.123).unwrap();
        assert_eq!(format!("{}", d), "5.12km");
    }

    #[test]
    fn test_weight_creation() {
        assert!(WeightKg::new(0.0).is_ok());
        assert!(WeightKg::new(-0.5).is_err());
        assert!(WeightKg::new(f64::NAN).is_err());
    }

    #[test]
    fn test_weight_tonnes_conversion() {
        let w = WeightKg::from_tonnes(2.5).unwrap();
        assert_eq!(w.as_kg(), 2500.0);
        assert_eq!(w.as_tonnes(), 2.5);
        assert_eq!(format!("{}", w), "2500kg");
    }
}
