use crate::constants::EARTH_RADIUS_KM;
use crate::models::DistanceKm;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        // Rounding can push `a` just past 1 for near-antipodal points
        let a = a.min(1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// Great-circle distance between two points as a typed distance.
pub fn haversine_km(from: &Coordinates, to: &Coordinates) -> DistanceKm {
    DistanceKm::from_raw(from.distance_to(to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(12.9716, 77.5946).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err()); // Invalid lat
        assert!(Coordinates::new(0.0, 181.0).is_err()); // Invalid lng
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Coordinates::new(19.0760, 72.8777).unwrap();
        assert_eq!(p.distance_to(&p), 0.0);
        assert_eq!(haversine_km(&p, &p).as_km(), 0.0);
    }

    #[test]
    fn test_distance_calculation() {
        let bangalore = Coordinates::new(12.9716, 77.5946).unwrap();
        let chennai = Coordinates::new(13.0827, 80.2707).unwrap();

        // Bangalore to Chennai is approximately 290 km as the crow flies
        let distance = bangalore.distance_to(&chennai);
        assert!((distance - 290.0).abs() < 10.0, "got {}", distance);
    }

    #[test]
    fn test_near_antipodal_distance_is_finite() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        for i in 0..2000 {
            let lat = -89.0 + (i as f64) * 0.089;
            let lng = -179.0 + (i as f64) * 0.179;
            let here = Coordinates::new(lat, lng).unwrap();
            let nudge = (i % 7) as f64 * 1e-7;
            let antipode_lng = if lng > 0.0 { lng - 180.0 } else { lng + 180.0 };
            let antipode = Coordinates::new(-lat + nudge, antipode_lng - nudge).unwrap();
            let distance = here.distance_to(&antipode);
            assert!(distance.is_finite(), "NaN for ({}, {})", lat, lng);
            assert!(distance <= half_circumference + 1e-6);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let delhi = Coordinates::new(28.7041, 77.1025).unwrap();
        let kolkata = Coordinates::new(22.5726, 88.3639).unwrap();
        let there = delhi.distance_to(&kolkata);
        let back = kolkata.distance_to(&delhi);
        assert!((there - back).abs() < 1e-9);
    }
}
