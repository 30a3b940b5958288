use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Built-in destination table: (name, lat, lng).
const BUILTIN_CITIES: &[(&str, f64, f64)] = &[
    ("Mumbai", 19.0760, 72.8777),
    ("Delhi", 28.7041, 77.1025),
    ("New Delhi", 28.6139, 77.2090),
    ("Bangalore", 12.9716, 77.5946),
    ("Bengaluru", 12.9716, 77.5946),
    ("Hyderabad", 17.3850, 78.4867),
    ("Chennai", 13.0827, 80.2707),
    ("Kolkata", 22.5726, 88.3639),
    ("Pune", 18.5204, 73.8567),
    ("Ahmedabad", 23.0225, 72.5714),
    ("Jaipur", 26.9124, 75.7873),
    ("Surat", 21.1702, 72.8311),
    ("Lucknow", 26.8467, 80.9462),
    ("Kanpur", 26.4499, 80.3319),
    ("Nagpur", 21.1458, 79.0882),
    ("Indore", 22.7196, 75.8577),
    ("Bhopal", 23.2599, 77.4126),
    ("Visakhapatnam", 17.6868, 83.2185),
    ("Vadodara", 22.3072, 73.1812),
    ("Coimbatore", 11.0168, 76.9558),
    ("Kochi", 9.9312, 76.2673),
    ("Thiruvananthapuram", 8.5241, 76.9366),
    ("Mysore", 12.2958, 76.6394),
    ("Mangalore", 12.9141, 74.8560),
    ("Hubli", 15.3647, 75.1240),
    ("Goa", 15.2993, 74.1240),
    ("Chandigarh", 30.7333, 76.7794),
    ("Ludhiana", 30.9010, 75.8573),
    ("Amritsar", 31.6340, 74.8723),
    ("Gurgaon", 28.4595, 77.0266),
    ("Noida", 28.5355, 77.3910),
    ("Patna", 25.5941, 85.1376),
    ("Bhubaneswar", 20.2961, 85.8245),
    ("Guwahati", 26.1445, 91.7362),
    ("Raipur", 21.2514, 81.6296),
    ("Ranchi", 23.3441, 85.3096),
    ("Dehradun", 30.3165, 78.0322),
    ("Madurai", 9.9252, 78.1198),
    ("Vijayawada", 16.5062, 80.6480),
    ("Nashik", 19.9975, 73.7898),
];

/// One entry of a city registry file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityEntry {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Immutable city-name to coordinate lookup, keyed by lowercased name.
#[derive(Debug, Clone, Default)]
pub struct CityRegistry {
    cities: HashMap<String, Coordinates>,
}

impl CityRegistry {
    pub fn new(entries: impl IntoIterator<Item = CityEntry>) -> Result<Self, String> {
        let mut cities = HashMap::new();
        for entry in entries {
            let key = normalize(&entry.name);
            if key.is_empty() {
                return Err("City name cannot be empty".to_string());
            }
            let coordinates = Coordinates::new(entry.lat, entry.lng)
                .map_err(|e| format!("City '{}': {}", entry.name, e))?;
            cities.insert(key, coordinates);
        }
        Ok(CityRegistry { cities })
    }

    pub fn builtin() -> Self {
        let cities = BUILTIN_CITIES
            .iter()
            .map(|&(name, lat, lng)| (normalize(name), Coordinates { lat, lng }))
            .collect();
        CityRegistry { cities }
    }

    /// Load a JSON array of `{name, lat, lng}` objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let entries: Vec<CityEntry> = serde_json::from_str(&contents)
            .map_err(|e| format!("Invalid city registry {}: {}", path.display(), e))?;
        Self::new(entries)
    }

    pub fn lookup(&self, name: &str) -> Option<Coordinates> {
        self.cities.get(&normalize(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
