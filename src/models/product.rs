use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog entry used to derive shipment weight from an item count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Weight of a single unit (bag, sheet, piece); unknown for some items.
    pub unit_weight_kg: Option<f64>,
}

impl Product {
    pub fn new(name: impl Into<String>, unit_weight_kg: Option<f64>) -> Self {
        Product {
            id: Uuid::new_v4(),
            name: name.into(),
            unit_weight_kg,
        }
    }

    /// Case-insensitive substring match of `fragment` within the product name.
    pub fn matches(&self, fragment: &str) -> bool {
        let fragment = fragment.trim().to_lowercase();
        !fragment.is_empty() && self.name.to_lowercase().contains(&fragment)
    }

    /// Unit weight if it is usable for a weight calculation.
    pub fn usable_unit_weight(&self) -> Option<f64> {
        self.unit_weight_kg.filter(|w| w.is_finite() && *w > 0.0)
    }
}
