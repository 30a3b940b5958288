use crate::constants::{CURRENCY, DEFAULT_TIERS};
use crate::models::WeightKg;
use serde::{Deserialize, Serialize};

/// A weight-bracketed pricing rule.
///
/// `max_weight_kg` is an inclusive upper bound; `None` marks the unbounded
/// tier that catches everything heavier than the finite thresholds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FreightTier {
    pub max_weight_kg: Option<f64>,
    pub rate_per_ton_km: f64,
    pub min_charge: f64,
}

impl FreightTier {
    pub fn covers(&self, weight: WeightKg) -> bool {
        match self.max_weight_kg {
            Some(max) => max >= weight.as_kg(),
            None => true,
        }
    }

    pub fn rate_label(&self) -> String {
        format!(
            "{CURRENCY} {:.2}/ton-km (min {CURRENCY} {:.0})",
            self.rate_per_ton_km, self.min_charge
        )
    }
}

/// Ordered, validated set of pricing tiers.
///
/// Thresholds are strictly ascending and only the last tier is unbounded, so
/// selection always finds a tier.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct TierTable {
    tiers: Vec<FreightTier>,
}

impl TierTable {
    pub fn new(tiers: Vec<FreightTier>) -> Result<Self, String> {
        let Some(last) = tiers.last() else {
            return Err("Tier table must contain at least one tier".to_string());
        };
        if last.max_weight_kg.is_some() {
            return Err("Last tier must be unbounded (maxWeightKg = null)".to_string());
        }

        let mut previous: Option<f64> = None;
        for (i, tier) in tiers.iter().enumerate() {
            if !tier.rate_per_ton_km.is_finite() || tier.rate_per_ton_km < 0.0 {
                return Err(format!("Tier {}: rate must be a non-negative number", i));
            }
            if !tier.min_charge.is_finite() || tier.min_charge < 0.0 {
                return Err(format!(
                    "Tier {}: minimum charge must be a non-negative number",
                    i
                ));
            }
            if i + 1 == tiers.len() {
                break;
            }
            let Some(max) = tier.max_weight_kg else {
                return Err(format!("Tier {}: only the last tier may be unbounded", i));
            };
            if !max.is_finite() || max < 0.0 {
                return Err(format!("Tier {}: invalid weight threshold {}", i, max));
            }
            if previous.is_some_and(|p| max <= p) {
                return Err(format!(
                    "Tier {}: thresholds must be strictly ascending ({} after {})",
                    i,
                    max,
                    previous.unwrap_or_default()
                ));
            }
            previous = Some(max);
        }

        Ok(TierTable { tiers })
    }

    /// Parse and validate a JSON array of tiers.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let tiers: Vec<FreightTier> =
            serde_json::from_str(json).map_err(|e| format!("Invalid tier JSON: {}", e))?;
        Self::new(tiers)
    }

    /// First tier whose threshold is at or above the weight, else the
    /// unbounded last tier.
    pub fn select(&self, weight: WeightKg) -> &FreightTier {
        self.tiers
            .iter()
            .find(|tier| tier.covers(weight))
            .unwrap_or_else(|| &self.tiers[self.tiers.len() - 1])
    }

    pub fn tiers(&self) -> &[FreightTier] {
        &self.tiers
    }
}

impl Default for TierTable {
    fn default() -> Self {
        TierTable {
            tiers: DEFAULT_TIERS
                .iter()
                .map(|&(max_weight_kg, rate_per_ton_km, min_charge)| FreightTier {
                    max_weight_kg,
                    rate_per_ton_km,
                    min_charge,
                })
                .collect(),
        }
    }
}
