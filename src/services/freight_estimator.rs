use crate::config::FreightConfig;
use crate::db::{HubRepository, ProductCatalog};
use crate::error::{AppError, Result};
use crate::models::{
    haversine_km, CityRegistry, Coordinates, DistanceKm, EstimateRequest, EstimateResponse,
    FallbackReason, FreightEstimate, FreightTier, Hub, HubSource, LoadClass, Quantity,
    TierTable, WeightInput, WeightKg,
};
use std::sync::Arc;

/// Weight after product resolution, with whether the catalog supplied it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWeight {
    pub weight: WeightKg,
    pub auto_calculated: bool,
}

/// Computes freight estimates from the nearest hub to a destination city.
///
/// City and tier data are immutable and injected at construction; the hub
/// registry and product catalog are read once per estimate.
pub struct FreightEstimator {
    cities: Arc<CityRegistry>,
    tiers: TierTable,
    hubs: Arc<dyn HubRepository>,
    catalog: Arc<dyn ProductCatalog>,
    fallback_hub: Hub,
    ftl_threshold_kg: f64,
}

impl FreightEstimator {
    pub fn new(
        config: &FreightConfig,
        cities: Arc<CityRegistry>,
        hubs: Arc<dyn HubRepository>,
        catalog: Arc<dyn ProductCatalog>,
    ) -> Self {
        FreightEstimator {
            cities,
            tiers: config.tiers.clone(),
            hubs,
            catalog,
            fallback_hub: config.fallback_hub.clone(),
            ftl_threshold_kg: config.ftl_threshold_kg,
        }
    }

    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    pub fn ftl_threshold_kg(&self) -> f64 {
        self.ftl_threshold_kg
    }

    pub fn cities(&self) -> &CityRegistry {
        &self.cities
    }

    pub fn hub_repository(&self) -> &Arc<dyn HubRepository> {
        &self.hubs
    }

    /// Estimate freight for a request. Only input problems (unknown city,
    /// unusable weight) are errors; registry outages degrade to the
    /// fallback hub and are reported through `hub_source`.
    pub async fn estimate(&self, request: &EstimateRequest) -> Result<FreightEstimate> {
        let destination = self
            .cities
            .lookup(&request.location_name)
            .ok_or_else(|| AppError::CityNotFound(request.location_name.clone()))?;

        let resolved = self
            .resolve_weight(&request.weight_kg, request.product_query())
            .await?;

        let (hubs, hub_source) = self.resolve_hubs().await;
        let (hub, distance) = match nearest_hub(&hubs, &destination) {
            Some(found) => found,
            None => {
                // resolve_hubs never hands back an empty list
                return Err(AppError::Internal("no hub available".to_string()));
            }
        };

        let tier = self.tiers.select(resolved.weight);
        let cost = freight_cost(resolved.weight, distance, tier);
        let load_class = LoadClass::classify(resolved.weight.as_kg(), self.ftl_threshold_kg);

        tracing::debug!(
            hub = %hub.name,
            distance_km = distance.as_km(),
            weight_kg = resolved.weight.as_kg(),
            rate = tier.rate_per_ton_km,
            cost,
            "Freight estimate for '{}': {} from {} ({}), {}",
            request.location_name,
            distance,
            hub.name,
            load_class,
            resolved.weight
        );

        Ok(FreightEstimate {
            distance_km: distance.as_km().round(),
            weight_kg: resolved.weight.as_kg().round(),
            estimated_cost: cost.round().max(tier.min_charge),
            hub: hub.name.clone(),
            tier: load_class,
            rate_info: tier.rate_label(),
            auto_calculated: resolved.auto_calculated,
            hub_source,
        })
    }

    /// Envelope form of [`estimate`](Self::estimate): never fails, reporting
    /// problems as `{success: false, error}`.
    pub async fn estimate_freight(
        &self,
        location_name: &str,
        weight: impl Into<WeightInput>,
        product_name: Option<&str>,
    ) -> EstimateResponse {
        let request = EstimateRequest::new(location_name, weight, product_name);
        match self.estimate(&request).await {
            Ok(estimate) => EstimateResponse::ok(estimate),
            Err(e) => {
                if !e.is_input_error() {
                    tracing::error!("Freight estimate failed: {}", e);
                }
                EstimateResponse::failure(e.public_message())
            }
        }
    }

    /// Turn the raw weight into kilograms, deriving it from the product's
    /// unit weight when the catalog knows the product.
    pub async fn resolve_weight(
        &self,
        input: &WeightInput,
        product_query: Option<&str>,
    ) -> Result<ResolvedWeight> {
        let quantity = input.to_quantity().map_err(AppError::InvalidRequest)?;

        if let Some(query) = product_query {
            if let Some(weight) = self.product_weight(query, &quantity).await? {
                return Ok(ResolvedWeight {
                    weight,
                    auto_calculated: true,
                });
            }
        }

        let weight = quantity.to_weight_kg().map_err(AppError::InvalidRequest)?;
        Ok(ResolvedWeight {
            weight,
            auto_calculated: false,
        })
    }

    async fn product_weight(&self, query: &str, quantity: &Quantity) -> Result<Option<WeightKg>> {
        let product = match self.catalog.find_by_name(query).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                tracing::debug!("No catalog product matches '{}'", query);
                return Ok(None);
            }
            Err(e) => {
                tracing::warn!(
                    "Product lookup for '{}' failed ({}), using the given weight",
                    query,
                    e
                );
                return Ok(None);
            }
        };

        let Some(unit_weight) = product.usable_unit_weight() else {
            tracing::debug!("Product '{}' has no unit weight", product.name);
            return Ok(None);
        };

        let count = quantity.unit_count();
        let weight = WeightKg::new(count as f64 * unit_weight).map_err(AppError::InvalidRequest)?;
        tracing::debug!(
            "Derived {} from {} x {}kg of '{}'",
            weight,
            count,
            unit_weight,
            product.name
        );
        Ok(Some(weight))
    }

    /// Active hubs from the registry, or the fallback hub when the registry
    /// errors or is empty. The returned list is never empty.
    pub async fn resolve_hubs(&self) -> (Vec<Hub>, HubSource) {
        let reason = match self.hubs.find_active().await {
            Ok(hubs) if !hubs.is_empty() => return (hubs, HubSource::Configured),
            Ok(_) => {
                tracing::warn!(
                    "Hub registry has no active hubs, using fallback hub '{}'",
                    self.fallback_hub.name
                );
                FallbackReason::Empty
            }
            Err(e) => {
                tracing::warn!(
                    "Hub registry unavailable ({}), using fallback hub '{}'",
                    e,
                    self.fallback_hub.name
                );
                FallbackReason::Unavailable
            }
        };

        (
            vec![self.fallback_hub.clone()],
            HubSource::Fallback { reason },
        )
    }
}

/// Hub closest to `destination`. Ties go to the earliest hub in the list.
pub fn nearest_hub<'a>(hubs: &'a [Hub], destination: &Coordinates) -> Option<(&'a Hub, DistanceKm)> {
    let mut best: Option<(&Hub, DistanceKm)> = None;
    for hub in hubs {
        let distance = haversine_km(&hub.coordinates, destination);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((hub, distance)),
        }
    }
    best
}

/// `max(tonnes * km * rate, min_charge)`.
pub fn freight_cost(weight: WeightKg, distance: DistanceKm, tier: &FreightTier) -> f64 {
    let variable = weight.as_tonnes() * distance.as_km() * tier.rate_per_ton_km;
    variable.max(tier.min_charge)
}
