pub mod city;
pub mod coordinates;
pub mod distance;
pub mod estimate;
pub mod hub;
pub mod product;
pub mod quantity;
pub mod tier;

pub use city::{CityEntry, CityRegistry};
pub use coordinates::{haversine_km, Coordinates};
pub use distance::{DistanceKm, WeightKg};
pub use estimate::{
    EstimateRequest, EstimateResponse, FallbackReason, FreightEstimate, HubSource, LoadClass,
};
pub use hub::{Hub, HubKind};
pub use product::Product;
pub use quantity::{Quantity, QuantityUnit, WeightInput};
pub use tier::{FreightTier, TierTable};
