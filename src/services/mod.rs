pub mod freight_estimator;

pub use freight_estimator::{freight_cost, nearest_hub, FreightEstimator, ResolvedWeight};
