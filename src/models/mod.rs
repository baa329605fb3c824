pub mod config;
pub mod error;
pub mod metrics;
pub mod profile;

pub use metrics::{BmiCategory, BodyMetrics, Goal, HeightUnit, WeightUnit};
