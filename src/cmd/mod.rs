pub mod bmi;
pub mod completions;
pub mod config;
pub mod init;
pub mod metrics;
pub mod profile;

use anyhow::Result;

use bodymetrics::models::config::Config;
use bodymetrics::models::metrics::{HeightUnit, WeightUnit};

/// Units named on the command line, falling back to the configured ones.
pub fn resolve_units(
    config: &Config,
    height_unit: Option<&str>,
    weight_unit: Option<&str>,
) -> Result<(HeightUnit, WeightUnit)> {
    let h = match height_unit {
        Some(s) => s.parse()?,
        None => config.units.height,
    };
    let w = match weight_unit {
        Some(s) => s.parse()?,
        None => config.units.weight,
    };
    Ok((h, w))
}
