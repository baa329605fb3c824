use regex::Regex;
use std::sync::LazyLock;

use crate::models::error::Error;
use crate::models::metrics::{HeightUnit, WeightUnit};

const LB_TO_KG: f64 = 0.453_592_37;
const IN_TO_CM: f64 = 2.54;
const FT_TO_CM: f64 = 30.48;
/// Accepted magnitudes are 0 or within this range, in any unit. Outside it
/// the bmi arithmetic under- or overflows.
const MIN_MAGNITUDE: f64 = 0.01;
const MAX_MAGNITUDE: f64 = 10_000.0;

static FEET_INCHES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(?P<ft>\d+(?:\.\d+)?)\s*(?:'|ft|feet|-)\s*(?:(?P<in>\d+(?:\.\d+)?)\s*(?:"|''|in|inches)?)?\s*$"#,
    )
    .expect("feet-inches pattern is valid")
});

/// Height in centimeters. Feet-inches magnitudes are decimal feet.
pub fn height_to_cm(value: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Centimeters => value,
        HeightUnit::FeetInches => value * FT_TO_CM,
    }
}

/// Weight in kilograms.
pub fn weight_to_kg(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilograms => value,
        WeightUnit::Pounds => value * LB_TO_KG,
    }
}

/// Inverse of [`height_to_cm`], for display.
pub fn cm_to_height(cm: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Centimeters => cm,
        HeightUnit::FeetInches => cm / FT_TO_CM,
    }
}

/// Inverse of [`weight_to_kg`], for display.
pub fn kg_to_weight(kg: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilograms => kg,
        WeightUnit::Pounds => kg / LB_TO_KG,
    }
}

/// Combine feet and inches into decimal feet.
pub fn feet_inches(feet: f64, inches: f64) -> f64 {
    feet + inches * IN_TO_CM / FT_TO_CM
}

/// Split decimal feet into whole feet and remaining inches (one decimal).
pub fn split_feet_inches(decimal_feet: f64) -> (u32, f64) {
    let total_in = (decimal_feet * 12.0 * 10.0).round() / 10.0;
    let feet = (total_in / 12.0).floor();
    let inches = ((total_in - feet * 12.0) * 10.0).round() / 10.0;
    (feet as u32, inches)
}

/// Parse a user-entered height into the magnitude stored for `unit`.
///
/// Centimeters take a plain number. Feet-inches also accept `5'11"`,
/// `5ft 11in`, `5' 11` and `5-11`; a plain number there is decimal feet.
pub fn parse_height(input: &str, unit: HeightUnit) -> Result<f64, Error> {
    let trimmed = input.trim();
    if let Ok(v) = trimmed.parse::<f64>() {
        return in_range("height", v);
    }
    if unit == HeightUnit::FeetInches {
        if let Some(caps) = FEET_INCHES.captures(trimmed) {
            let ft: f64 = caps["ft"]
                .parse()
                .map_err(|_| Error::invalid("height", trimmed))?;
            let inches: f64 = match caps.name("in") {
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| Error::invalid("height", trimmed))?,
                None => 0.0,
            };
            if inches >= 12.0 {
                return Err(Error::invalid(
                    "height",
                    format!("{} (inches must be below 12)", trimmed),
                ));
            }
            return in_range("height", feet_inches(ft, inches));
        }
    }
    Err(Error::invalid("height", format!("{} is not a number", trimmed)))
}

/// Parse a user-entered weight magnitude.
pub fn parse_weight(input: &str) -> Result<f64, Error> {
    let trimmed = input.trim();
    let v: f64 = trimmed
        .parse()
        .map_err(|_| Error::invalid("weight", format!("{} is not a number", trimmed)))?;
    in_range("weight", v)
}

fn in_range(field: &'static str, v: f64) -> Result<f64, Error> {
    if !v.is_finite() || v < 0.0 {
        return Err(Error::invalid(
            field,
            format!("{} must be a non-negative number", v),
        ));
    }
    if v != 0.0 && !(MIN_MAGNITUDE..=MAX_MAGNITUDE).contains(&v) {
        return Err(Error::invalid(
            field,
            format!("{} is outside {}..={}", v, MIN_MAGNITUDE, MAX_MAGNITUDE),
        ));
    }
    Ok(v)
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
