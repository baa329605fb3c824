use serde::Serialize;

use crate::core::units;
use crate::models::metrics::{BmiCategory, Goal, HeightUnit, WeightUnit};

const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_BELOW: f64 = 25.0;
const OVERWEIGHT_BELOW: f64 = 30.0;
/// Upper edge used when quoting a healthy weight range.
const NORMAL_UPPER_QUOTED: f64 = 24.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// BMI from canonical height (cm) and weight (kg), rounded to two decimals.
///
/// `None` when either input is zero, negative or not finite, and also for
/// positive inputs so extreme that the arithmetic under- or overflows (a
/// subnormal height, a weight near `f64::MAX`). The parse step keeps user
/// input well inside the range where every positive pair gets a band.
pub fn compute(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if !(height_cm.is_finite() && weight_kg.is_finite()) || height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let h_m = height_cm / 100.0;
    let bmi = (weight_kg / (h_m * h_m) * 100.0).round() / 100.0;
    bmi.is_finite().then_some(bmi)
}

/// Map a bmi onto its band. Intervals are half-open, lower edge inclusive.
pub fn classify(bmi: f64) -> BmiCategory {
    match bmi {
        b if b < UNDERWEIGHT_BELOW => BmiCategory::Underweight,
        b if b < NORMAL_BELOW => BmiCategory::Normal,
        b if b < OVERWEIGHT_BELOW => BmiCategory::Overweight,
        _ => BmiCategory::Obese,
    }
}

/// Convert, compute and classify in one step.
pub fn evaluate(
    height: f64,
    height_unit: HeightUnit,
    weight: f64,
    weight_unit: WeightUnit,
) -> Option<Assessment> {
    let bmi = compute(
        units::height_to_cm(height, height_unit),
        units::weight_to_kg(weight, weight_unit),
    )?;
    Some(Assessment {
        bmi,
        category: classify(bmi),
    })
}

/// Weight range in kg that classifies as normal for the given height.
pub fn healthy_weight_range(height_cm: f64) -> Option<(f64, f64)> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return None;
    }
    let h_m = height_cm / 100.0;
    let sq = h_m * h_m;
    Some((
        units::round1(UNDERWEIGHT_BELOW * sq),
        units::round1(NORMAL_UPPER_QUOTED * sq),
    ))
}

/// Goal suggested for a category when the user has not picked one.
pub fn suggest_goal(category: BmiCategory) -> Goal {
    match category {
        BmiCategory::Underweight => Goal::Gain,
        BmiCategory::Normal => Goal::Maintain,
        BmiCategory::Overweight | BmiCategory::Obese => Goal::Lose,
    }
}
