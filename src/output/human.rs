use colored::{ColoredString, Colorize};
use comfy_table::{Table, presets::UTF8_FULL};

use crate::core::bmi::{self, Assessment};
use crate::core::profile::Revalidation;
use crate::core::units;
use crate::models::metrics::{BmiCategory, BodyMetrics, HeightUnit, WeightUnit};
use crate::models::profile::Profile;

pub fn category_label(c: BmiCategory) -> ColoredString {
    let s = c.to_string();
    match c {
        BmiCategory::Underweight => s.yellow(),
        BmiCategory::Normal => s.green(),
        BmiCategory::Overweight => s.yellow(),
        BmiCategory::Obese => s.red(),
    }
}

/// `180 cm`, `5'11.0"`, `75 kg`, `165.3 lbs`.
pub fn format_height(value: f64, unit: HeightUnit) -> String {
    match unit {
        HeightUnit::Centimeters => format!("{} cm", value),
        HeightUnit::FeetInches => {
            let (ft, inches) = units::split_feet_inches(value);
            format!("{}'{:.1}\"", ft, inches)
        }
    }
}

pub fn format_weight(value: f64, unit: WeightUnit) -> String {
    format!("{} {}", value, unit.symbol())
}

/// One-line result of a calculation.
pub fn format_assessment(a: Option<&Assessment>) -> String {
    match a {
        Some(a) => format!("BMI: {:.2} ({})", a.bmi, category_label(a.category)),
        None => "BMI: not available (height and weight must be positive)".to_string(),
    }
}

/// Healthy weight range line in the user's weight unit.
pub fn format_healthy_range(height_cm: f64, unit: WeightUnit) -> Option<String> {
    let (lo, hi) = bmi::healthy_weight_range(height_cm)?;
    let lo = units::round1(units::kg_to_weight(lo, unit));
    let hi = units::round1(units::kg_to_weight(hi, unit));
    Some(format!("Healthy weight: {} - {} {}", lo, hi, unit.symbol()))
}

/// Table view of the stored tuple.
pub fn format_metrics(m: &BodyMetrics) -> String {
    if m.is_empty() {
        return "No body metrics recorded.".to_string();
    }
    let dash = || "-".to_string();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Field", "Value"]);
    table.add_row(vec![
        "Height".to_string(),
        m.height()
            .map(|h| format_height(h, m.height_unit()))
            .unwrap_or_else(dash),
    ]);
    table.add_row(vec![
        "Weight".to_string(),
        m.weight()
            .map(|w| format_weight(w, m.weight_unit()))
            .unwrap_or_else(dash),
    ]);
    table.add_row(vec![
        "BMI".to_string(),
        m.bmi().map(|b| format!("{:.2}", b)).unwrap_or_else(dash),
    ]);
    table.add_row(vec![
        "Category".to_string(),
        m.category().map(|c| c.to_string()).unwrap_or_else(dash),
    ]);
    table.add_row(vec![
        "Goal".to_string(),
        m.goal().map(|g| g.to_string()).unwrap_or_else(dash),
    ]);
    table.to_string()
}

pub fn format_profile(p: Option<&Profile>) -> String {
    let Some(p) = p else {
        return "No profile yet.".to_string();
    };
    format!(
        "User: {}\nName: {}\nImage: {}\nUpdated: {}",
        p.user_id,
        p.name.as_deref().unwrap_or("-"),
        p.image.as_deref().unwrap_or("-"),
        p.updated_at.format("%Y-%m-%d %H:%M")
    )
}

pub fn format_revalidation(r: &Revalidation) -> String {
    format!("Revalidated: {}", r.paths.join(", "))
}

/// Shown when saved state could not be read back.
pub fn recovery_notice() -> String {
    "note: saved body metrics were unreadable and have been reset"
        .dimmed()
        .to_string()
}
