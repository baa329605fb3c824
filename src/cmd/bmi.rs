use anyhow::Result;
use serde_json::json;

use bodymetrics::core::{bmi, units};
use bodymetrics::models::config::Config;
use bodymetrics::output;
use bodymetrics::output::human;

pub fn run(
    height: &str,
    weight: &str,
    height_unit: Option<&str>,
    weight_unit: Option<&str>,
    human_flag: bool,
) -> Result<()> {
    let config = Config::load()?;
    let (hu, wu) = super::resolve_units(&config, height_unit, weight_unit)?;
    let height = units::parse_height(height, hu)?;
    let weight = units::parse_weight(weight)?;

    let height_cm = units::height_to_cm(height, hu);
    let weight_kg = units::weight_to_kg(weight, wu);
    let assessment = bmi::evaluate(height, hu, weight, wu);

    if human_flag {
        println!("{}", human::format_assessment(assessment.as_ref()));
        if let Some(line) = human::format_healthy_range(height_cm, wu) {
            println!("{}", line);
        }
    } else {
        let out = output::success(
            "bmi",
            json!({
                "height_cm": units::round1(height_cm),
                "weight_kg": units::round1(weight_kg),
                "bmi": assessment.map(|a| a.bmi),
                "category": assessment.map(|a| a.category),
                "healthy_weight_kg": bmi::healthy_weight_range(height_cm),
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
