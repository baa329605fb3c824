#![allow(dead_code)]

use bodymetrics::db::Database;
use bodymetrics::models::metrics::{BodyMetrics, HeightUnit, WeightUnit};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

/// Metric measurements in cm / kg.
pub fn metric(height_cm: f64, weight_kg: f64) -> BodyMetrics {
    BodyMetrics::measured(
        height_cm,
        HeightUnit::Centimeters,
        weight_kg,
        WeightUnit::Kilograms,
    )
}
