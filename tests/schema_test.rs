mod common;

use bodymetrics::store::schema::{self, DecodeError, SCHEMA_VERSION};
use serde_json::{Value, json};

#[test]
fn test_encode_wraps_in_versioned_envelope() {
    let raw = schema::encode(&common::metric(180.0, 75.0)).unwrap();
    let v: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["version"], SCHEMA_VERSION);
    assert_eq!(v["metrics"]["bmi"], 23.15);
    assert_eq!(v["metrics"]["category"], "normal");
    assert_eq!(v["metrics"]["height_unit"], "centimeters");
    assert_eq!(v["metrics"]["weight_unit"], "kilograms");
    assert!(v["metrics"]["goal"].is_null());
}

#[test]
fn test_decode_round_trip() {
    let m = common::metric(160.0, 90.0);
    let decoded = schema::decode(&schema::encode(&m).unwrap()).unwrap();
    assert_eq!(decoded, m);
}

#[test]
fn test_decode_defaults_missing_units() {
    let raw = json!({ "version": 1, "metrics": { "goal": "lose" } }).to_string();
    let m = schema::decode(&raw).unwrap();
    assert_eq!(m.goal(), Some(bodymetrics::models::Goal::Lose));
    assert_eq!(m.bmi(), None);
}

#[test]
fn test_decode_rejects_future_version() {
    let raw = json!({ "version": 2, "metrics": {} }).to_string();
    assert!(matches!(
        schema::decode(&raw),
        Err(DecodeError::UnsupportedVersion { found: 2 })
    ));
}

#[test]
fn test_decode_rejects_missing_version() {
    let raw = json!({ "bmi": null, "height": 180.0 }).to_string();
    assert!(matches!(schema::decode(&raw), Err(DecodeError::Malformed(_))));
}

#[test]
fn test_decode_rejects_unknown_fields() {
    let raw = json!({ "version": 1, "metrics": { "age": 40 } }).to_string();
    assert!(matches!(schema::decode(&raw), Err(DecodeError::Malformed(_))));
}

#[test]
fn test_decode_rejects_unknown_enum_value() {
    let raw = json!({ "version": 1, "metrics": { "height_unit": "furlongs" } }).to_string();
    assert!(matches!(schema::decode(&raw), Err(DecodeError::Malformed(_))));
}

#[test]
fn test_decode_rejects_category_without_bmi() {
    let raw = json!({ "version": 1, "metrics": { "category": "obese" } }).to_string();
    assert!(matches!(schema::decode(&raw), Err(DecodeError::Invalid(_))));
}

#[test]
fn test_decode_rejects_bmi_that_does_not_match_measurements() {
    let raw = json!({
        "version": 1,
        "metrics": {
            "bmi": 40.0,
            "category": "obese",
            "height": 180.0,
            "weight": 75.0
        }
    })
    .to_string();
    assert!(matches!(schema::decode(&raw), Err(DecodeError::Invalid(_))));
}

#[test]
fn test_decode_rejects_wrong_category_for_bmi() {
    let raw = json!({
        "version": 1,
        "metrics": {
            "bmi": 23.15,
            "category": "obese",
            "height": 180.0,
            "weight": 75.0
        }
    })
    .to_string();
    assert!(matches!(schema::decode(&raw), Err(DecodeError::Invalid(_))));
}

#[test]
fn test_decode_rejects_negative_magnitude() {
    let raw = json!({ "version": 1, "metrics": { "height": -1.0 } }).to_string();
    assert!(matches!(schema::decode(&raw), Err(DecodeError::Invalid(_))));
}
