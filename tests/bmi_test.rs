use bodymetrics::core::bmi::{classify, compute, evaluate, healthy_weight_range, suggest_goal};
use bodymetrics::models::metrics::{BmiCategory, Goal, HeightUnit, WeightUnit};

#[test]
fn test_compute_normal_adult() {
    let bmi = compute(180.0, 75.0).unwrap();
    assert!((bmi - 23.15).abs() < 1e-9);
    assert_eq!(classify(bmi), BmiCategory::Normal);
}

#[test]
fn test_compute_obese_adult() {
    let bmi = compute(160.0, 90.0).unwrap();
    assert!((bmi - 35.16).abs() < 1e-9);
    assert_eq!(classify(bmi), BmiCategory::Obese);
}

#[test]
fn test_compute_rejects_zero_height() {
    assert_eq!(compute(0.0, 70.0), None);
}

#[test]
fn test_compute_rejects_non_positive_weight() {
    assert_eq!(compute(170.0, 0.0), None);
    assert_eq!(compute(170.0, -5.0), None);
}

#[test]
fn test_compute_rejects_negative_height_and_non_finite() {
    assert_eq!(compute(-170.0, 70.0), None);
    assert_eq!(compute(f64::NAN, 70.0), None);
    assert_eq!(compute(170.0, f64::INFINITY), None);
}

#[test]
fn test_classify_boundaries_are_lower_inclusive() {
    assert_eq!(classify(0.0), BmiCategory::Underweight);
    assert_eq!(classify(18.49), BmiCategory::Underweight);
    assert_eq!(classify(18.5), BmiCategory::Normal);
    assert_eq!(classify(24.99), BmiCategory::Normal);
    assert_eq!(classify(25.0), BmiCategory::Overweight);
    assert_eq!(classify(29.99), BmiCategory::Overweight);
    assert_eq!(classify(30.0), BmiCategory::Obese);
    assert_eq!(classify(80.0), BmiCategory::Obese);
}

#[test]
fn test_classification_is_monotonic_over_grid() {
    let mut results = Vec::new();
    for h in (100..=220).step_by(5) {
        for w in (20..=200).step_by(5) {
            let bmi = compute(h as f64, w as f64).unwrap();
            let cat = classify(bmi);
            assert!(BmiCategory::ALL.contains(&cat));
            results.push((bmi, cat));
        }
    }
    results.sort_by(|a, b| a.0.total_cmp(&b.0));
    for pair in results.windows(2) {
        assert!(pair[0].1 <= pair[1].1, "{:?} then {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_evaluate_imperial_inputs() {
    let ft = bodymetrics::core::units::feet_inches(5.0, 11.0);
    let a = evaluate(ft, HeightUnit::FeetInches, 165.0, WeightUnit::Pounds).unwrap();
    assert!((a.bmi - 23.01).abs() < 1e-9);
    assert_eq!(a.category, BmiCategory::Normal);
}

#[test]
fn test_evaluate_zero_height_yields_nothing() {
    assert!(evaluate(0.0, HeightUnit::Centimeters, 70.0, WeightUnit::Kilograms).is_none());
}

#[test]
fn test_healthy_weight_range() {
    let (lo, hi) = healthy_weight_range(180.0).unwrap();
    assert!((lo - 59.9).abs() < 1e-9);
    assert!((hi - 80.7).abs() < 1e-9);
    assert!(healthy_weight_range(0.0).is_none());
}

#[test]
fn test_suggest_goal() {
    assert_eq!(suggest_goal(BmiCategory::Underweight), Goal::Gain);
    assert_eq!(suggest_goal(BmiCategory::Normal), Goal::Maintain);
    assert_eq!(suggest_goal(BmiCategory::Overweight), Goal::Lose);
    assert_eq!(suggest_goal(BmiCategory::Obese), Goal::Lose);
}

#[test]
fn test_compute_out_of_range_positive_inputs_yield_nothing() {
    assert_eq!(compute(1e-200, 70.0), None);
    assert_eq!(compute(170.0, f64::MAX), None);
}
