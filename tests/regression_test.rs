use assert_float_eq::*;

use diet_planner_rs::error::DietError;
use diet_planner_rs::models::{Nutrient, ReferenceRow, Sex};
use diet_planner_rs::planner::{estimate_requirement, RequirementModel};

/// A reference row whose nutrient requirements step up from `base` in the
/// target-nutrient order (protein = base, fat = base + 1, ...).
fn row(sex: Sex, weight: f64, base: f64) -> ReferenceRow {
    ReferenceRow {
        sex,
        weight,
        protein: base,
        fat: base + 1.0,
        carbohydrate: base + 2.0,
        calcium: base + 3.0,
        iron: base + 4.0,
        vitamin_a: base + 5.0,
        vitamin_c: base + 6.0,
    }
}

#[test]
fn test_two_rows_interpolate_to_the_midpoint() {
    let rows = vec![row(Sex::Female, 50.0, 40.0), row(Sex::Female, 70.0, 60.0)];

    let requirement = estimate_requirement(&rows, Sex::Female, 60.0).unwrap();

    for (offset, nutrient) in Nutrient::TARGETS.iter().enumerate() {
        let expected = 50.0 + offset as f64;
        assert_float_absolute_eq!(requirement.target(*nutrient), expected, 1e-9);
    }
}

#[test]
fn test_rows_for_the_other_sex_are_ignored() {
    let female_only = vec![row(Sex::Female, 50.0, 40.0), row(Sex::Female, 70.0, 60.0)];

    let mut mixed = female_only.clone();
    mixed.push(row(Sex::Male, 50.0, 900.0));
    mixed.push(row(Sex::Male, 70.0, -900.0));

    let from_female_only = estimate_requirement(&female_only, Sex::Female, 62.0).unwrap();
    let from_mixed = estimate_requirement(&mixed, Sex::Female, 62.0).unwrap();

    assert_eq!(from_female_only, from_mixed);
}

#[test]
fn test_same_inputs_give_identical_predictions() {
    let rows = vec![
        row(Sex::Male, 60.0, 50.0),
        row(Sex::Male, 75.0, 61.0),
        row(Sex::Male, 90.0, 74.0),
    ];

    let first = estimate_requirement(&rows, Sex::Male, 68.5).unwrap();
    let second = estimate_requirement(&rows, Sex::Male, 68.5).unwrap();

    for nutrient in Nutrient::TARGETS {
        assert_eq!(first.target(nutrient), second.target(nutrient));
    }
}

#[test]
fn test_predictions_follow_each_fitted_slope() {
    // Protein rises with weight while vitamin C falls.
    let samples = [(60.0, 50.0, 90.0), (80.0, 70.0, 70.0), (100.0, 90.0, 50.0)];
    let mut rows = Vec::new();
    for &(weight, protein, vitamin_c) in &samples {
        let mut reference = row(Sex::Male, weight, protein);
        reference.vitamin_c = vitamin_c;
        rows.push(reference);
    }

    let model = RequirementModel::fit(&rows, Sex::Male).unwrap();
    assert!(model.line(Nutrient::Protein).unwrap().slope() > 0.0);
    assert!(model.line(Nutrient::VitaminC).unwrap().slope() < 0.0);

    let lighter = model.predict(65.0);
    let heavier = model.predict(95.0);
    assert!(
        heavier.target(Nutrient::Protein) > lighter.target(Nutrient::Protein),
        "protein should rise with weight"
    );
    assert!(
        heavier.target(Nutrient::VitaminC) < lighter.target(Nutrient::VitaminC),
        "vitamin C should fall with weight"
    );
}

#[test]
fn test_no_rows_for_sex_is_a_configuration_error() {
    let rows = vec![row(Sex::Female, 50.0, 40.0), row(Sex::Female, 70.0, 60.0)];

    let err = RequirementModel::fit(&rows, Sex::Male).unwrap_err();
    assert!(matches!(err, DietError::NoReferenceRows(Sex::Male)));
}

#[test]
fn test_single_distinct_weight_is_a_configuration_error() {
    let rows = vec![
        row(Sex::Female, 62.0, 40.0),
        row(Sex::Female, 62.0, 44.0),
        row(Sex::Female, 62.0, 48.0),
    ];

    let err = RequirementModel::fit(&rows, Sex::Female).unwrap_err();
    match err {
        DietError::DegenerateWeights { sex, distinct } => {
            assert_eq!(sex, Sex::Female);
            assert_eq!(distinct, 1);
        }
        other => panic!("expected DegenerateWeights, got {:?}", other),
    }
}

#[test]
fn test_far_extrapolation_passes_through_unclamped() {
    // Every requirement falls as weight rises, so a huge weight goes negative.
    let rows = vec![row(Sex::Female, 50.0, 60.0), row(Sex::Female, 70.0, 40.0)];

    let requirement = estimate_requirement(&rows, Sex::Female, 1000.0).unwrap();
    assert!(
        requirement.target(Nutrient::Protein) < 0.0,
        "expected a negative extrapolated target, got {}",
        requirement.target(Nutrient::Protein)
    );
}

#[test]
fn test_estimate_matches_explicit_fit_then_predict() {
    let rows = vec![
        row(Sex::Male, 55.0, 45.0),
        row(Sex::Male, 70.0, 58.0),
        row(Sex::Male, 85.0, 66.0),
    ];

    let via_wrapper = estimate_requirement(&rows, Sex::Male, 72.0).unwrap();
    let via_model = RequirementModel::fit(&rows, Sex::Male).unwrap().predict(72.0);

    assert_eq!(via_wrapper, via_model);
}
