use super::common::*;
use crate::scoring::domain::{Crop, LoanEligibility, PredictionInput, Season, SoilType};
use crate::scoring::{
    apply_floor, classify, score, score_with_breakdown, AdjustmentEffect, AdjustmentStep,
    FEATURES_USED, INCOME_FLOOR, MODEL_VERSION,
};

#[test]
fn reference_farm_scores_below_medium_tier() {
    let result = score(&reference_input());

    assert_eq!(result.predicted_income, 230_525);
    assert_eq!(result.loan_eligibility, LoanEligibility::Low);
    assert_eq!(result.model_version, MODEL_VERSION);
    assert_eq!(result.features_used, FEATURES_USED);
}

#[test]
fn zero_distance_and_heavy_rain_rescore_the_reference_farm() {
    let mut input = reference_input();
    input.market_distance = 0.0;
    input.rainfall = 1300.0;

    let breakdown = score_with_breakdown(&input);

    let distance = breakdown
        .adjustments
        .iter()
        .find(|adjustment| adjustment.step == AdjustmentStep::MarketDistance)
        .expect("distance step present");
    assert_eq!(distance.effect, AdjustmentEffect::Subtract(0.0));

    let rainfall = breakdown
        .adjustments
        .iter()
        .find(|adjustment| adjustment.step == AdjustmentStep::Rainfall)
        .expect("rainfall step present");
    assert_eq!(rainfall.effect, AdjustmentEffect::Multiply(0.85));

    assert_eq!(breakdown.result.predicted_income, 204_106);
    assert_eq!(breakdown.result.loan_eligibility, LoanEligibility::Low);
}

#[test]
fn stressed_sugarcane_farm_still_reaches_high_tier() {
    let input = PredictionInput {
        land_size: 10.0,
        yield_per_acre: 40.0,
        market_price: 2000.0,
        crop: Some(Crop::Sugarcane),
        irrigated_percentage: 100.0,
        market_distance: 5.0,
        rainfall: 300.0,
        temperature: 42.0,
        soil_type: Some(SoilType::BlackCotton),
        season: Some(Season::Rabi),
    };

    let result = score(&input);

    assert_eq!(result.predicted_income, 973_216);
    assert_eq!(result.loan_eligibility, LoanEligibility::High);
}

#[test]
fn breakdown_records_every_step_in_order() {
    let breakdown = score_with_breakdown(&reference_input());

    let steps: Vec<_> = breakdown
        .adjustments
        .iter()
        .map(|adjustment| adjustment.step)
        .collect();
    assert_eq!(
        steps,
        vec![
            AdjustmentStep::Crop,
            AdjustmentStep::Season,
            AdjustmentStep::Soil,
            AdjustmentStep::Irrigation,
            AdjustmentStep::MarketDistance,
            AdjustmentStep::Rainfall,
            AdjustmentStep::Temperature,
        ]
    );
    assert_eq!(breakdown.base_income, 198_000.0);
    assert_eq!(
        breakdown.adjustments.last().map(|adjustment| adjustment.income_after),
        Some(breakdown.adjusted_income)
    );
    assert_eq!(breakdown.result, score(&reference_input()));
}

#[test]
fn floor_holds_for_worst_case_inputs() {
    let input = PredictionInput {
        land_size: 0.5,
        yield_per_acre: 2.0,
        market_price: 900.0,
        crop: Some(Crop::Pulses),
        irrigated_percentage: 0.0,
        market_distance: 250.0,
        rainfall: 50.0,
        temperature: 48.0,
        soil_type: Some(SoilType::Sandy),
        season: Some(Season::Zaid),
    };

    let breakdown = score_with_breakdown(&input);

    assert!(breakdown.adjusted_income < 0.0);
    assert_eq!(breakdown.result.predicted_income, INCOME_FLOOR);
    assert_eq!(breakdown.result.loan_eligibility, LoanEligibility::Low);
}

#[test]
fn floor_holds_across_a_grid_of_unfavourable_inputs() {
    for crop in Crop::ordered() {
        for soil in SoilType::ordered() {
            for distance in [0.0, 40.0, 400.0] {
                let input = PredictionInput {
                    crop: Some(crop),
                    soil_type: Some(soil),
                    season: Some(Season::Zaid),
                    market_distance: distance,
                    rainfall: 100.0,
                    temperature: 5.0,
                    ..PredictionInput::with_defaults(1.0, 3.0, 1500.0, None)
                };
                assert!(score(&input).predicted_income >= INCOME_FLOOR);
            }
        }
    }
}

#[test]
fn thresholds_are_inclusive_lower_bounds() {
    assert_eq!(score(&neutral_input(1.0, 1.0, 349_999.0)).loan_eligibility, LoanEligibility::Low);
    assert_eq!(score(&neutral_input(1.0, 1.0, 350_000.0)).loan_eligibility, LoanEligibility::Medium);
    assert_eq!(score(&neutral_input(1.0, 1.0, 799_999.0)).loan_eligibility, LoanEligibility::Medium);
    assert_eq!(score(&neutral_input(1.0, 1.0, 800_000.0)).loan_eligibility, LoanEligibility::High);

    assert_eq!(classify(350_000), LoanEligibility::Medium);
    assert_eq!(classify(800_000), LoanEligibility::High);
    assert_eq!(classify(INCOME_FLOOR), LoanEligibility::Low);
}

#[test]
fn eligibility_never_regresses_as_income_rises() {
    let mut previous = LoanEligibility::Low;
    let mut seen = Vec::new();

    for price in (10_000..=1_000_000).step_by(5_000) {
        let result = score(&neutral_input(1.0, 1.0, price as f64));
        assert!(result.loan_eligibility >= previous, "regressed at price {price}");
        if seen.last() != Some(&result.loan_eligibility) {
            seen.push(result.loan_eligibility);
        }
        previous = result.loan_eligibility;
    }

    assert_eq!(
        seen,
        vec![LoanEligibility::Low, LoanEligibility::Medium, LoanEligibility::High]
    );
}

#[test]
fn unknown_categories_score_as_neutral() {
    let mut unknown = reference_input();
    unknown.season = None;
    unknown.soil_type = None;
    unknown.crop = None;

    let mut neutral = reference_input();
    neutral.season = Some(Season::Rabi);
    neutral.crop = Some(Crop::Rice);
    neutral.soil_type = None;

    assert_eq!(score(&unknown), score(&neutral));
}

#[test]
fn scoring_is_idempotent() {
    let input = reference_input();
    assert_eq!(score(&input), score(&input));
    assert_eq!(score_with_breakdown(&input), score_with_breakdown(&input));
}

#[test]
fn floor_rounds_half_away_from_zero() {
    assert_eq!(apply_floor(230_524.5), 230_525);
    assert_eq!(apply_floor(230_524.49), 230_524);
    assert_eq!(apply_floor(-1_000.0), INCOME_FLOOR);
    assert_eq!(apply_floor(f64::NAN), INCOME_FLOOR);
    assert_eq!(apply_floor(24_999.6), INCOME_FLOOR);
}
