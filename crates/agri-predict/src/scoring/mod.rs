//! Farm income scoring.
//!
//! A request flows through [`validate`], which reports every missing or
//! malformed field at once, and then through [`score`], a pure function that
//! applies the factor tables and adjustment chain before flooring the income
//! and assigning an eligibility tier.

pub mod domain;
pub mod policy;
pub mod router;
pub(crate) mod rules;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Crop, LoanEligibility, PredictionInput, PredictionResult, Season, SoilType, FEATURES_USED,
    MODEL_VERSION,
};
pub use policy::{apply_floor, classify, HIGH_THRESHOLD, INCOME_FLOOR, MEDIUM_THRESHOLD};
pub use router::prediction_router;
pub use rules::{Adjustment, AdjustmentEffect, AdjustmentStep};
pub use service::PredictionService;
pub use validation::{validate, PredictionRequest, ValidationError};

use serde::{Deserialize, Serialize};

/// Prediction plus the trail of adjustments that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub result: PredictionResult,
    pub base_income: f64,
    /// Running income after the last adjustment, before rounding and floor.
    pub adjusted_income: f64,
    pub adjustments: Vec<Adjustment>,
}

/// Score a validated input. Total over finite inputs; never fails.
pub fn score(input: &PredictionInput) -> PredictionResult {
    let (_, income) = rules::adjust_income(input);
    finalize(income)
}

/// Same result as [`score`], keeping each intermediate step for display.
pub fn score_with_breakdown(input: &PredictionInput) -> ScoreBreakdown {
    let base_income = rules::base_income(input);
    let (adjustments, adjusted_income) = rules::adjust_income(input);

    ScoreBreakdown {
        result: finalize(adjusted_income),
        base_income,
        adjusted_income,
        adjustments,
    }
}

fn finalize(income: f64) -> PredictionResult {
    let predicted_income = apply_floor(income);
    PredictionResult::new(predicted_income, classify(predicted_income))
}
