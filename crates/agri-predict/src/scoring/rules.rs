use super::domain::{PredictionInput, NEUTRAL_FACTOR};
use serde::{Deserialize, Serialize};

const IRRIGATION_MAX_BONUS: f64 = 0.20;
const DISTANCE_COST_PER_KM: f64 = 800.0;

const DROUGHT_RAINFALL_MM: f64 = 400.0;
const EXCESS_RAINFALL_MM: f64 = 1200.0;
const DROUGHT_MULTIPLIER: f64 = 0.80;
const EXCESS_RAIN_MULTIPLIER: f64 = 0.85;

const COLD_LIMIT_C: f64 = 15.0;
const HEAT_LIMIT_C: f64 = 40.0;
const TEMPERATURE_STRESS_MULTIPLIER: f64 = 0.85;

/// Steps of the adjustment chain, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentStep {
    Crop,
    Season,
    Soil,
    Irrigation,
    MarketDistance,
    Rainfall,
    Temperature,
}

impl AdjustmentStep {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Crop => "Crop",
            Self::Season => "Season",
            Self::Soil => "Soil",
            Self::Irrigation => "Irrigation",
            Self::MarketDistance => "Market distance",
            Self::Rainfall => "Rainfall",
            Self::Temperature => "Temperature",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AdjustmentEffect {
    Multiply(f64),
    Subtract(f64),
    Unchanged,
}

/// One entry of the audit trail; `income_after` is the running value once
/// the step has been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub step: AdjustmentStep,
    pub effect: AdjustmentEffect,
    pub income_after: f64,
    pub notes: String,
}

pub(crate) fn base_income(input: &PredictionInput) -> f64 {
    input.land_size * input.yield_per_acre * input.market_price
}

/// Runs the adjustment chain over the base income. The multiplicative steps
/// and the distance subtraction are not commutative, so the order here is
/// part of the contract.
pub(crate) fn adjust_income(input: &PredictionInput) -> (Vec<Adjustment>, f64) {
    let mut adjustments = Vec::with_capacity(7);
    let mut income = base_income(input);

    let (factor, notes) = match input.crop {
        Some(crop) => (crop.multiplier(), format!("{} factor", crop.label())),
        None => (NEUTRAL_FACTOR, "unrecognised crop, neutral factor".to_string()),
    };
    income *= factor;
    adjustments.push(Adjustment {
        step: AdjustmentStep::Crop,
        effect: AdjustmentEffect::Multiply(factor),
        income_after: income,
        notes,
    });

    let (factor, notes) = match input.season {
        Some(season) => (season.multiplier(), format!("{} season", season.label())),
        None => (NEUTRAL_FACTOR, "season not recognised, neutral factor".to_string()),
    };
    income *= factor;
    adjustments.push(Adjustment {
        step: AdjustmentStep::Season,
        effect: AdjustmentEffect::Multiply(factor),
        income_after: income,
        notes,
    });

    let (factor, notes) = match input.soil_type {
        Some(soil) => (soil.multiplier(), format!("{} soil", soil.label())),
        None => (NEUTRAL_FACTOR, "soil not recognised, neutral factor".to_string()),
    };
    income *= factor;
    adjustments.push(Adjustment {
        step: AdjustmentStep::Soil,
        effect: AdjustmentEffect::Multiply(factor),
        income_after: income,
        notes,
    });

    let factor = 1.0 + (input.irrigated_percentage / 100.0) * IRRIGATION_MAX_BONUS;
    income *= factor;
    adjustments.push(Adjustment {
        step: AdjustmentStep::Irrigation,
        effect: AdjustmentEffect::Multiply(factor),
        income_after: income,
        notes: format!("{}% of land irrigated", input.irrigated_percentage),
    });

    let penalty = input.market_distance * DISTANCE_COST_PER_KM;
    income -= penalty;
    adjustments.push(Adjustment {
        step: AdjustmentStep::MarketDistance,
        effect: AdjustmentEffect::Subtract(penalty),
        income_after: income,
        notes: format!(
            "{} km to market at {} per km",
            input.market_distance, DISTANCE_COST_PER_KM
        ),
    });

    let (effect, notes) = if input.rainfall < DROUGHT_RAINFALL_MM {
        (
            AdjustmentEffect::Multiply(DROUGHT_MULTIPLIER),
            format!("{} mm is below the {DROUGHT_RAINFALL_MM} mm drought line", input.rainfall),
        )
    } else if input.rainfall > EXCESS_RAINFALL_MM {
        (
            AdjustmentEffect::Multiply(EXCESS_RAIN_MULTIPLIER),
            format!("{} mm exceeds the {EXCESS_RAINFALL_MM} mm excess line", input.rainfall),
        )
    } else {
        (
            AdjustmentEffect::Unchanged,
            format!("{} mm within the optimal band", input.rainfall),
        )
    };
    if let AdjustmentEffect::Multiply(factor) = effect {
        income *= factor;
    }
    adjustments.push(Adjustment {
        step: AdjustmentStep::Rainfall,
        effect,
        income_after: income,
        notes,
    });

    let stressed = input.temperature < COLD_LIMIT_C || input.temperature > HEAT_LIMIT_C;
    let (effect, notes) = if stressed {
        income *= TEMPERATURE_STRESS_MULTIPLIER;
        (
            AdjustmentEffect::Multiply(TEMPERATURE_STRESS_MULTIPLIER),
            format!(
                "{} C outside the {COLD_LIMIT_C}-{HEAT_LIMIT_C} C band",
                input.temperature
            ),
        )
    } else {
        (
            AdjustmentEffect::Unchanged,
            format!("{} C within the optimal band", input.temperature),
        )
    };
    adjustments.push(Adjustment {
        step: AdjustmentStep::Temperature,
        effect,
        income_after: income,
        notes,
    });

    (adjustments, income)
}
