use agri_predict::error::AppError;
use agri_predict::scoring::{
    score_with_breakdown, validate, AdjustmentEffect, PredictionRequest, ScoreBreakdown,
};
use clap::Args;
use serde_json::Value;

/// Farm profile flags. Every value is taken as text and handed to the same
/// validator the HTTP endpoint uses, so missing fields are reported together.
#[derive(Args, Debug, Default)]
pub(crate) struct PredictArgs {
    /// Cultivated land in acres
    #[arg(long)]
    pub(crate) land_size: Option<String>,
    /// Crop grown (Rice, Wheat, Sugarcane, Cotton, Maize, Soybean, Pulses, Groundnut, Vegetables)
    #[arg(long)]
    pub(crate) crop_type: Option<String>,
    /// Expected yield in quintals per acre
    #[arg(long)]
    pub(crate) yield_per_acre: Option<String>,
    /// Market price per quintal
    #[arg(long)]
    pub(crate) market_price: Option<String>,
    /// Share of land under irrigation, 0-100 (defaults to 50)
    #[arg(long)]
    pub(crate) irrigated_percentage: Option<String>,
    /// Distance to the nearest market in km (defaults to 10)
    #[arg(long)]
    pub(crate) market_distance: Option<String>,
    /// Annual rainfall in mm (defaults to 800)
    #[arg(long)]
    pub(crate) rainfall: Option<String>,
    /// Average temperature in degrees C (defaults to 28)
    #[arg(long)]
    pub(crate) temperature: Option<String>,
    /// Soil type (Alluvial, Black Cotton, Loamy, Clay, Red, Sandy, Laterite)
    #[arg(long)]
    pub(crate) soil_type: Option<String>,
    /// Cropping season (Kharif, Rabi, Zaid)
    #[arg(long)]
    pub(crate) season: Option<String>,
    /// Print the result as JSON instead of the annotated breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

impl PredictArgs {
    fn to_request(&self) -> PredictionRequest {
        let text = |value: &Option<String>| value.clone().map(Value::String);
        PredictionRequest {
            land_size: text(&self.land_size),
            irrigated_percentage: text(&self.irrigated_percentage),
            soil_type: text(&self.soil_type),
            crop_type: text(&self.crop_type),
            season: text(&self.season),
            yield_per_acre: text(&self.yield_per_acre),
            rainfall: text(&self.rainfall),
            temperature: text(&self.temperature),
            market_price: text(&self.market_price),
            market_distance: text(&self.market_distance),
        }
    }
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let input = validate(&args.to_request())?;
    let breakdown = score_with_breakdown(&input);

    if args.json {
        match serde_json::to_string_pretty(&breakdown.result) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Prediction payload unavailable: {err}"),
        }
    } else {
        render_breakdown(&breakdown);
    }

    Ok(())
}

pub(crate) fn render_breakdown(breakdown: &ScoreBreakdown) {
    println!("Income prediction");
    println!("Base income: {:.2}", breakdown.base_income);

    println!("\nAdjustments");
    for adjustment in &breakdown.adjustments {
        let effect = match adjustment.effect {
            AdjustmentEffect::Multiply(factor) => format!("x{factor:.4}"),
            AdjustmentEffect::Subtract(amount) => format!("-{amount:.2}"),
            AdjustmentEffect::Unchanged => "no change".to_string(),
        };
        println!(
            "- {}: {} -> {:.2} ({})",
            adjustment.step.label(),
            effect,
            adjustment.income_after,
            adjustment.notes
        );
    }

    let result = &breakdown.result;
    println!("\nPredicted income: {}", result.predicted_income);
    println!("Loan eligibility: {}", result.loan_eligibility);
    println!(
        "Model {} ({} features)",
        result.model_version, result.features_used
    );
}
