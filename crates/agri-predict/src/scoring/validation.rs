use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::domain::{
    Crop, PredictionInput, Season, SoilType, DEFAULT_IRRIGATED_PERCENTAGE,
    DEFAULT_MARKET_DISTANCE_KM, DEFAULT_RAINFALL_MM, DEFAULT_TEMPERATURE_C,
};

/// Largest value accepted for any amount (land, yield, price, distance).
pub const MAX_AMOUNT: f64 = 1e9;
/// Largest accepted `land_size * yield_per_acre * market_price`. The
/// adjustment chain can grow the base by under 2x, so the final income stays
/// an exact integer in both `f64` and JSON.
pub const MAX_BASE_INCOME: f64 = 1e15;

/// Raw request body as sent by the front end. Values may arrive as JSON
/// numbers or as text, so every field is kept untyped until validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub land_size: Option<Value>,
    #[serde(default)]
    pub irrigated_percentage: Option<Value>,
    #[serde(default)]
    pub soil_type: Option<Value>,
    #[serde(default)]
    pub crop_type: Option<Value>,
    #[serde(default)]
    pub season: Option<Value>,
    #[serde(default)]
    pub yield_per_acre: Option<Value>,
    #[serde(default)]
    pub rainfall: Option<Value>,
    #[serde(default)]
    pub temperature: Option<Value>,
    #[serde(default)]
    pub market_price: Option<Value>,
    #[serde(default)]
    pub market_distance: Option<Value>,
}

/// Every field that kept a request from being scored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.missing, .invalid))]
pub struct ValidationError {
    /// Required fields that were absent or falsy, in check order.
    pub missing: Vec<&'static str>,
    /// Fields whose value could not be read as the expected type or range.
    pub invalid: Vec<&'static str>,
}

fn describe(missing: &[&'static str], invalid: &[&'static str]) -> String {
    let mut parts = Vec::with_capacity(2);
    if !missing.is_empty() {
        parts.push(format!("Missing fields: {}", missing.join(", ")));
    }
    if !invalid.is_empty() {
        parts.push(format!("Invalid fields: {}", invalid.join(", ")));
    }
    parts.join("; ")
}

/// Outcome of reading one numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Coerced {
    Absent,
    Number(f64),
    Invalid,
}

fn coerce_number(value: Option<&Value>) -> Coerced {
    match value {
        None | Some(Value::Null) => Coerced::Absent,
        Some(Value::Number(number)) => match number.as_f64() {
            Some(parsed) if parsed.is_finite() => Coerced::Number(parsed),
            _ => Coerced::Invalid,
        },
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Coerced::Absent;
            }
            match trimmed.parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => Coerced::Number(parsed),
                _ => Coerced::Invalid,
            }
        }
        Some(_) => Coerced::Invalid,
    }
}

#[derive(Debug, Default)]
struct FieldReport {
    missing: Vec<&'static str>,
    invalid: Vec<&'static str>,
}

impl FieldReport {
    /// Required amounts must be present, strictly positive and at most
    /// [`MAX_AMOUNT`]; zero is treated as missing rather than invalid.
    fn required_amount(&mut self, field: &'static str, value: Option<&Value>) -> Option<f64> {
        match coerce_number(value) {
            Coerced::Absent => {
                self.missing.push(field);
                None
            }
            Coerced::Number(parsed) if parsed == 0.0 => {
                self.missing.push(field);
                None
            }
            Coerced::Number(parsed) if parsed > 0.0 && parsed <= MAX_AMOUNT => Some(parsed),
            Coerced::Number(_) | Coerced::Invalid => {
                self.invalid.push(field);
                None
            }
        }
    }

    fn required_label(&mut self, field: &'static str, value: Option<&Value>) -> Option<String> {
        match value {
            None | Some(Value::Null) => {
                self.missing.push(field);
                None
            }
            Some(Value::String(raw)) if raw.trim().is_empty() => {
                self.missing.push(field);
                None
            }
            Some(Value::String(raw)) => Some(raw.trim().to_string()),
            Some(_) => {
                self.invalid.push(field);
                None
            }
        }
    }

    /// Absent values take the default; a supplied zero is kept as zero.
    fn optional_amount(
        &mut self,
        field: &'static str,
        value: Option<&Value>,
        default: f64,
        accepts: fn(f64) -> bool,
    ) -> f64 {
        match coerce_number(value) {
            Coerced::Absent => default,
            Coerced::Number(parsed) if accepts(parsed) => parsed,
            Coerced::Number(_) | Coerced::Invalid => {
                self.invalid.push(field);
                default
            }
        }
    }

    fn optional_label(&mut self, field: &'static str, value: Option<&Value>) -> Option<String> {
        match value {
            None | Some(Value::Null) => None,
            Some(Value::String(raw)) if raw.trim().is_empty() => None,
            Some(Value::String(raw)) => Some(raw.trim().to_string()),
            Some(_) => {
                self.invalid.push(field);
                None
            }
        }
    }

    fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }

    fn into_error(self) -> ValidationError {
        ValidationError {
            missing: self.missing,
            invalid: self.invalid,
        }
    }
}

fn non_negative(value: f64) -> bool {
    value >= 0.0
}

fn bounded_distance(value: f64) -> bool {
    (0.0..=MAX_AMOUNT).contains(&value)
}

fn percentage(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

fn any_finite(value: f64) -> bool {
    value.is_finite()
}

fn lookup<T>(field: &'static str, label: Option<String>, parse: fn(&str) -> Option<T>) -> Option<T> {
    let label = label?;
    let parsed = parse(&label);
    if parsed.is_none() {
        debug!(field, %label, "unrecognised label, scoring with neutral factor");
    }
    parsed
}

/// Check a raw request and produce a defaulted [`PredictionInput`].
///
/// Required fields are checked in the fixed order land_size, crop_type,
/// yield_per_acre, market_price, and every failing field is reported in one
/// error rather than stopping at the first.
pub fn validate(request: &PredictionRequest) -> Result<PredictionInput, ValidationError> {
    let mut report = FieldReport::default();

    let land_size = report.required_amount("land_size", request.land_size.as_ref());
    let crop_label = report.required_label("crop_type", request.crop_type.as_ref());
    let yield_per_acre = report.required_amount("yield_per_acre", request.yield_per_acre.as_ref());
    let market_price = report.required_amount("market_price", request.market_price.as_ref());

    let irrigated_percentage = report.optional_amount(
        "irrigated_percentage",
        request.irrigated_percentage.as_ref(),
        DEFAULT_IRRIGATED_PERCENTAGE,
        percentage,
    );
    let market_distance = report.optional_amount(
        "market_distance",
        request.market_distance.as_ref(),
        DEFAULT_MARKET_DISTANCE_KM,
        bounded_distance,
    );
    let rainfall = report.optional_amount(
        "rainfall",
        request.rainfall.as_ref(),
        DEFAULT_RAINFALL_MM,
        non_negative,
    );
    let temperature = report.optional_amount(
        "temperature",
        request.temperature.as_ref(),
        DEFAULT_TEMPERATURE_C,
        any_finite,
    );
    let soil_label = report.optional_label("soil_type", request.soil_type.as_ref());
    let season_label = report.optional_label("season", request.season.as_ref());

    let (Some(land_size), Some(crop_label), Some(yield_per_acre), Some(market_price)) =
        (land_size, crop_label, yield_per_acre, market_price)
    else {
        return Err(report.into_error());
    };
    if land_size * yield_per_acre * market_price > MAX_BASE_INCOME {
        report
            .invalid
            .extend(["land_size", "yield_per_acre", "market_price"]);
    }
    if !report.is_clean() {
        return Err(report.into_error());
    }

    Ok(PredictionInput {
        land_size,
        yield_per_acre,
        market_price,
        crop: lookup("crop_type", Some(crop_label), Crop::from_label),
        irrigated_percentage,
        market_distance,
        rainfall,
        temperature,
        soil_type: lookup("soil_type", soil_label, SoilType::from_label),
        season: lookup("season", season_label, Season::from_label),
    })
}
