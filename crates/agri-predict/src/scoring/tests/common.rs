use std::sync::Arc;
use std::time::Duration;

use axum::response::Response;
use serde_json::{json, Value};

use crate::scoring::domain::{Crop, PredictionInput, Season, SoilType};
use crate::scoring::validation::PredictionRequest;
use crate::scoring::{prediction_router, PredictionService};

/// Loamy-soil Kharif rice farm used throughout the scenarios.
pub(super) fn reference_input() -> PredictionInput {
    PredictionInput {
        land_size: 5.0,
        yield_per_acre: 18.0,
        market_price: 2200.0,
        crop: Some(Crop::Rice),
        irrigated_percentage: 50.0,
        market_distance: 12.0,
        rainfall: 850.0,
        temperature: 28.0,
        soil_type: Some(SoilType::Loamy),
        season: Some(Season::Kharif),
    }
}

/// The reference farm as the front end would post it, numbers as text.
pub(super) fn reference_request() -> PredictionRequest {
    PredictionRequest {
        land_size: Some(json!("5")),
        irrigated_percentage: Some(json!("50")),
        soil_type: Some(json!("Loamy")),
        crop_type: Some(json!("Rice")),
        season: Some(json!("Kharif")),
        yield_per_acre: Some(json!("18")),
        rainfall: Some(json!("850")),
        temperature: Some(json!("28")),
        market_price: Some(json!("2200")),
        market_distance: Some(json!("12")),
    }
}

/// Inputs that neutralise every adjustment, so income equals the base.
pub(super) fn neutral_input(land_size: f64, yield_per_acre: f64, market_price: f64) -> PredictionInput {
    PredictionInput {
        irrigated_percentage: 0.0,
        market_distance: 0.0,
        ..PredictionInput::with_defaults(land_size, yield_per_acre, market_price, Some(Crop::Rice))
    }
}

pub(super) fn instant_service() -> Arc<PredictionService> {
    Arc::new(PredictionService::with_response_delay(Duration::ZERO))
}

pub(super) fn instant_router() -> axum::Router {
    prediction_router(instant_service())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
