use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::debug;

use super::service::PredictionService;
use super::validation::PredictionRequest;

/// Router builder exposing the prediction endpoint.
pub fn prediction_router(service: Arc<PredictionService>) -> Router {
    Router::new()
        .route("/api/predict", post(predict_handler))
        .with_state(service)
}

pub(crate) async fn predict_handler(
    State(service): State<Arc<PredictionService>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match read_request(&headers, &body) {
        Ok(request) => predict_response(&service, &request).await,
        Err(err) => {
            debug!(error = %err, "prediction body is not valid JSON");
            let payload = json!({ "error": format!("Invalid JSON body: {err}") });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

/// An empty body, or one not labelled as JSON, reads as a request with no
/// fields so the caller learns which fields are required.
pub(crate) fn read_request(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<PredictionRequest, serde_json::Error> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PredictionRequest::default());
    }
    serde_json::from_slice(body)
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()) else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
        || essence.to_ascii_lowercase().ends_with("+json")
}

pub(crate) async fn predict_response(
    service: &PredictionService,
    request: &PredictionRequest,
) -> Response {
    match service.predict(request) {
        Ok(result) => {
            let delay = service.response_delay();
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            (StatusCode::OK, axum::Json(result)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
                "missing_fields": error.missing,
                "invalid_fields": error.invalid,
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
