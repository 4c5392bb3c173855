use std::time::Duration;

use tracing::{info, warn};

use super::validation::{validate, PredictionRequest, ValidationError};
use super::{score, PredictionResult};
use crate::config::PredictionConfig;

/// Boundary facade: validates a raw request and scores it. Holds only the
/// response delay, so one instance can be shared across every request.
#[derive(Debug, Clone)]
pub struct PredictionService {
    response_delay: Duration,
}

impl PredictionService {
    pub fn new(config: PredictionConfig) -> Self {
        Self {
            response_delay: config.response_delay(),
        }
    }

    pub fn with_response_delay(response_delay: Duration) -> Self {
        Self { response_delay }
    }

    pub fn response_delay(&self) -> Duration {
        self.response_delay
    }

    /// Validate then score. A rejected request never reaches the engine.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ValidationError> {
        let input = match validate(request) {
            Ok(input) => input,
            Err(err) => {
                warn!(missing = ?err.missing, invalid = ?err.invalid, "prediction request rejected");
                return Err(err);
            }
        };

        let result = score(&input);
        info!(
            predicted_income = result.predicted_income,
            loan_eligibility = result.loan_eligibility.label(),
            "prediction scored"
        );
        Ok(result)
    }
}

impl Default for PredictionService {
    fn default() -> Self {
        Self::new(PredictionConfig::default())
    }
}
