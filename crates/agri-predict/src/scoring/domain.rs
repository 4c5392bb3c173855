use serde::{Deserialize, Serialize};
use std::fmt;

/// Label reported with every prediction.
pub const MODEL_VERSION: &str = "v2.0";
/// Feature count advertised alongside predictions.
pub const FEATURES_USED: u32 = 286;

pub const DEFAULT_IRRIGATED_PERCENTAGE: f64 = 50.0;
pub const DEFAULT_MARKET_DISTANCE_KM: f64 = 10.0;
pub const DEFAULT_RAINFALL_MM: f64 = 800.0;
pub const DEFAULT_TEMPERATURE_C: f64 = 28.0;

/// Factor used for any categorical value outside the known tables.
pub const NEUTRAL_FACTOR: f64 = 1.0;

/// Drops the word separators front ends use interchangeably so that
/// `Black Cotton`, `Black-Cotton` and `Black_Cotton` compare equal. Case is
/// significant: `sugarcane` is not a known crop.
fn normalize_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Rice,
    Wheat,
    Sugarcane,
    Cotton,
    Maize,
    Soybean,
    Pulses,
    Groundnut,
    Vegetables,
}

impl Crop {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Rice,
            Self::Wheat,
            Self::Sugarcane,
            Self::Cotton,
            Self::Maize,
            Self::Soybean,
            Self::Pulses,
            Self::Groundnut,
            Self::Vegetables,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rice => "Rice",
            Self::Wheat => "Wheat",
            Self::Sugarcane => "Sugarcane",
            Self::Cotton => "Cotton",
            Self::Maize => "Maize",
            Self::Soybean => "Soybean",
            Self::Pulses => "Pulses",
            Self::Groundnut => "Groundnut",
            Self::Vegetables => "Vegetables",
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Rice => 1.0,
            Self::Wheat => 0.95,
            Self::Sugarcane => 1.3,
            Self::Cotton => 1.1,
            Self::Maize => 0.85,
            Self::Soybean => 0.9,
            Self::Pulses => 0.8,
            Self::Groundnut => 1.05,
            Self::Vegetables => 1.25,
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let needle = normalize_label(raw);
        Self::ordered()
            .into_iter()
            .find(|crop| normalize_label(crop.label()) == needle)
    }
}

/// Indian cropping seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    pub const fn ordered() -> [Self; 3] {
        [Self::Kharif, Self::Rabi, Self::Zaid]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Kharif => "Kharif",
            Self::Rabi => "Rabi",
            Self::Zaid => "Zaid",
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Kharif => 1.05,
            Self::Rabi => 1.0,
            Self::Zaid => 0.9,
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let needle = normalize_label(raw);
        Self::ordered()
            .into_iter()
            .find(|season| normalize_label(season.label()) == needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Alluvial,
    BlackCotton,
    Loamy,
    Clay,
    Red,
    Sandy,
    Laterite,
}

impl SoilType {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Alluvial,
            Self::BlackCotton,
            Self::Loamy,
            Self::Clay,
            Self::Red,
            Self::Sandy,
            Self::Laterite,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Alluvial => "Alluvial",
            Self::BlackCotton => "Black Cotton",
            Self::Loamy => "Loamy",
            Self::Clay => "Clay",
            Self::Red => "Red",
            Self::Sandy => "Sandy",
            Self::Laterite => "Laterite",
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Alluvial => 1.1,
            Self::BlackCotton => 1.15,
            Self::Loamy => 1.05,
            Self::Clay => 0.95,
            Self::Red => 0.9,
            Self::Sandy => 0.8,
            Self::Laterite => 0.85,
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let needle = normalize_label(raw);
        Self::ordered()
            .into_iter()
            .find(|soil| normalize_label(soil.label()) == needle)
    }
}

/// Validated, fully defaulted input to the scoring engine.
///
/// Categorical fields are `None` when the caller omitted them or sent a label
/// outside the known tables; both cases score with [`NEUTRAL_FACTOR`].
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionInput {
    pub land_size: f64,
    pub yield_per_acre: f64,
    pub market_price: f64,
    pub crop: Option<Crop>,
    pub irrigated_percentage: f64,
    pub market_distance: f64,
    pub rainfall: f64,
    pub temperature: f64,
    pub soil_type: Option<SoilType>,
    pub season: Option<Season>,
}

impl PredictionInput {
    /// Required values plus the documented defaults for everything else.
    pub fn with_defaults(
        land_size: f64,
        yield_per_acre: f64,
        market_price: f64,
        crop: Option<Crop>,
    ) -> Self {
        Self {
            land_size,
            yield_per_acre,
            market_price,
            crop,
            irrigated_percentage: DEFAULT_IRRIGATED_PERCENTAGE,
            market_distance: DEFAULT_MARKET_DISTANCE_KM,
            rainfall: DEFAULT_RAINFALL_MM,
            temperature: DEFAULT_TEMPERATURE_C,
            soil_type: None,
            season: None,
        }
    }
}

/// Coarse loan-eligibility tier derived from the floored income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoanEligibility {
    Low,
    Medium,
    High,
}

impl LoanEligibility {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for LoanEligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Response envelope returned to callers of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_income: u64,
    pub loan_eligibility: LoanEligibility,
    pub model_version: String,
    pub features_used: u32,
}

impl PredictionResult {
    pub(crate) fn new(predicted_income: u64, loan_eligibility: LoanEligibility) -> Self {
        Self {
            predicted_income,
            loan_eligibility,
            model_version: MODEL_VERSION.to_string(),
            features_used: FEATURES_USED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_lookup() {
        for crop in Crop::ordered() {
            assert_eq!(Crop::from_label(crop.label()), Some(crop));
        }
        for season in Season::ordered() {
            assert_eq!(Season::from_label(season.label()), Some(season));
        }
        for soil in SoilType::ordered() {
            assert_eq!(SoilType::from_label(soil.label()), Some(soil));
        }
    }

    #[test]
    fn soil_lookup_tolerates_separator_variants() {
        for raw in ["Black Cotton", "Black-Cotton", "Black_Cotton", " Black Cotton "] {
            assert_eq!(SoilType::from_label(raw), Some(SoilType::BlackCotton), "{raw}");
        }
        assert_eq!(SoilType::from_label("Peat"), None);
        assert_eq!(Crop::from_label(""), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Crop::from_label("sugarcane"), None);
        assert_eq!(Crop::from_label("RICE"), None);
        assert_eq!(SoilType::from_label("black cotton"), None);
        assert_eq!(Season::from_label("kharif"), None);
        assert_eq!(Crop::from_label("Sugarcane"), Some(Crop::Sugarcane));
    }

    #[test]
    fn eligibility_serializes_as_capitalized_label() {
        let value = serde_json::to_value(LoanEligibility::Medium).expect("serializes");
        assert_eq!(value, serde_json::json!("Medium"));
        assert!(LoanEligibility::Low < LoanEligibility::Medium);
        assert!(LoanEligibility::Medium < LoanEligibility::High);
    }
}
