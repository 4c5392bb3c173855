use super::domain::LoanEligibility;

/// Lowest income the engine will ever report.
pub const INCOME_FLOOR: u64 = 25_000;
/// Inclusive lower bound of the Medium tier.
pub const MEDIUM_THRESHOLD: u64 = 350_000;
/// Inclusive lower bound of the High tier.
pub const HIGH_THRESHOLD: u64 = 800_000;

/// Rounds half away from zero, then clamps to [`INCOME_FLOOR`]. Negative and
/// non-finite values land on the floor.
pub fn apply_floor(income: f64) -> u64 {
    let rounded = income.round();
    if rounded.is_nan() || rounded <= INCOME_FLOOR as f64 {
        return INCOME_FLOOR;
    }
    // `as` saturates at u64::MAX for out of range values.
    rounded as u64
}

pub fn classify(income: u64) -> LoanEligibility {
    if income >= HIGH_THRESHOLD {
        LoanEligibility::High
    } else if income >= MEDIUM_THRESHOLD {
        LoanEligibility::Medium
    } else {
        LoanEligibility::Low
    }
}
