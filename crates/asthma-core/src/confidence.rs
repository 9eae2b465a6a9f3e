use crate::error::FusionError;
use crate::level::RiskLevel;

/// Lowest confidence any assessment reports.
pub const CONFIDENCE_FLOOR: f64 = 0.5;

/// Population standard deviation of the ordinal levels.
pub fn population_std_dev(levels: &[RiskLevel]) -> f64 {
    if levels.is_empty() {
        return 0.0;
    }
    let n = levels.len() as f64;
    let mean = levels.iter().map(|l| l.as_f64()).sum::<f64>() / n;
    let variance = levels
        .iter()
        .map(|l| {
            let d = l.as_f64() - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    variance.sqrt()
}

/// `max(0.5, 1 - σ·k)`: factors that agree give high confidence.
pub fn agreement_confidence(levels: &[RiskLevel], k: f64) -> f64 {
    (1.0 - population_std_dev(levels) * k).max(CONFIDENCE_FLOOR)
}

pub fn validate_confidence_factor(k: f64) -> Result<(), FusionError> {
    if !k.is_finite() || k < 0.0 {
        return Err(FusionError::InvalidConfidenceFactor(k));
    }
    Ok(())
}
