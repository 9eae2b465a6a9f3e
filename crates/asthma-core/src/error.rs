use thiserror::Error;

/// Errors raised while building fusion inputs or engines.
///
/// The fusion computations themselves never fail; these cover the edges
/// where an ordinal or a configuration comes from outside.
#[derive(Debug, Error)]
pub enum FusionError {
    #[error("risk ordinal out of range: {0} (expected 0, 1 or 2)")]
    InvalidOrdinal(u8),
    #[error("weight for {factor} must be positive and finite, got {weight}")]
    InvalidWeight { factor: String, weight: f64 },
    #[error("weight table is empty")]
    EmptyWeights,
    #[error("weight table must cover exactly [{expected}], got [{found}]")]
    WeightFactors { expected: String, found: String },
    #[error("thresholds out of order: {0}")]
    ThresholdOrder(String),
    #[error("confidence factor must be non-negative and finite, got {0}")]
    InvalidConfidenceFactor(f64),
    #[error("failed to parse fusion config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
