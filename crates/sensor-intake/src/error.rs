use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("record {0} carries no temperature, humidity or PM2.5 value")]
    NoEnvironmentalData(String),
    #[error("malformed sensor record: {0}")]
    Malformed(#[from] serde_json::Error),
}
