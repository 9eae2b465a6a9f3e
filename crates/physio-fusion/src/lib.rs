//! Physiological asthma risk fusion.
//!
//! Audio (cough/wheeze), SpO2 and breathing-rate readings are classified into
//! ordinal levels and fused into a weighted score. SpO2 at or below the
//! critical threshold short-circuits to HIGH regardless of the other factors.

mod breathing;
mod config;
mod fusion;
mod spo2;

#[cfg(test)]
mod tests;

pub use breathing::BreathingThresholds;
pub use config::{PhysiologicalConfig, PHYSIOLOGICAL_FACTORS};
pub use fusion::{hybrid_fusion, PhysiologicalAssessment, PhysiologicalFusion, SensorReading};
pub use spo2::Spo2Thresholds;
