//! Environmental asthma risk fusion over ambient temperature, humidity and
//! PM2.5, with human-readable trigger extraction.

mod config;
mod fusion;
mod thresholds;


pub use config::{EnvironmentalConfig, ENVIRONMENTAL_FACTORS};
pub use fusion::{
    environmental_fusion, EnvironmentalAssessment, EnvironmentalFusion, EnvironmentalReading,
};
pub use thresholds::{BandSide, HumidityThresholds, Pm25Thresholds, TemperatureThresholds};
