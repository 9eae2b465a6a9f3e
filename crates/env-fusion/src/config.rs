use crate::{HumidityThresholds, Pm25Thresholds, TemperatureThresholds};
use asthma_core::{
    ensure_ascending, validate_confidence_factor, CategoryCutoffs, Factor, FactorWeights,
    FusionError,
};
use serde::{Deserialize, Serialize};

/// Factors scored by the environmental engine.
pub const ENVIRONMENTAL_FACTORS: [Factor; 3] =
    [Factor::Temperature, Factor::Humidity, Factor::Pm25];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalConfig {
    pub weights: FactorWeights,
    pub cutoffs: CategoryCutoffs,
    pub confidence_k: f64,
    pub temperature: TemperatureThresholds,
    pub humidity: HumidityThresholds,
    pub pm25: Pm25Thresholds,
}

impl Default for EnvironmentalConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::new([
                (Factor::Temperature, 1.0),
                (Factor::Humidity, 1.5),
                (Factor::Pm25, 2.0),
            ]),
            cutoffs: CategoryCutoffs {
                high_min: 1.5,
                medium_min: 0.75,
                medium_inclusive: true,
            },
            confidence_k: 0.4,
            temperature: TemperatureThresholds::default(),
            humidity: HumidityThresholds::default(),
            pm25: Pm25Thresholds::default(),
        }
    }
}

impl EnvironmentalConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, FusionError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FusionError> {
        self.weights.validate()?;
        self.weights.ensure_factors(&ENVIRONMENTAL_FACTORS)?;
        self.cutoffs.validate()?;
        validate_confidence_factor(self.confidence_k)?;
        let t = &self.temperature;
        ensure_ascending(
            "temperature",
            &[
                ("cold_max", t.cold_max),
                ("safe_min", t.safe_min),
                ("safe_max", t.safe_max),
                ("hot_min", t.hot_min),
            ],
        )?;
        let h = &self.humidity;
        ensure_ascending(
            "humidity",
            &[
                ("dry_max", h.dry_max),
                ("safe_min", h.safe_min),
                ("safe_max", h.safe_max),
                ("humid_min", h.humid_min),
            ],
        )?;
        let p = &self.pm25;
        ensure_ascending(
            "pm25",
            &[
                ("good_max", p.good_max),
                ("moderate_max", p.moderate_max),
                ("unhealthy_min", p.unhealthy_min),
            ],
        )
    }
}
