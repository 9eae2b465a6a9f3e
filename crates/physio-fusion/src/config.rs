use crate::{BreathingThresholds, Spo2Thresholds};
use asthma_core::{
    ensure_ascending, validate_confidence_factor, CategoryCutoffs, Factor, FactorWeights,
    FusionError,
};
use serde::{Deserialize, Serialize};

/// Factors scored by the physiological engine.
pub const PHYSIOLOGICAL_FACTORS: [Factor; 3] = [Factor::Audio, Factor::Spo2, Factor::Breathing];

/// Constants of the physiological engine. `Default` carries the clinical
/// values; TOML overrides are validated before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysiologicalConfig {
    pub weights: FactorWeights,
    pub cutoffs: CategoryCutoffs,
    pub confidence_k: f64,
    pub spo2: Spo2Thresholds,
    pub breathing: BreathingThresholds,
    pub override_score: f64,
    pub override_confidence: f64,
}

impl Default for PhysiologicalConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::new([
                (Factor::Audio, 1.0),
                (Factor::Spo2, 2.5),
                (Factor::Breathing, 1.5),
            ]),
            cutoffs: CategoryCutoffs {
                high_min: 1.33,
                medium_min: 0.67,
                medium_inclusive: false,
            },
            confidence_k: 0.5,
            spo2: Spo2Thresholds::default(),
            breathing: BreathingThresholds::default(),
            override_score: 2.0,
            override_confidence: 0.95,
        }
    }
}

impl PhysiologicalConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, FusionError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FusionError> {
        self.weights.validate()?;
        self.weights.ensure_factors(&PHYSIOLOGICAL_FACTORS)?;
        self.cutoffs.validate()?;
        validate_confidence_factor(self.confidence_k)?;
        ensure_ascending(
            "spo2",
            &[
                ("high_max", self.spo2.high_max),
                ("safe_min", self.spo2.safe_min),
            ],
        )?;
        ensure_ascending(
            "breathing",
            &[
                ("safe_max", self.breathing.safe_max),
                ("medium_max", self.breathing.medium_max),
            ],
        )?;
        ensure_ascending(
            "override",
            &[
                ("floor", asthma_core::CONFIDENCE_FLOOR),
                ("override_confidence", self.override_confidence),
                ("ceiling", 1.0),
            ],
        )?;
        ensure_ascending(
            "override",
            &[
                ("zero", 0.0),
                ("override_score", self.override_score),
                ("max_ordinal", 2.0),
            ],
        )?;
        Ok(())
    }
}
