use crate::PhysiologicalConfig;
use asthma_core::{
    agreement_confidence, Factor, FusionError, IndividualRisks, RiskAssessment, RiskCategory,
    RiskLevel,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One physiological sample, constructed per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Pre-classified cough/wheeze level from the audio model.
    pub audio_risk: RiskLevel,
    pub spo2_percent: f64,
    /// Treated as breaths per minute for thresholding.
    pub breathing_proxy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysiologicalAssessment {
    #[serde(flatten)]
    pub risk: RiskAssessment,
    pub critical_override: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PhysiologicalFusion {
    config: PhysiologicalConfig,
}

impl PhysiologicalFusion {
    pub fn new(config: PhysiologicalConfig) -> Result<Self, FusionError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn assess(&self, reading: &SensorReading) -> PhysiologicalAssessment {
        let cfg = &self.config;
        let spo2_risk = cfg.spo2.classify(reading.spo2_percent);
        let breathing_risk = cfg.breathing.classify(reading.breathing_proxy);

        let individual_risks: IndividualRisks = [
            (Factor::Audio, reading.audio_risk),
            (Factor::Spo2, spo2_risk),
            (Factor::Breathing, breathing_risk),
        ]
        .into_iter()
        .collect();

        // Low SpO2 is terminal: nothing else may downgrade it.
        if spo2_risk == RiskLevel::High {
            warn!(
                spo2_percent = reading.spo2_percent,
                "critical SpO2 override engaged"
            );
            return PhysiologicalAssessment {
                risk: RiskAssessment {
                    category: RiskCategory::High,
                    score: cfg.override_score,
                    confidence: cfg.override_confidence,
                    reasoning: format!(
                        "CRITICAL OVERRIDE: SpO2 at or below {}% triggered the safety guardrail.",
                        cfg.spo2.high_max
                    ),
                    individual_risks,
                },
                critical_override: true,
            };
        }

        let score = cfg.weights.weighted_score(&individual_risks);
        let category = cfg.cutoffs.categorize(score);
        let levels: Vec<RiskLevel> = individual_risks.values().copied().collect();
        let confidence = agreement_confidence(&levels, cfg.confidence_k);

        debug!(
            audio = reading.audio_risk.ordinal(),
            spo2 = spo2_risk.ordinal(),
            breathing = breathing_risk.ordinal(),
            score,
            confidence,
            %category,
            "physiological fusion"
        );

        PhysiologicalAssessment {
            risk: RiskAssessment {
                category,
                score,
                confidence,
                reasoning: format!(
                    "Weighted fusion score of {score:.2} resulted in a {category} risk assessment."
                ),
                individual_risks,
            },
            critical_override: false,
        }
    }
}

/// Fuses a reading with the default clinical constants.
pub fn hybrid_fusion(reading: &SensorReading) -> PhysiologicalAssessment {
    PhysiologicalFusion::default().assess(reading)
}
