use crate::level::{Factor, RiskCategory, RiskLevel};
use crate::scoring::IndividualRisks;
use serde::{Deserialize, Serialize};

/// Result shared by both fusion engines. Created fresh per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub category: RiskCategory,
    pub score: f64,
    pub confidence: f64,
    pub reasoning: String,
    pub individual_risks: IndividualRisks,
}

impl RiskAssessment {
    pub fn level(&self, factor: Factor) -> Option<RiskLevel> {
        self.individual_risks.get(&factor).copied()
    }

    /// Factors classified above Safe, in factor order.
    pub fn elevated_factors(&self) -> Vec<Factor> {
        self.individual_risks
            .iter()
            .filter(|(_, level)| level.is_elevated())
            .map(|(factor, _)| *factor)
            .collect()
    }

    pub fn is_escalation_from(&self, previous: &RiskAssessment) -> bool {
        self.category > previous.category
    }
}
