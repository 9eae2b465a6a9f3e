use asthma_core::RiskLevel;
use serde::{Deserialize, Serialize};

/// Breathing-rate bands for children aged 3 to 7, in breaths per minute.
///
/// The reading is classified as-is; converting an accelerometer proxy into
/// breaths per minute is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreathingThresholds {
    pub safe_max: f64,
    pub medium_max: f64,
}

impl Default for BreathingThresholds {
    fn default() -> Self {
        Self {
            safe_max: 34.0,
            medium_max: 40.0,
        }
    }
}

impl BreathingThresholds {
    pub fn classify(&self, breaths_per_minute: f64) -> RiskLevel {
        if breaths_per_minute > self.medium_max {
            RiskLevel::High
        } else if breaths_per_minute > self.safe_max {
            RiskLevel::Medium
        } else {
            RiskLevel::Safe
        }
    }
}
