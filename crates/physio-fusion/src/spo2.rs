use asthma_core::RiskLevel;
use serde::{Deserialize, Serialize};

/// Blood-oxygen saturation bands, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spo2Thresholds {
    /// At or below this is High.
    pub high_max: f64,
    /// At or above this is Safe.
    pub safe_min: f64,
}

impl Default for Spo2Thresholds {
    fn default() -> Self {
        Self {
            high_max: 92.0,
            safe_min: 95.0,
        }
    }
}

impl Spo2Thresholds {
    pub fn classify(&self, spo2_percent: f64) -> RiskLevel {
        if spo2_percent <= self.high_max {
            RiskLevel::High
        } else if spo2_percent < self.safe_min {
            RiskLevel::Medium
        } else {
            RiskLevel::Safe
        }
    }
}
