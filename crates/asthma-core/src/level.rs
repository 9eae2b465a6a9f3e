use crate::error::FusionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal risk level assigned to a single sensor factor.
///
/// Serialized as its integer ordinal (0, 1, 2).
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum RiskLevel {
    #[default]
    Safe = 0,
    Medium = 1,
    High = 2,
}

impl RiskLevel {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.ordinal())
    }

    pub fn is_elevated(self) -> bool {
        self != RiskLevel::Safe
    }
}

impl From<RiskLevel> for u8 {
    fn from(level: RiskLevel) -> Self {
        level.ordinal()
    }
}

impl TryFrom<u8> for RiskLevel {
    type Error = FusionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RiskLevel::Safe),
            1 => Ok(RiskLevel::Medium),
            2 => Ok(RiskLevel::High),
            other => Err(FusionError::InvalidOrdinal(other)),
        }
    }
}

/// Final categorical outcome of a fusion engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskCategory {
    Safe,
    Medium,
    High,
}

impl RiskCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskCategory::Safe => "SAFE",
            RiskCategory::Medium => "MEDIUM",
            RiskCategory::High => "HIGH",
        }
    }

    pub fn as_lowercase(self) -> &'static str {
        match self {
            RiskCategory::Safe => "safe",
            RiskCategory::Medium => "medium",
            RiskCategory::High => "high",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sensor factors that feed the two fusion engines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Audio,
    Spo2,
    Breathing,
    Temperature,
    Humidity,
    Pm25,
}

impl Factor {
    pub fn name(self) -> &'static str {
        match self {
            Factor::Audio => "audio",
            Factor::Spo2 => "spo2",
            Factor::Breathing => "breathing",
            Factor::Temperature => "temperature",
            Factor::Humidity => "humidity",
            Factor::Pm25 => "pm25",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
