use crate::IntakeError;
use asthma_core::RiskLevel;
use chrono::{DateTime, Utc};
use env_fusion::EnvironmentalReading;
use physio_fusion::SensorReading;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Used when the row has no usable SpO2 value.
pub const DEFAULT_SPO2: f64 = 95.0;
pub const DEFAULT_HEART_RATE: f64 = 75.0;
/// Normal resting rate for children aged 3 to 7. No breathing signal is
/// extracted from the accelerometer yet.
pub const DEFAULT_BREATHING_RATE: f64 = 20.0;

/// Label produced by the upstream audio classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioLabel {
    #[default]
    Normal,
    Wheeze,
    Cough,
}

impl AudioLabel {
    /// Case-insensitive and whitespace-tolerant: `"Cough "` is a cough.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "normal" => Some(AudioLabel::Normal),
            "wheeze" => Some(AudioLabel::Wheeze),
            "cough" => Some(AudioLabel::Cough),
            _ => None,
        }
    }

    pub fn risk_level(self) -> RiskLevel {
        match self {
            AudioLabel::Normal => RiskLevel::Safe,
            AudioLabel::Wheeze => RiskLevel::Medium,
            AudioLabel::Cough => RiskLevel::High,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            AudioLabel::Normal => "Normal",
            AudioLabel::Wheeze => "Wheeze",
            AudioLabel::Cough => "Cough",
        }
    }
}

/// Row identifiers arrive as integers or strings depending on the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Latest raw row from the sensor table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    pub id: RecordId,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub prediction_label: Option<String>,
    /// Either a 0–1 fraction or a percentage.
    #[serde(default)]
    pub spo2: Option<f64>,
    /// Either a value scaled down by 100 or beats per minute.
    #[serde(default)]
    pub heart_rate: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub pm25: Option<f64>,
}

impl SensorRecord {
    pub fn from_json(raw: &str) -> Result<Self, IntakeError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn audio_label(&self) -> AudioLabel {
        match self.prediction_label.as_deref() {
            None => AudioLabel::Normal,
            Some(raw) => AudioLabel::parse(raw).unwrap_or_else(|| {
                warn!(
                    record = %self.id,
                    label = raw,
                    "unknown prediction label, treating as normal"
                );
                AudioLabel::Normal
            }),
        }
    }

    pub fn spo2_percent(&self) -> f64 {
        match self.spo2 {
            Some(v) if v != 0.0 && v < 1.0 => v * 100.0,
            Some(v) if v != 0.0 => v,
            _ => DEFAULT_SPO2,
        }
    }

    pub fn heart_rate_bpm(&self) -> f64 {
        match self.heart_rate {
            Some(v) if v != 0.0 && v < 2.0 => v * 100.0,
            Some(v) if v != 0.0 => v,
            _ => DEFAULT_HEART_RATE,
        }
    }

    pub fn sensor_reading(&self) -> SensorReading {
        SensorReading {
            audio_risk: self.audio_label().risk_level(),
            spo2_percent: self.spo2_percent(),
            breathing_proxy: DEFAULT_BREATHING_RATE,
        }
    }

    pub fn has_environmental_data(&self) -> bool {
        self.temperature.is_some() || self.humidity.is_some() || self.pm25.is_some()
    }

    /// Fills each missing field from `EnvironmentalReading::default()`.
    pub fn environmental_reading(&self) -> Result<EnvironmentalReading, IntakeError> {
        if !self.has_environmental_data() {
            return Err(IntakeError::NoEnvironmentalData(self.id.to_string()));
        }
        let defaults = EnvironmentalReading::default();
        Ok(EnvironmentalReading {
            temperature_celsius: self.temperature.unwrap_or(defaults.temperature_celsius),
            humidity_percent: self.humidity.unwrap_or(defaults.humidity_percent),
            pm25: self.pm25.unwrap_or(defaults.pm25),
        })
    }
}
