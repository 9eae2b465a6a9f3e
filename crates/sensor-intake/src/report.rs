use crate::record::{RecordId, SensorRecord};
use anyhow::Context;
use asthma_core::{RiskCategory, RiskLevel};
use chrono::{DateTime, Utc};
use env_fusion::{environmental_fusion, EnvironmentalAssessment, EnvironmentalReading};
use physio_fusion::{hybrid_fusion, PhysiologicalAssessment, SensorReading};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const ELEVATED_BREATHING_RATE: f64 = 40.0;
pub const ENVIRONMENTAL_DATA_UNAVAILABLE: &str = "Environmental data not available";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysiologicalSnapshot {
    pub spo2: f64,
    pub heart_rate: f64,
    pub breathing_rate: f64,
    pub audio_detection: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysiologicalSection {
    pub assessment: PhysiologicalAssessment,
    pub triggers: Vec<String>,
    pub sensor_data: PhysiologicalSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub pm25: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalSection {
    pub assessment: EnvironmentalAssessment,
    pub sensor_data: EnvironmentalSnapshot,
}

/// Environmental side of a report. A row with no temperature, humidity or
/// PM2.5 reports Safe with a single explanatory trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EnvironmentalOutcome {
    Assessed(EnvironmentalSection),
    Unavailable {
        category: RiskCategory,
        triggers: Vec<String>,
    },
}

impl EnvironmentalOutcome {
    pub fn unavailable() -> Self {
        EnvironmentalOutcome::Unavailable {
            category: RiskCategory::Safe,
            triggers: vec![ENVIRONMENTAL_DATA_UNAVAILABLE.to_string()],
        }
    }

    pub fn section(&self) -> Option<&EnvironmentalSection> {
        match self {
            EnvironmentalOutcome::Assessed(section) => Some(section),
            EnvironmentalOutcome::Unavailable { .. } => None,
        }
    }

    pub fn category(&self) -> RiskCategory {
        match self {
            EnvironmentalOutcome::Assessed(section) => section.assessment.risk.category,
            EnvironmentalOutcome::Unavailable { category, .. } => *category,
        }
    }

    pub fn triggers(&self) -> &[String] {
        match self {
            EnvironmentalOutcome::Assessed(section) => &section.assessment.triggers,
            EnvironmentalOutcome::Unavailable { triggers, .. } => triggers,
        }
    }
}

/// Both engines' results for one sensor row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub generated_at: DateTime<Utc>,
    pub record_id: RecordId,
    pub recorded_at: Option<DateTime<Utc>>,
    pub physiological: PhysiologicalSection,
    pub environmental: EnvironmentalOutcome,
}

/// Display triggers for the physiological side, which the engine itself
/// does not produce.
pub fn physiological_triggers(
    reading: &SensorReading,
    assessment: &PhysiologicalAssessment,
) -> Vec<String> {
    let mut triggers = Vec::new();
    if assessment.critical_override {
        triggers.push(format!(
            "Critical SpO2 level: {:.1}%",
            reading.spo2_percent
        ));
    }
    match reading.audio_risk {
        RiskLevel::High => triggers.push("Cough detected".to_string()),
        RiskLevel::Medium => triggers.push("Wheeze detected".to_string()),
        RiskLevel::Safe => {}
    }
    if reading.breathing_proxy > ELEVATED_BREATHING_RATE {
        triggers.push(format!(
            "Elevated breathing rate: {:.0} bpm",
            reading.breathing_proxy
        ));
    }
    triggers
}

pub fn assess_record(record: &SensorRecord) -> AssessmentReport {
    assess_record_at(record, Utc::now())
}

pub fn assess_record_at(record: &SensorRecord, generated_at: DateTime<Utc>) -> AssessmentReport {
    let reading = record.sensor_reading();
    let assessment = hybrid_fusion(&reading);
    let physiological = PhysiologicalSection {
        triggers: physiological_triggers(&reading, &assessment),
        sensor_data: PhysiologicalSnapshot {
            spo2: round1(reading.spo2_percent),
            heart_rate: round1(record.heart_rate_bpm()),
            breathing_rate: round1(reading.breathing_proxy),
            audio_detection: record.audio_label().display_name().to_string(),
        },
        assessment,
    };

    let environmental = match record.environmental_reading() {
        Ok(reading) => EnvironmentalOutcome::Assessed(environmental_section(&reading)),
        Err(err) => {
            warn!(error = %err, "skipping environmental fusion");
            EnvironmentalOutcome::unavailable()
        }
    };

    AssessmentReport {
        generated_at,
        record_id: record.id.clone(),
        recorded_at: record.created_at,
        physiological,
        environmental,
    }
}

fn environmental_section(reading: &EnvironmentalReading) -> EnvironmentalSection {
    EnvironmentalSection {
        assessment: environmental_fusion(reading),
        sensor_data: EnvironmentalSnapshot {
            temperature: reading.temperature_celsius,
            humidity: reading.humidity_percent,
            pm25: reading.pm25,
        },
    }
}

/// Decodes one JSON sensor row, fuses it and logs the outcome.
pub fn assess_json(raw: &str) -> anyhow::Result<AssessmentReport> {
    let record = SensorRecord::from_json(raw).context("decoding sensor record")?;
    let report = assess_record(&record);
    log_assessment(&report);
    Ok(report)
}

/// Fire-and-forget record of a report; never fails the caller.
pub fn log_assessment(report: &AssessmentReport) {
    let physio = &report.physiological.assessment;
    info!(
        record = %report.record_id,
        risk = %physio.risk.category,
        score = physio.risk.score,
        confidence = physio.risk.confidence,
        critical_override = physio.critical_override,
        reasoning = %physio.risk.reasoning,
        "physiological assessment"
    );
    let env = &report.environmental;
    info!(
        record = %report.record_id,
        risk = env.category().as_lowercase(),
        score = env.section().map(|s| s.assessment.risk.score),
        triggers = env.triggers().len(),
        "environmental assessment"
    );
}

/// One decimal, ties to even.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
