//! Caller-side glue around the two fusion engines: normalizes a raw sensor
//! row into engine inputs and assembles the combined report.

mod error;
mod record;
mod report;


pub use error::IntakeError;
pub use record::{
    AudioLabel, RecordId, SensorRecord, DEFAULT_BREATHING_RATE, DEFAULT_HEART_RATE, DEFAULT_SPO2,
};
pub use report::{
    assess_json, assess_record, assess_record_at, log_assessment, physiological_triggers,
    AssessmentReport, EnvironmentalOutcome, EnvironmentalSection, EnvironmentalSnapshot, PhysiologicalSection,
    PhysiologicalSnapshot, ENVIRONMENTAL_DATA_UNAVAILABLE,
};
