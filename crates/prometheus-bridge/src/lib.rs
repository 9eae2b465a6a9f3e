mod escalation;
mod metrics;


pub use escalation::escalated;
pub use metrics::{AssessmentMetrics, Engine};
