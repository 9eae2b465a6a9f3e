use crate::{AssessmentMetrics, Engine};
use asthma_core::RiskAssessment;
use tracing::warn;

/// Records `after` and reports whether its category rose above `before`.
pub fn escalated(
    metrics: &AssessmentMetrics,
    engine: Engine,
    before: &RiskAssessment,
    after: &RiskAssessment,
) -> bool {
    metrics.observe(engine, after);
    let rose = after.is_escalation_from(before);
    if rose {
        warn!(
            engine = engine.label(),
            from = %before.category,
            to = %after.category,
            "asthma risk escalated"
        );
    }
    rose
}
