use asthma_core::RiskAssessment;
use env_fusion::EnvironmentalAssessment;
use physio_fusion::PhysiologicalAssessment;
use prometheus::{GaugeVec, IntCounter, IntCounterVec, Opts, Registry};

/// Which fusion engine produced an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Physiological,
    Environmental,
}

impl Engine {
    pub fn label(self) -> &'static str {
        match self {
            Engine::Physiological => "physiological",
            Engine::Environmental => "environmental",
        }
    }
}

pub struct AssessmentMetrics {
    pub risk_score: GaugeVec,
    pub risk_confidence: GaugeVec,
    pub assessments_total: IntCounterVec,
    pub critical_overrides_total: IntCounter,
}

impl AssessmentMetrics {
    pub fn register(registry: &Registry) -> prometheus::Result<Self> {
        let risk_score = GaugeVec::new(
            Opts::new("asthma_risk_score", "Latest weighted fusion score"),
            &["engine"],
        )?;
        let risk_confidence = GaugeVec::new(
            Opts::new("asthma_risk_confidence", "Latest agreement confidence"),
            &["engine"],
        )?;
        let assessments_total = IntCounterVec::new(
            Opts::new(
                "asthma_assessments_total",
                "Assessments produced per engine and category",
            ),
            &["engine", "category"],
        )?;
        let critical_overrides_total = IntCounter::new(
            "asthma_critical_overrides_total",
            "Physiological assessments forced HIGH by critical SpO2",
        )?;

        registry.register(Box::new(risk_score.clone()))?;
        registry.register(Box::new(risk_confidence.clone()))?;
        registry.register(Box::new(assessments_total.clone()))?;
        registry.register(Box::new(critical_overrides_total.clone()))?;

        Ok(Self {
            risk_score,
            risk_confidence,
            assessments_total,
            critical_overrides_total,
        })
    }

    pub fn observe(&self, engine: Engine, risk: &RiskAssessment) {
        let label = engine.label();
        self.risk_score.with_label_values(&[label]).set(risk.score);
        self.risk_confidence
            .with_label_values(&[label])
            .set(risk.confidence);
        self.assessments_total
            .with_label_values(&[label, risk.category.as_str()])
            .inc();
    }

    pub fn observe_physiological(&self, assessment: &PhysiologicalAssessment) {
        self.observe(Engine::Physiological, &assessment.risk);
        if assessment.critical_override {
            self.critical_overrides_total.inc();
        }
    }

    pub fn observe_environmental(&self, assessment: &EnvironmentalAssessment) {
        self.observe(Engine::Environmental, &assessment.risk);
    }
}
