use crate::{
    hybrid_fusion, BreathingThresholds, PhysiologicalConfig, PhysiologicalFusion, SensorReading,
    Spo2Thresholds,
};
use asthma_core::{Factor, FusionError, RiskCategory, RiskLevel};
use rand::Rng;

fn reading(audio_risk: RiskLevel, spo2_percent: f64, breathing_proxy: f64) -> SensorReading {
    SensorReading {
        audio_risk,
        spo2_percent,
        breathing_proxy,
    }
}

#[test]
fn spo2_boundaries() {
    let t = Spo2Thresholds::default();
    assert_eq!(t.classify(92.0), RiskLevel::High);
    assert_eq!(t.classify(88.0), RiskLevel::High);
    assert_eq!(t.classify(93.0), RiskLevel::Medium);
    assert_eq!(t.classify(94.9), RiskLevel::Medium);
    assert_eq!(t.classify(95.0), RiskLevel::Safe);
    assert_eq!(t.classify(96.0), RiskLevel::Safe);
}

#[test]
fn breathing_boundaries() {
    let t = BreathingThresholds::default();
    assert_eq!(t.classify(20.0), RiskLevel::Safe);
    assert_eq!(t.classify(34.0), RiskLevel::Safe);
    assert_eq!(t.classify(34.5), RiskLevel::Medium);
    assert_eq!(t.classify(40.0), RiskLevel::Medium);
    assert_eq!(t.classify(40.1), RiskLevel::High);
}

#[test]
fn all_safe_inputs_give_full_confidence() {
    let out = hybrid_fusion(&reading(RiskLevel::Safe, 96.0, 20.0));
    assert!(!out.critical_override);
    assert_eq!(out.risk.score, 0.0);
    assert_eq!(out.risk.category, RiskCategory::Safe);
    assert_eq!(out.risk.confidence, 1.0);
    assert_eq!(
        out.risk.reasoning,
        "Weighted fusion score of 0.00 resulted in a SAFE risk assessment."
    );
}

#[test]
fn critical_spo2_overrides_everything() {
    for audio in [RiskLevel::Safe, RiskLevel::Medium, RiskLevel::High] {
        for breathing in [10.0, 20.0, 36.0, 55.0] {
            let out = hybrid_fusion(&reading(audio, 90.0, breathing));
            assert!(out.critical_override);
            assert_eq!(out.risk.category, RiskCategory::High);
            assert_eq!(out.risk.score, 2.0);
            assert_eq!(out.risk.confidence, 0.95);
            assert_eq!(
                out.risk.reasoning,
                "CRITICAL OVERRIDE: SpO2 at or below 92% triggered the safety guardrail."
            );
        }
    }
}

#[test]
fn override_still_reports_every_factor() {
    let out = hybrid_fusion(&reading(RiskLevel::Medium, 92.0, 36.0));
    assert!(out.critical_override);
    assert_eq!(out.risk.level(Factor::Audio), Some(RiskLevel::Medium));
    assert_eq!(out.risk.level(Factor::Spo2), Some(RiskLevel::High));
    assert_eq!(out.risk.level(Factor::Breathing), Some(RiskLevel::Medium));
}

#[test]
fn weighted_fusion_categories() {
    // (2·1 + 2.5·1 + 1.5·1) / 5 = 1.2
    let medium = hybrid_fusion(&reading(RiskLevel::High, 93.0, 38.0));
    assert!((medium.risk.score - 1.2).abs() < 1e-12);
    assert_eq!(medium.risk.category, RiskCategory::Medium);
    let expected = 1.0 - (2.0f64 / 9.0).sqrt() * 0.5;
    assert!((medium.risk.confidence - expected).abs() < 1e-12);

    // (2 + 2.5 + 3) / 5 = 1.5
    let high = hybrid_fusion(&reading(RiskLevel::High, 93.0, 45.0));
    assert!((high.risk.score - 1.5).abs() < 1e-12);
    assert_eq!(high.risk.category, RiskCategory::High);
    assert!(!high.critical_override);

    // (2 + 1.5) / 5 = 0.7, just above the exclusive medium cutoff
    let edge = hybrid_fusion(&reading(RiskLevel::High, 97.0, 38.0));
    assert!((edge.risk.score - 0.7).abs() < 1e-12);
    assert_eq!(edge.risk.category, RiskCategory::Medium);

    // (1 + 1.5) / 5 = 0.5
    let low = hybrid_fusion(&reading(RiskLevel::Medium, 97.0, 38.0));
    assert_eq!(low.risk.category, RiskCategory::Safe);
    assert_eq!(
        low.risk.reasoning,
        "Weighted fusion score of 0.50 resulted in a SAFE risk assessment."
    );
}

#[test]
fn repeated_calls_are_identical() {
    let input = reading(RiskLevel::Medium, 94.0, 37.5);
    let first = serde_json::to_string(&hybrid_fusion(&input)).unwrap();
    let second = serde_json::to_string(&hybrid_fusion(&input)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn assessment_serializes_flat() {
    let out = hybrid_fusion(&reading(RiskLevel::Safe, 96.0, 20.0));
    let value = serde_json::to_value(&out).unwrap();
    assert_eq!(value["category"], "SAFE");
    assert_eq!(value["critical_override"], false);
    assert_eq!(value["individual_risks"]["spo2"], 0);
}

#[test]
fn random_readings_stay_in_bounds() {
    let mut rng = rand::thread_rng();
    let fusion = PhysiologicalFusion::default();
    for _ in 0..500 {
        let audio = RiskLevel::try_from(rng.gen_range(0u8..=2)).unwrap();
        let spo2 = rng.gen_range(80.0..100.0);
        let breathing = rng.gen_range(5.0..60.0);
        let out = fusion.assess(&reading(audio, spo2, breathing));
        assert!((0.0..=2.0).contains(&out.risk.score));
        assert!((0.5..=1.0).contains(&out.risk.confidence));
        assert_eq!(out.critical_override, spo2 <= 92.0);
        if out.critical_override {
            assert_eq!(out.risk.category, RiskCategory::High);
        }
    }
}

#[test]
fn config_loads_from_toml() {
    let config = PhysiologicalConfig::from_toml_str(
        r#"
        confidence_k = 0.25

        [spo2]
        high_max = 90.0
        safe_min = 94.0
        "#,
    )
    .unwrap();
    assert_eq!(config.confidence_k, 0.25);
    assert_eq!(config.breathing, BreathingThresholds::default());

    let fusion = PhysiologicalFusion::new(config).unwrap();
    let out = fusion.assess(&reading(RiskLevel::Safe, 91.0, 20.0));
    assert!(!out.critical_override);
    assert_eq!(out.risk.level(Factor::Spo2), Some(RiskLevel::Medium));
}

#[test]
fn config_rejects_bad_values() {
    let inverted = PhysiologicalConfig::from_toml_str(
        r#"
        [spo2]
        high_max = 96.0
        safe_min = 95.0
        "#,
    );
    assert!(matches!(inverted, Err(FusionError::ThresholdOrder(_))));

    let malformed = PhysiologicalConfig::from_toml_str(r#"confidence_k = "high""#);
    assert!(matches!(malformed, Err(FusionError::ConfigParse(_))));

    let negative_k = PhysiologicalConfig {
        confidence_k: -1.0,
        ..PhysiologicalConfig::default()
    };
    assert!(matches!(
        PhysiologicalFusion::new(negative_k),
        Err(FusionError::InvalidConfidenceFactor(_))
    ));
}

#[test]
fn weight_table_loads_from_toml() {
    let config = PhysiologicalConfig::from_toml_str(
        r#"
        [weights]
        audio = 2.0
        spo2 = 2.0
        breathing = 1.0
        "#,
    )
    .unwrap();
    let fusion = PhysiologicalFusion::new(config).unwrap();
    // (2·0 + 2·1 + 1·2) / 5
    let out = fusion.assess(&reading(RiskLevel::Safe, 93.0, 45.0));
    assert!((out.risk.score - 0.8).abs() < 1e-12);
    assert_eq!(out.risk.category, RiskCategory::Medium);
}

#[test]
fn weight_table_must_cover_every_factor() {
    let partial = PhysiologicalConfig::from_toml_str("[weights]\naudio = 2.0\n");
    assert!(matches!(partial, Err(FusionError::WeightFactors { .. })));

    let foreign = PhysiologicalConfig::from_toml_str(
        "[weights]\naudio = 1.0\nspo2 = 2.5\ntemperature = 1.5\n",
    );
    assert!(matches!(foreign, Err(FusionError::WeightFactors { .. })));

    let extra = PhysiologicalConfig::from_toml_str(
        "[weights]\naudio = 1.0\nspo2 = 2.5\nbreathing = 1.5\npm25 = 2.0\n",
    );
    assert!(matches!(extra, Err(FusionError::WeightFactors { .. })));
}

#[test]
fn partial_threshold_table_keeps_other_defaults() {
    let config = PhysiologicalConfig::from_toml_str("[spo2]\nhigh_max = 90.0\n").unwrap();
    assert_eq!(config.spo2.high_max, 90.0);
    assert_eq!(config.spo2.safe_min, 95.0);

    let config = PhysiologicalConfig::from_toml_str("[breathing]\nmedium_max = 45.0\n").unwrap();
    assert_eq!(config.breathing.safe_max, 34.0);
    assert_eq!(config.breathing.classify(42.0), RiskLevel::Medium);
}
