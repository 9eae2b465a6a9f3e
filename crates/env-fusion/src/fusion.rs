use crate::thresholds::BandSide;
use crate::EnvironmentalConfig;
use asthma_core::{agreement_confidence, Factor, FusionError, IndividualRisks, RiskAssessment};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    /// µg/m³
    pub pm25: f64,
}

impl Default for EnvironmentalReading {
    /// Comfortable indoor conditions, used when a sensor reports nothing.
    fn default() -> Self {
        Self {
            temperature_celsius: 22.0,
            humidity_percent: 50.0,
            pm25: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalAssessment {
    #[serde(flatten)]
    pub risk: RiskAssessment,
    /// Temperature, then humidity, then PM2.5; Safe factors omitted.
    pub triggers: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EnvironmentalFusion {
    config: EnvironmentalConfig,
}

impl EnvironmentalFusion {
    pub fn new(config: EnvironmentalConfig) -> Result<Self, FusionError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn assess(&self, reading: &EnvironmentalReading) -> EnvironmentalAssessment {
        let cfg = &self.config;
        let temperature = reading.temperature_celsius;
        let humidity = reading.humidity_percent;
        let pm25 = reading.pm25;

        let temp_risk = cfg.temperature.classify(temperature);
        let humidity_risk = cfg.humidity.classify(humidity);
        let pm25_risk = cfg.pm25.classify(pm25);

        let mut triggers = Vec::new();
        if temp_risk.is_elevated() {
            if cfg.temperature.side(temperature) == BandSide::Below {
                triggers.push(format!("Cold temperature ({temperature:.1}°C)"));
            } else {
                triggers.push(format!("High temperature ({temperature:.1}°C)"));
            }
        }
        if humidity_risk.is_elevated() {
            if cfg.humidity.side(humidity) == BandSide::Below {
                triggers.push(format!("Low humidity ({humidity:.1}%)"));
            } else {
                triggers.push(format!("High humidity ({humidity:.1}%)"));
            }
        }
        if pm25_risk.is_elevated() {
            triggers.push(format!("Poor air quality (PM2.5: {pm25:.1} µg/m³)"));
        }

        let individual_risks: IndividualRisks = [
            (Factor::Temperature, temp_risk),
            (Factor::Humidity, humidity_risk),
            (Factor::Pm25, pm25_risk),
        ]
        .into_iter()
        .collect();

        let score = cfg.weights.weighted_score(&individual_risks);
        let category = cfg.cutoffs.categorize(score);
        let confidence =
            agreement_confidence(&[temp_risk, humidity_risk, pm25_risk], cfg.confidence_k);

        let reasoning = if triggers.is_empty() {
            format!("Environmental conditions are favorable. Risk score: {score:.2}")
        } else {
            format!(
                "Environmental triggers detected: {}. Risk score: {score:.2}",
                triggers.join(", ")
            )
        };

        debug!(
            temperature = temp_risk.ordinal(),
            humidity = humidity_risk.ordinal(),
            pm25 = pm25_risk.ordinal(),
            score,
            confidence,
            %category,
            triggers = triggers.len(),
            "environmental fusion"
        );

        EnvironmentalAssessment {
            risk: RiskAssessment {
                category,
                score,
                confidence,
                reasoning,
                individual_risks,
            },
            triggers,
        }
    }
}

/// Fuses a reading with the default environmental constants.
pub fn environmental_fusion(reading: &EnvironmentalReading) -> EnvironmentalAssessment {
    EnvironmentalFusion::default().assess(reading)
}
