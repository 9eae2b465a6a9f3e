use crate::error::FusionError;
use crate::level::{Factor, RiskCategory, RiskLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-factor ordinal levels, keyed in factor order.
pub type IndividualRisks = BTreeMap<Factor, RiskLevel>;

/// Fixed positive weights for the factors of one engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorWeights {
    weights: BTreeMap<Factor, f64>,
}

impl FactorWeights {
    pub fn new(weights: impl IntoIterator<Item = (Factor, f64)>) -> Self {
        Self {
            weights: weights.into_iter().collect(),
        }
    }

    /// Rejects a table whose keys are not exactly `expected`.
    pub fn ensure_factors(&self, expected: &[Factor]) -> Result<(), FusionError> {
        let matches = self.weights.len() == expected.len()
            && expected.iter().all(|f| self.weights.contains_key(f));
        if !matches {
            return Err(FusionError::WeightFactors {
                expected: factor_list(expected.iter().copied()),
                found: factor_list(self.weights.keys().copied()),
            });
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    pub fn validate(&self) -> Result<(), FusionError> {
        if self.weights.is_empty() {
            return Err(FusionError::EmptyWeights);
        }
        for (factor, &weight) in &self.weights {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(FusionError::InvalidWeight {
                    factor: factor.to_string(),
                    weight,
                });
            }
        }
        Ok(())
    }

    /// `Σ(wᵢ·oᵢ) / Σwᵢ`. Factors absent from `risks` count as Safe.
    pub fn weighted_score(&self, risks: &IndividualRisks) -> f64 {
        let weighted_sum: f64 = self
            .weights
            .iter()
            .map(|(factor, weight)| {
                let level = risks.get(factor).copied().unwrap_or_default();
                weight * level.as_f64()
            })
            .sum();
        weighted_sum / self.total()
    }
}

/// Score cutoffs that map a fusion score onto a category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryCutoffs {
    pub high_min: f64,
    pub medium_min: f64,
    /// Whether a score equal to `medium_min` is already Medium.
    pub medium_inclusive: bool,
}

impl CategoryCutoffs {
    pub fn categorize(&self, score: f64) -> RiskCategory {
        let medium = if self.medium_inclusive {
            score >= self.medium_min
        } else {
            score > self.medium_min
        };
        if score >= self.high_min {
            RiskCategory::High
        } else if medium {
            RiskCategory::Medium
        } else {
            RiskCategory::Safe
        }
    }

    pub fn validate(&self) -> Result<(), FusionError> {
        if self.medium_min.is_nan() || self.high_min.is_nan() || self.medium_min > self.high_min {
            return Err(FusionError::ThresholdOrder(format!(
                "category medium_min {} exceeds high_min {}",
                self.medium_min, self.high_min
            )));
        }
        Ok(())
    }
}

/// Checks that named bounds are non-decreasing in the order given.
pub fn ensure_ascending(context: &str, bounds: &[(&str, f64)]) -> Result<(), FusionError> {
    if let Some((name, value)) = bounds.iter().find(|(_, v)| !v.is_finite()) {
        return Err(FusionError::ThresholdOrder(format!(
            "{context}: {name} is not finite ({value})"
        )));
    }
    for pair in bounds.windows(2) {
        let (lo_name, lo) = pair[0];
        let (hi_name, hi) = pair[1];
        if lo > hi {
            return Err(FusionError::ThresholdOrder(format!(
                "{context}: {lo_name} ({lo}) is above {hi_name} ({hi})"
            )));
        }
    }
    Ok(())
}

fn factor_list(factors: impl Iterator<Item = Factor>) -> String {
    factors.map(Factor::name).collect::<Vec<_>>().join(", ")
}
