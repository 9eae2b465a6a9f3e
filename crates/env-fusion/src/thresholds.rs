use asthma_core::RiskLevel;
use serde::{Deserialize, Serialize};

/// Which side of a comfort band a reading fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandSide {
    Below,
    Within,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureThresholds {
    pub cold_max: f64,
    pub safe_min: f64,
    pub safe_max: f64,
    pub hot_min: f64,
}

impl Default for TemperatureThresholds {
    fn default() -> Self {
        Self {
            cold_max: 15.0,
            safe_min: 18.0,
            safe_max: 24.0,
            hot_min: 28.0,
        }
    }
}

impl TemperatureThresholds {
    pub fn classify(&self, celsius: f64) -> RiskLevel {
        if celsius < self.cold_max || celsius > self.hot_min {
            RiskLevel::High
        } else if celsius < self.safe_min || celsius > self.safe_max {
            RiskLevel::Medium
        } else {
            RiskLevel::Safe
        }
    }

    pub fn side(&self, celsius: f64) -> BandSide {
        band_side(celsius, self.safe_min, self.safe_max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumidityThresholds {
    pub dry_max: f64,
    pub safe_min: f64,
    pub safe_max: f64,
    pub humid_min: f64,
}

impl Default for HumidityThresholds {
    fn default() -> Self {
        Self {
            dry_max: 30.0,
            safe_min: 40.0,
            safe_max: 60.0,
            humid_min: 70.0,
        }
    }
}

impl HumidityThresholds {
    pub fn classify(&self, percent: f64) -> RiskLevel {
        if percent < self.dry_max || percent > self.humid_min {
            RiskLevel::High
        } else if percent < self.safe_min || percent > self.safe_max {
            RiskLevel::Medium
        } else {
            RiskLevel::Safe
        }
    }

    pub fn side(&self, percent: f64) -> BandSide {
        band_side(percent, self.safe_min, self.safe_max)
    }
}

/// PM2.5 bands in µg/m³.
///
/// `moderate_max` and `unhealthy_min` are compared separately, so readings
/// between them are Medium and exactly `unhealthy_min` is not yet High.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pm25Thresholds {
    /// Upper bound of "good" air. Informational only.
    pub good_max: f64,
    pub moderate_max: f64,
    pub unhealthy_min: f64,
}

impl Default for Pm25Thresholds {
    fn default() -> Self {
        Self {
            good_max: 12.0,
            moderate_max: 35.4,
            unhealthy_min: 35.5,
        }
    }
}

impl Pm25Thresholds {
    pub fn classify(&self, micrograms: f64) -> RiskLevel {
        if micrograms > self.unhealthy_min {
            RiskLevel::High
        } else if micrograms > self.moderate_max {
            RiskLevel::Medium
        } else {
            RiskLevel::Safe
        }
    }
}

fn band_side(value: f64, safe_min: f64, safe_max: f64) -> BandSide {
    if value < safe_min {
        BandSide::Below
    } else if value > safe_max {
        BandSide::Above
    } else {
        BandSide::Within
    }
}
