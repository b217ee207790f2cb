use crate::core::SensorVector;
use chrono::{DateTime, Utc};
use strum_macros::{Display, EnumMessage};

/// Predictions strictly below this many cycles are flagged.
pub const LOW_RUL_THRESHOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumMessage)]
pub enum RulStatus {
    #[strum(to_string = "ok", message = "Engine has useful life left.")]
    Healthy,

    #[strum(
        to_string = "LOW",
        message = "Warning: the engine is close to the end of its useful life."
    )]
    LowRemainingLife,
}

impl RulStatus {
    pub fn classify(rul: f64) -> Self {
        if rul < LOW_RUL_THRESHOLD {
            RulStatus::LowRemainingLife
        } else {
            RulStatus::Healthy
        }
    }
}

/// Rounds half away from zero to two decimal places.
#[inline]
pub fn round_cycles(raw: f64) -> f64 {
    (raw * 100.0).round() / 100.0
}

/// Outcome of one successful prediction. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    rul: f64,
    status: RulStatus,
    readings: SensorVector,
    recorded_at: DateTime<Utc>,
}

impl PredictionRecord {
    pub fn new(raw_prediction: f64, readings: SensorVector) -> Self {
        Self {
            rul: round_cycles(raw_prediction),
            status: RulStatus::classify(raw_prediction),
            readings,
            recorded_at: Utc::now(),
        }
    }

    /// Predicted cycles, rounded to two decimals.
    pub fn rul(&self) -> f64 {
        self.rul
    }

    pub fn status(&self) -> RulStatus {
        self.status
    }

    pub fn is_low_life(&self) -> bool {
        self.status == RulStatus::LowRemainingLife
    }

    pub fn readings(&self) -> &SensorVector {
        &self.readings
    }

    pub fn sensor(&self, name: &str) -> Option<f64> {
        self.readings.get(name)
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_cycles(45.678), 45.68);
        assert_eq!(round_cycles(12.0), 12.0);
        assert_eq!(round_cycles(99.994), 99.99);
        assert_eq!(round_cycles(-1.236), -1.24);
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(RulStatus::classify(29.999), RulStatus::LowRemainingLife);
        assert_eq!(RulStatus::classify(30.0), RulStatus::Healthy);
        assert_eq!(RulStatus::classify(0.0), RulStatus::LowRemainingLife);
        assert_eq!(RulStatus::classify(250.0), RulStatus::Healthy);
    }

    #[test]
    fn record_from_examples() {
        let r = PredictionRecord::new(45.678, SensorVector::zeros());
        assert_eq!(r.rul(), 45.68);
        assert!(!r.is_low_life());

        let r = PredictionRecord::new(12.0, SensorVector::zeros());
        assert_eq!(r.rul(), 12.0);
        assert!(r.is_low_life());
        assert_eq!(r.sensor("sensor_9"), Some(0.0));
    }

    #[test]
    fn classification_uses_unrounded_value() {
        let r = PredictionRecord::new(29.996, SensorVector::zeros());
        assert_eq!(r.rul(), 30.0);
        assert_eq!(r.status(), RulStatus::LowRemainingLife);
    }

    #[test]
    fn status_labels() {
        assert_eq!(RulStatus::Healthy.to_string(), "ok");
        assert_eq!(RulStatus::LowRemainingLife.to_string(), "LOW");
    }
}
