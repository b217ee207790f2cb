use crate::core::sensors::{SENSOR_COUNT, SENSOR_NAMES};
use crate::core::SensorError;

/// Model weights per sensor, ordered from least to most important.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImportance {
    entries: Vec<(&'static str, f64)>,
}

impl FeatureImportance {
    /// Pairs `weights` positionally with [`SENSOR_NAMES`] and sorts ascending.
    pub fn from_weights(weights: &[f64]) -> Result<Self, SensorError> {
        if weights.len() != SENSOR_COUNT {
            return Err(SensorError::Length {
                expected: SENSOR_COUNT,
                got: weights.len(),
            });
        }

        let mut entries: Vec<(&'static str, f64)> = SENSOR_NAMES
            .iter()
            .copied()
            .zip(weights.iter().copied())
            .collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn weight(&self, sensor: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == sensor)
            .map(|(_, w)| *w)
    }

    pub fn max_weight(&self) -> Option<f64> {
        self.entries.last().map(|(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sorted_ascending_and_complete() {
        let weights: Vec<f64> = (0..SENSOR_COUNT)
            .map(|i| ((i * 7) % SENSOR_COUNT) as f64 / 100.0)
            .collect();
        let fi = FeatureImportance::from_weights(&weights).unwrap();

        assert_eq!(fi.len(), SENSOR_COUNT);
        let ws: Vec<f64> = fi.iter().map(|(_, w)| w).collect();
        assert!(ws.windows(2).all(|p| p[0] <= p[1]));

        let names: HashSet<&str> = fi.iter().map(|(n, _)| n).collect();
        assert_eq!(names.len(), SENSOR_COUNT);
        for n in SENSOR_NAMES {
            assert!(names.contains(n), "missing {n}");
        }
    }

    #[test]
    fn weights_stay_attached_to_their_sensor() {
        let mut weights = vec![0.0; SENSOR_COUNT];
        weights[6] = 0.7;
        weights[2] = 0.2;
        let fi = FeatureImportance::from_weights(&weights).unwrap();

        assert_eq!(fi.weight("sensor_11"), Some(0.7));
        assert_eq!(fi.weight("sensor_4"), Some(0.2));
        assert_eq!(fi.iter().last(), Some(("sensor_11", 0.7)));
        assert_eq!(fi.max_weight(), Some(0.7));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = FeatureImportance::from_weights(&[0.5; 4]).unwrap_err();
        assert_eq!(
            err,
            SensorError::Length {
                expected: 13,
                got: 4
            }
        );
    }
}
