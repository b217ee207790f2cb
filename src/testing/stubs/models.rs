use crate::core::SENSOR_COUNT;
use crate::models::regressor::check_finite;
use crate::models::{FeatureMatrix, ModelError, RulModel};
use std::sync::Mutex;

/// Returns the same prediction for every row.
pub struct FixedModel {
    value: f64,
    importances: Option<Vec<f64>>,
}

impl FixedModel {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            importances: None,
        }
    }

    pub fn with_importances(mut self, weights: Vec<f64>) -> Self {
        self.importances = Some(weights);
        self
    }
}

impl RulModel for FixedModel {
    fn n_features(&self) -> usize {
        SENSOR_COUNT
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, ModelError> {
        check_finite(vec![self.value; x.rows()])
    }

    fn feature_importances(&self) -> Option<Vec<f64>> {
        self.importances.clone()
    }
}

/// Fails every prediction.
pub struct FailingModel;

impl RulModel for FailingModel {
    fn n_features(&self) -> usize {
        SENSOR_COUNT
    }

    fn predict(&self, _x: &FeatureMatrix) -> Result<Vec<f64>, ModelError> {
        Err(ModelError::Failed("stub model always fails".into()))
    }
}

/// Succeeds without producing any output row.
pub struct EmptyOutputModel;

impl RulModel for EmptyOutputModel {
    fn n_features(&self) -> usize {
        SENSOR_COUNT
    }

    fn predict(&self, _x: &FeatureMatrix) -> Result<Vec<f64>, ModelError> {
        Ok(Vec::new())
    }
}

/// Fixed prediction that remembers every matrix it was given, row by row.
pub struct RecordingModel {
    value: f64,
    calls: Mutex<Vec<Vec<Vec<f64>>>>,
}

impl RecordingModel {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<Vec<f64>>> {
        self.calls.lock().unwrap().clone()
    }
}

impl RulModel for RecordingModel {
    fn n_features(&self) -> usize {
        SENSOR_COUNT
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, ModelError> {
        let rows = x.iter_rows().map(<[f64]>::to_vec).collect();
        self.calls.lock().unwrap().push(rows);
        Ok(vec![self.value; x.rows()])
    }
}
