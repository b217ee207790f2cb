use crate::core::{
    FeatureImportance, History, PredictionRecord, SENSOR_COUNT, SensorError, SensorVector,
};
use crate::models::{FeatureMatrix, ModelError, RulModel};
use crate::session::SessionError;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Evaluating,
}

/// One user's interaction with a shared model.
///
/// The model is read-only and may back any number of sessions; each session
/// keeps its own [`History`], dropped together with the session.
pub struct PredictionSession {
    model: Arc<dyn RulModel>,
    history: History,
    state: SessionState,
}

impl PredictionSession {
    pub fn new(model: Arc<dyn RulModel>) -> Self {
        Self {
            model,
            history: History::default(),
            state: SessionState::Idle,
        }
    }

    /// Predicts RUL for `values` and appends the result to the history.
    ///
    /// A failed prediction leaves the history untouched.
    pub fn evaluate(&mut self, values: SensorVector) -> Result<PredictionRecord, SessionError> {
        self.state = SessionState::Evaluating;
        let outcome = self.predict_one(&values);
        self.state = SessionState::Idle;

        let raw = match outcome {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("prediction failed: {e}");
                return Err(e.into());
            }
        };

        let record = PredictionRecord::new(raw, values);
        log::debug!(
            "predicted rul={} (raw={raw}) status={} for [{values}]",
            record.rul(),
            record.status()
        );
        self.history.push(record.clone());
        Ok(record)
    }

    /// Validates `values` before evaluating them.
    pub fn evaluate_slice(&mut self, values: &[f64]) -> Result<PredictionRecord, SessionError> {
        let values = SensorVector::from_slice(values)?;
        self.evaluate(values)
    }

    fn predict_one(&self, values: &SensorVector) -> Result<f64, ModelError> {
        let x = FeatureMatrix::from_row(values.as_slice());
        let out = self.model.predict(&x)?;
        let raw = out.first().copied().ok_or(ModelError::EmptyOutput)?;
        if !raw.is_finite() {
            return Err(ModelError::NonFinite(raw));
        }
        Ok(raw)
    }

    /// Sensor weights sorted ascending, or `None` for models that cannot
    /// explain their predictions.
    pub fn feature_importance(&self) -> Result<Option<FeatureImportance>, SessionError> {
        let Some(weights) = self.model.feature_importances() else {
            log::debug!("model exposes no feature importances");
            return Ok(None);
        };
        match FeatureImportance::from_weights(&weights) {
            Ok(fi) => Ok(Some(fi)),
            Err(SensorError::Length { got, .. }) => Err(SessionError::ImportanceShape {
                expected: SENSOR_COUNT,
                got,
            }),
            Err(e) => Err(e.into()),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn latest(&self) -> Option<&PredictionRecord> {
        self.history.latest()
    }

    /// `Evaluating` only while `evaluate` holds `&mut self`, so any caller
    /// able to borrow the session sees `Idle`.
    pub fn state(&self) -> SessionState {
        self.state
    }
}
