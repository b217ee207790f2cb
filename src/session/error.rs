use crate::core::SensorError;
use crate::models::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidInput(#[from] SensorError),

    #[error(transparent)]
    Prediction(#[from] ModelError),

    #[error("model reported {got} importance weights for {expected} sensors")]
    ImportanceShape { expected: usize, got: usize },
}
