use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("model has no {0}")]
    Empty(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot read model artifact {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("model expects {expected} features, got {got}")]
    FeatureCount { expected: usize, got: usize },

    #[error("model produced no prediction")]
    EmptyOutput,

    #[error("model produced a non-finite prediction ({0})")]
    NonFinite(f64),

    #[error("prediction failed: {0}")]
    Failed(String),
}
