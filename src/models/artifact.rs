use crate::core::SENSOR_COUNT;
use crate::models::{
    BuildError, ForestParameters, LinearParameters, LinearRegressor, ModelError,
    RandomForestRegressor, RegressionTree, RulModel, TreeParameters,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Where the binary looks for its model at start.
pub const DEFAULT_MODEL_PATH: &str = "models/rul_model.json";

/// Serialized form of a trained model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
pub enum ModelArtifact {
    Linear(LinearParameters),
    DecisionTree(TreeParameters),
    RandomForest(ForestParameters),
}

pub fn build_model(artifact: ModelArtifact) -> Result<Arc<dyn RulModel>, BuildError> {
    match artifact {
        ModelArtifact::Linear(p) => Ok(Arc::new(LinearRegressor::try_from(p)?)),
        ModelArtifact::DecisionTree(p) => Ok(Arc::new(RegressionTree::try_from(p)?)),
        ModelArtifact::RandomForest(p) => Ok(Arc::new(RandomForestRegressor::try_from(p)?)),
    }
}

/// Parses an artifact and checks it accepts one column per sensor.
pub fn model_from_json(json: &str) -> Result<Arc<dyn RulModel>, ModelError> {
    let artifact: ModelArtifact = serde_json::from_str(json)?;
    let model = build_model(artifact)?;
    if model.n_features() != SENSOR_COUNT {
        return Err(ModelError::FeatureCount {
            expected: SENSOR_COUNT,
            got: model.n_features(),
        });
    }
    Ok(model)
}

pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Arc<dyn RulModel>, ModelError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let model = model_from_json(&json)?;
    log::info!(
        "loaded model from {} ({} features, importances {})",
        path.display(),
        model.n_features(),
        if model.feature_importances().is_some() {
            "available"
        } else {
            "unavailable"
        }
    );
    Ok(model)
}
