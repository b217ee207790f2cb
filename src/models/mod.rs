mod artifact;
mod error;
mod forest;
mod linear;
pub(crate) mod regressor;
mod tree;

pub use artifact::{DEFAULT_MODEL_PATH, ModelArtifact, build_model, load_model, model_from_json};
pub use error::{BuildError, ModelError};
pub use forest::{ForestParameters, RandomForestRegressor};
pub use linear::{LinearParameters, LinearRegressor};
pub use regressor::{FeatureMatrix, RulModel};
pub use tree::{RegressionTree, TreeNode, TreeParameters};
