use crate::models::regressor::{check_finite, check_width};
use crate::models::tree::{RegressionTree, TreeNode, normalize};
use crate::models::{BuildError, FeatureMatrix, ModelError, RulModel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForestParameters {
    pub n_features: usize,
    pub trees: Vec<Vec<TreeNode>>,
}

/// Bagged ensemble of regression trees; predicts the mean of its members.
#[derive(Debug, Clone)]
pub struct RandomForestRegressor {
    n_features: usize,
    trees: Vec<RegressionTree>,
}

impl TryFrom<ForestParameters> for RandomForestRegressor {
    type Error = BuildError;

    fn try_from(p: ForestParameters) -> Result<Self, Self::Error> {
        if p.trees.is_empty() {
            return Err(BuildError::Empty("trees"));
        }
        let trees = p
            .trees
            .into_iter()
            .map(|nodes| RegressionTree::build(p.n_features, nodes))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            n_features: p.n_features,
            trees,
        })
    }
}

impl RulModel for RandomForestRegressor {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, ModelError> {
        check_width(self, x)?;
        let n = self.trees.len() as f64;
        let out = x
            .iter_rows()
            .map(|row| self.trees.iter().map(|t| t.predict_row(row)).sum::<f64>() / n)
            .collect();
        check_finite(out)
    }

    fn feature_importances(&self) -> Option<Vec<f64>> {
        let mut imp = vec![0.0; self.n_features];
        for tree in &self.trees {
            for (acc, w) in imp.iter_mut().zip(tree.normalized_importances()) {
                *acc += w;
            }
        }
        let n = self.trees.len() as f64;
        imp.iter_mut().for_each(|w| *w /= n);
        normalize(&mut imp);
        Some(imp)
    }
}
