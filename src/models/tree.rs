use crate::models::regressor::{check_finite, check_width};
use crate::models::{BuildError, FeatureMatrix, ModelError, RulModel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        #[serde(default)]
        impurity: f64,
        #[serde(default)]
        samples: u64,
    },
    Leaf {
        value: f64,
        #[serde(default)]
        impurity: f64,
        #[serde(default)]
        samples: u64,
    },
}

impl TreeNode {
    fn weighted_impurity(&self) -> f64 {
        match *self {
            TreeNode::Split {
                impurity, samples, ..
            }
            | TreeNode::Leaf {
                impurity, samples, ..
            } => impurity * samples as f64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreeParameters {
    pub n_features: usize,
    pub nodes: Vec<TreeNode>,
}

/// Binary regression tree stored as a flat node array, root at index 0.
///
/// Samples go left when `x[feature] <= threshold`.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    n_features: usize,
    nodes: Vec<TreeNode>,
}

impl RegressionTree {
    pub(crate) fn build(n_features: usize, nodes: Vec<TreeNode>) -> Result<Self, BuildError> {
        if n_features == 0 {
            return Err(BuildError::InvalidParameter(
                "n_features must be > 0".into(),
            ));
        }
        if nodes.is_empty() {
            return Err(BuildError::Empty("tree nodes"));
        }

        let n = nodes.len();
        for (i, node) in nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    if feature >= n_features {
                        return Err(BuildError::InvalidParameter(format!(
                            "node {i} splits on feature {feature}, model has {n_features}"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(BuildError::InvalidParameter(format!(
                            "node {i} has a non-finite threshold"
                        )));
                    }
                    // Children after their parent keeps traversal acyclic.
                    for child in [left, right] {
                        if child <= i || child >= n {
                            return Err(BuildError::InvalidParameter(format!(
                                "node {i} has invalid child index {child}"
                            )));
                        }
                    }
                }
                TreeNode::Leaf { value, .. } => {
                    if !value.is_finite() {
                        return Err(BuildError::InvalidParameter(format!(
                            "leaf {i} has a non-finite value"
                        )));
                    }
                }
            }
        }

        Ok(Self { n_features, nodes })
    }

    pub(crate) fn predict_row(&self, row: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                TreeNode::Leaf { value, .. } => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    idx = if row[feature] <= threshold { left } else { right };
                }
            }
        }
    }

    /// Mean decrease in impurity per feature, normalized to sum to one.
    pub(crate) fn normalized_importances(&self) -> Vec<f64> {
        let mut imp = vec![0.0; self.n_features];
        for node in &self.nodes {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = *node
            {
                imp[feature] += node.weighted_impurity()
                    - self.nodes[left].weighted_impurity()
                    - self.nodes[right].weighted_impurity();
            }
        }
        normalize(&mut imp);
        imp
    }
}

pub(crate) fn normalize(weights: &mut [f64]) {
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        weights.iter_mut().for_each(|w| *w /= total);
    }
}

impl TryFrom<TreeParameters> for RegressionTree {
    type Error = BuildError;

    fn try_from(p: TreeParameters) -> Result<Self, Self::Error> {
        Self::build(p.n_features, p.nodes)
    }
}

impl RulModel for RegressionTree {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, ModelError> {
        check_width(self, x)?;
        check_finite(x.iter_rows().map(|r| self.predict_row(r)).collect())
    }

    fn feature_importances(&self) -> Option<Vec<f64>> {
        Some(self.normalized_importances())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Depth-2 tree over 3 features: root on f0, right child on f2.
    pub(crate) fn small_tree_nodes() -> Vec<TreeNode> {
        vec![
            TreeNode::Split {
                feature: 0,
                threshold: 5.0,
                left: 1,
                right: 2,
                impurity: 10.0,
                samples: 100,
            },
            TreeNode::Leaf {
                value: 150.0,
                impurity: 2.0,
                samples: 60,
            },
            TreeNode::Split {
                feature: 2,
                threshold: 0.5,
                left: 3,
                right: 4,
                impurity: 5.0,
                samples: 40,
            },
            TreeNode::Leaf {
                value: 40.0,
                impurity: 1.0,
                samples: 25,
            },
            TreeNode::Leaf {
                value: 10.0,
                impurity: 1.0,
                samples: 15,
            },
        ]
    }

    fn small_tree() -> RegressionTree {
        RegressionTree::build(3, small_tree_nodes()).unwrap()
    }

    #[test]
    fn routes_rows_to_leaves() {
        let t = small_tree();
        let x = FeatureMatrix::from_rows(&[
            vec![1.0, 0.0, 0.0],
            vec![5.0, 99.0, 9.0],
            vec![6.0, 0.0, 0.5],
            vec![6.0, 0.0, 0.6],
        ])
        .unwrap();
        assert_eq!(t.predict(&x).unwrap(), vec![150.0, 150.0, 40.0, 10.0]);
    }

    #[test]
    fn impurity_importances() {
        // root: 1000 - 120 - 200 = 680 ; node 2: 200 - 25 - 15 = 160
        let imp = small_tree().feature_importances().unwrap();
        assert_eq!(imp.len(), 3);
        assert!((imp[0] - 680.0 / 840.0).abs() < 1e-12);
        assert_eq!(imp[1], 0.0);
        assert!((imp[2] - 160.0 / 840.0).abs() < 1e-12);
        assert!((imp.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_leaf_tree_has_zero_importances() {
        let t = RegressionTree::build(
            2,
            vec![TreeNode::Leaf {
                value: 7.0,
                impurity: 0.0,
                samples: 3,
            }],
        )
        .unwrap();
        assert_eq!(t.feature_importances().unwrap(), vec![0.0, 0.0]);
        assert_eq!(t.predict(&FeatureMatrix::from_row(&[1.0, 2.0])).unwrap(), vec![7.0]);
    }

    #[test]
    fn rejects_cycles_and_bad_features() {
        let mut nodes = small_tree_nodes();
        if let TreeNode::Split { left, .. } = &mut nodes[2] {
            *left = 0;
        }
        assert!(matches!(
            RegressionTree::build(3, nodes),
            Err(BuildError::InvalidParameter(_))
        ));

        assert!(matches!(
            RegressionTree::build(2, small_tree_nodes()),
            Err(BuildError::InvalidParameter(_))
        ));

        assert!(matches!(
            RegressionTree::build(3, vec![]),
            Err(BuildError::Empty(_))
        ));
    }

    #[test]
    fn parses_node_json() {
        let json = r#"[
            {"kind": "split", "feature": 0, "threshold": 1.5, "left": 1, "right": 2},
            {"kind": "leaf", "value": 3.0},
            {"kind": "leaf", "value": 4.0, "impurity": 0.25, "samples": 8}
        ]"#;
        let nodes: Vec<TreeNode> = serde_json::from_str(json).unwrap();
        let t = RegressionTree::build(1, nodes).unwrap();
        let x = FeatureMatrix::from_rows(&[vec![1.0], vec![2.0]]).unwrap();
        assert_eq!(t.predict(&x).unwrap(), vec![3.0, 4.0]);
    }
}
