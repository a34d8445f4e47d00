//! Regression decision tree in flat array form.
//!
//! Node `i` is a leaf when `children_left[i] == TREE_LEAF`. Otherwise a
//! sample goes to `children_left[i]` when
//! `sample[feature[i]] <= threshold[i]` and to `children_right[i]` otherwise.

use motorspeed_core::MotorError;
use serde::{Deserialize, Serialize};

use crate::Regressor;

/// Child index marking a leaf.
pub const TREE_LEAF: i64 = -1;

/// Serialized tree arrays, one entry per node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeParams {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

#[derive(Clone, Copy, Debug)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(f64),
}

/// A validated, immutable decision tree.
#[derive(Clone, Debug)]
pub struct DecisionTree {
    nodes: Vec<Node>,
    n_features: usize,
}

impl DecisionTree {
    /// Validate the arrays and build the tree.
    ///
    /// Children must point strictly forward, so every walk terminates.
    pub fn from_params(params: TreeParams, n_features: usize) -> Result<Self, MotorError> {
        let n = params.children_left.len();
        if n == 0 {
            return Err(MotorError::model_load("model", "tree has no nodes"));
        }
        if [
            params.children_right.len(),
            params.feature.len(),
            params.threshold.len(),
            params.value.len(),
        ]
        .iter()
        .any(|&len| len != n)
        {
            return Err(MotorError::model_load(
                "model",
                format!("tree arrays disagree on node count ({n} nodes)"),
            ));
        }

        let mut nodes = Vec::with_capacity(n);
        for i in 0..n {
            let (left, right) = (params.children_left[i], params.children_right[i]);
            if left == TREE_LEAF || right == TREE_LEAF {
                if left != right {
                    return Err(MotorError::model_load(
                        "model",
                        format!("node {i} has only one child"),
                    ));
                }
                let value = params.value[i];
                if !value.is_finite() {
                    return Err(MotorError::model_load(
                        "model",
                        format!("leaf {i} has a non-finite value"),
                    ));
                }
                nodes.push(Node::Leaf(value));
                continue;
            }

            let child = |c: i64| -> Result<usize, MotorError> {
                match usize::try_from(c) {
                    Ok(c) if c > i && c < n => Ok(c),
                    _ => Err(MotorError::model_load(
                        "model",
                        format!("node {i} has invalid child index {c}"),
                    )),
                }
            };
            let feature = match usize::try_from(params.feature[i]) {
                Ok(f) if f < n_features => f,
                _ => {
                    return Err(MotorError::model_load(
                        "model",
                        format!(
                            "node {i} splits on feature {} of {n_features}",
                            params.feature[i]
                        ),
                    ));
                }
            };
            let threshold = params.threshold[i];
            if threshold.is_nan() {
                return Err(MotorError::model_load(
                    "model",
                    format!("node {i} has a NaN threshold"),
                ));
            }
            nodes.push(Node::Split {
                feature,
                threshold,
                left: child(left)?,
                right: child(right)?,
            });
        }

        Ok(Self { nodes, n_features })
    }
}

impl Regressor for DecisionTree {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_row(&self, row: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Leaf(value) => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    // Trees compare single-precision inputs against their thresholds.
                    let x = row[feature] as f32 as f64;
                    idx = if x <= threshold { left } else { right };
                }
            }
        }
    }
}
