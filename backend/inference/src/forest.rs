//! Random-forest regressor: the mean of its trees' predictions.

use motorspeed_core::MotorError;
use serde::{Deserialize, Serialize};

use crate::tree::{DecisionTree, TreeParams};
use crate::Regressor;

/// Serialized forest.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RandomForestParams {
    pub n_features_in: usize,
    pub trees: Vec<TreeParams>,
}

#[derive(Clone, Debug)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_features: usize,
}

impl RandomForest {
    pub fn from_params(params: RandomForestParams) -> Result<Self, MotorError> {
        if params.n_features_in == 0 {
            return Err(MotorError::model_load("model", "n_features_in must be > 0"));
        }
        if params.trees.is_empty() {
            return Err(MotorError::model_load("model", "forest has no trees"));
        }
        let trees = params
            .trees
            .into_iter()
            .map(|t| DecisionTree::from_params(t, params.n_features_in))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            trees,
            n_features: params.n_features_in,
        })
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Regressor for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_row(&self, row: &[f64]) -> f64 {
        let sum: f64 = self.trees.iter().map(|t| t.predict_row(row)).sum();
        sum / self.trees.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(threshold: f64, left: f64, right: f64) -> TreeParams {
        TreeParams {
            children_left: vec![1, -1, -1],
            children_right: vec![2, -1, -1],
            feature: vec![0, -2, -2],
            threshold: vec![threshold, -2.0, -2.0],
            value: vec![(left + right) / 2.0, left, right],
        }
    }

    #[test]
    fn averages_tree_outputs() {
        let forest = RandomForest::from_params(RandomForestParams {
            n_features_in: 1,
            trees: vec![stump(0.0, 100.0, 200.0), stump(1.0, 300.0, 600.0)],
        })
        .unwrap();
        // 0.5: first stump goes right (200), second goes left (300).
        assert_eq!(forest.predict_row(&[0.5]), 250.0);
        assert_eq!(forest.n_trees(), 2);
    }

    #[test]
    fn empty_forest_fails_to_load() {
        let err = RandomForest::from_params(RandomForestParams {
            n_features_in: 8,
            trees: vec![],
        })
        .unwrap_err();
        assert!(err.to_string().contains("no trees"));
    }

    #[test]
    fn invalid_tree_fails_the_whole_forest() {
        let mut bad = stump(0.0, 1.0, 2.0);
        bad.feature[0] = 3;
        assert!(RandomForest::from_params(RandomForestParams {
            n_features_in: 1,
            trees: vec![stump(0.0, 1.0, 2.0), bad],
        })
        .is_err());
    }
}
