//! `motorspeed-inference`: the Inference Adapter.
//!
//! Loads a fitted standard scaler and random-forest regressor from JSON
//! artifacts and turns a [`FeatureVector`](motorspeed_core::FeatureVector)
//! into a predicted motor speed.

pub mod adapter;
pub mod artifact;
pub mod forest;
pub mod scaler;
pub mod tree;

pub use adapter::InferenceAdapter;
pub use forest::{RandomForest, RandomForestParams};
pub use scaler::{StandardScaler, StandardScalerParams};
pub use tree::{DecisionTree, TreeParams};

/// A fitted regressor over a fixed number of features.
pub trait Regressor {
    /// Number of features a row must have.
    fn n_features(&self) -> usize;

    /// Predict one value from a row of `n_features()` normalized features.
    fn predict_row(&self, row: &[f64]) -> f64;
}
