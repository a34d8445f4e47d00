//! Inference Adapter: scaler followed by forest, behind one `predict` call.

use std::path::Path;

use motorspeed_core::{FeatureVector, MotorError, FEATURE_NAMES};
use tracing::{debug, info, instrument};

use crate::artifact::load_json;
use crate::forest::{RandomForest, RandomForestParams};
use crate::scaler::{StandardScaler, StandardScalerParams};
use crate::Regressor;

/// Read-only after construction; share it across sessions behind an `Arc`.
#[derive(Clone, Debug)]
pub struct InferenceAdapter {
    scaler: StandardScaler,
    model: RandomForest,
}

impl InferenceAdapter {
    /// Load both artifacts. Any failure here is fatal for the application.
    pub async fn load(scaler_path: &Path, model_path: &Path) -> Result<Self, MotorError> {
        let scaler_params: StandardScalerParams = load_json("scaler", scaler_path).await?;
        let model_params: RandomForestParams = load_json("model", model_path).await?;

        let adapter = Self::from_parts(
            StandardScaler::from_params(scaler_params)?,
            RandomForest::from_params(model_params)?,
        )?;
        info!(
            trees = adapter.model.n_trees(),
            features = adapter.scaler.n_features(),
            "Inference adapter ready"
        );
        Ok(adapter)
    }

    /// Pair a scaler with a model, checking both against the form's schema.
    pub fn from_parts(scaler: StandardScaler, model: RandomForest) -> Result<Self, MotorError> {
        scaler.check_schema(&FEATURE_NAMES[..])?;
        if model.n_features() != scaler.n_features() {
            return Err(MotorError::schema_mismatch(
                scaler.feature_names(),
                [format!("{} model features", model.n_features())],
            ));
        }
        Ok(Self { scaler, model })
    }

    /// Predict motor speed (RPM) for one set of readings.
    #[instrument(level = "debug", skip(self))]
    pub fn predict(&self, vector: &FeatureVector) -> Result<f64, MotorError> {
        let row = vector.to_row();
        let scaled = self.scaler.transform(&row)?;
        if scaled.len() != self.model.n_features() {
            return Err(MotorError::schema_mismatch(
                self.scaler.feature_names(),
                row.columns,
            ));
        }
        let rpm = self.model.predict_row(&scaled);
        debug!(rpm, "Prediction");
        Ok(rpm)
    }

    pub fn n_trees(&self) -> usize {
        self.model.n_trees()
    }
}
