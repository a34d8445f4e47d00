//! Standard Scaler (Z-score normalization), inference side only.
//!
//! The standard score of a sample `x` is calculated as:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the training mean and `s` the training standard deviation.
//! Either may be absent when the scaler was fitted without centering or
//! without scaling.

use motorspeed_core::{FeatureRow, MotorError};
use serde::{Deserialize, Serialize};

/// Serialized parameters of a fitted scaler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardScalerParams {
    /// Column names seen during fit, in order.
    pub feature_names_in: Vec<String>,
    /// Per-column mean (absent if fitted with `with_mean=False`).
    #[serde(default)]
    pub mean: Option<Vec<f64>>,
    /// Per-column scale (absent if fitted with `with_std=False`).
    #[serde(default)]
    pub scale: Option<Vec<f64>>,
}

/// A fitted, immutable standard scaler.
#[derive(Clone, Debug)]
pub struct StandardScaler {
    feature_names: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Validate parameters and build the scaler.
    pub fn from_params(params: StandardScalerParams) -> Result<Self, MotorError> {
        let n = params.feature_names_in.len();
        if n == 0 {
            return Err(MotorError::model_load("scaler", "no feature names recorded"));
        }

        let mean = match params.mean {
            Some(mean) if mean.len() != n => {
                return Err(MotorError::model_load(
                    "scaler",
                    format!("mean has {} entries for {n} features", mean.len()),
                ));
            }
            Some(mean) => mean,
            None => vec![0.0; n],
        };

        let scale = match params.scale {
            Some(scale) if scale.len() != n => {
                return Err(MotorError::model_load(
                    "scaler",
                    format!("scale has {} entries for {n} features", scale.len()),
                ));
            }
            // Constant features are stored with zero scale; divide by one instead.
            Some(scale) => scale
                .into_iter()
                .map(|s| if s == 0.0 { 1.0 } else { s })
                .collect(),
            None => vec![1.0; n],
        };

        if mean.iter().chain(scale.iter()).any(|v| !v.is_finite()) {
            return Err(MotorError::model_load("scaler", "non-finite mean or scale"));
        }

        Ok(Self {
            feature_names: params.feature_names_in,
            mean,
            scale,
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Check that `columns` are exactly the fitted columns, in order.
    pub fn check_schema<S: AsRef<str>>(&self, columns: &[S]) -> Result<(), MotorError> {
        let matches = columns.len() == self.feature_names.len()
            && columns
                .iter()
                .zip(&self.feature_names)
                .all(|(c, f)| c.as_ref() == f);
        if matches {
            Ok(())
        } else {
            Err(MotorError::schema_mismatch(
                &self.feature_names,
                columns.iter().map(|c| c.as_ref()),
            ))
        }
    }

    /// Normalize one row.
    pub fn transform(&self, row: &FeatureRow) -> Result<Vec<f64>, MotorError> {
        self.check_schema(&row.columns)?;
        if row.values.len() != self.n_features() {
            return Err(MotorError::schema_mismatch(
                &self.feature_names,
                row.columns.iter().take(row.values.len()),
            ));
        }
        Ok(row
            .values
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (u, s))| (x - u) / s)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(mean: Option<Vec<f64>>, scale: Option<Vec<f64>>) -> StandardScalerParams {
        StandardScalerParams {
            feature_names_in: vec!["a".into(), "b".into()],
            mean,
            scale,
        }
    }

    fn row(columns: Vec<&'static str>, values: Vec<f64>) -> FeatureRow {
        FeatureRow { columns, values }
    }

    #[test]
    fn centers_and_scales() {
        let scaler =
            StandardScaler::from_params(params(Some(vec![1.0, -1.0]), Some(vec![2.0, 0.5])))
                .unwrap();
        let z = scaler.transform(&row(vec!["a", "b"], vec![0.0, 0.0])).unwrap();
        assert_eq!(z, vec![-0.5, 2.0]);
    }

    #[test]
    fn zero_scale_is_treated_as_one() {
        let scaler =
            StandardScaler::from_params(params(Some(vec![1.0, 1.0]), Some(vec![0.0, 2.0])))
                .unwrap();
        let z = scaler.transform(&row(vec!["a", "b"], vec![3.0, 3.0])).unwrap();
        assert_eq!(z, vec![2.0, 1.0]);
    }

    #[test]
    fn missing_mean_and_scale_is_identity() {
        let scaler = StandardScaler::from_params(params(None, None)).unwrap();
        let z = scaler.transform(&row(vec!["a", "b"], vec![0.25, -1.5])).unwrap();
        assert_eq!(z, vec![0.25, -1.5]);
    }

    #[test]
    fn wrong_length_parameters_fail_to_load() {
        let err = StandardScaler::from_params(params(Some(vec![1.0]), None)).unwrap_err();
        assert!(matches!(err, MotorError::ModelLoad { .. }));
    }

    #[test]
    fn reordered_columns_are_a_schema_mismatch() {
        let scaler = StandardScaler::from_params(params(None, None)).unwrap();
        let err = scaler
            .transform(&row(vec!["b", "a"], vec![0.0, 0.0]))
            .unwrap_err();
        assert!(matches!(err, MotorError::SchemaMismatch { .. }));
    }

    #[test]
    fn short_row_is_a_schema_mismatch() {
        let scaler = StandardScaler::from_params(params(None, None)).unwrap();
        let err = scaler.transform(&row(vec!["a", "b"], vec![0.0])).unwrap_err();
        assert!(matches!(err, MotorError::SchemaMismatch { .. }));
    }
}
