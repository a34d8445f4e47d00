use thiserror::Error;

/// Top-level error type for the motor speed predictor.
#[derive(Debug, Error)]
pub enum MotorError {
    /// A scaler or model artifact could not be read, parsed, or validated.
    #[error("failed to load {artifact}: {reason}")]
    ModelLoad { artifact: String, reason: String },

    /// The feature row disagrees with the schema the artifacts were fitted on.
    #[error("schema mismatch: expected columns {expected:?}, got {got:?}")]
    SchemaMismatch { expected: Vec<String>, got: Vec<String> },
}

impl MotorError {
    pub fn model_load(artifact: impl Into<String>, reason: impl ToString) -> Self {
        Self::ModelLoad {
            artifact: artifact.into(),
            reason: reason.to_string(),
        }
    }

    pub fn schema_mismatch<E, G>(expected: E, got: G) -> Self
    where
        E: IntoIterator,
        E::Item: ToString,
        G: IntoIterator,
        G::Item: ToString,
    {
        Self::SchemaMismatch {
            expected: expected.into_iter().map(|c| c.to_string()).collect(),
            got: got.into_iter().map(|c| c.to_string()).collect(),
        }
    }
}
