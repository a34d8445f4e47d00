//! `motorspeed-core`: domain types shared by every motor speed predictor crate.

pub mod error;
pub mod features;
pub mod transcript;

pub use error::MotorError;
pub use features::{
    FeatureField, FeatureRow, FeatureVector, FEATURES, FEATURE_DEFAULT, FEATURE_MAX, FEATURE_MIN,
    FEATURE_NAMES, DISPLAY_PRECISION,
};
pub use transcript::{ChatTurn, Role, Transcript};
