//! Parameter Form: turns submitted widget values into a [`FeatureVector`].
//!
//! The browser already enforces `min`/`max`/`step`; the same rules are
//! applied here so hand-crafted requests cannot push values out of range.

use motorspeed_core::{FeatureVector, DISPLAY_PRECISION, FEATURE_DEFAULT, FEATURE_MAX, FEATURE_MIN};
use serde::Deserialize;

/// Raw form fields as posted. Kept as strings so an empty input is not a
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FeatureForm {
    pub ambient: Option<String>,
    pub coolant: Option<String>,
    pub u_d: Option<String>,
    pub u_q: Option<String>,
    pub torque: Option<String>,
    pub i_d: Option<String>,
    pub pm: Option<String>,
    pub stator_tooth: Option<String>,
}

impl FeatureForm {
    pub fn to_vector(&self) -> FeatureVector {
        FeatureVector::from_values(
            [
                &self.ambient,
                &self.coolant,
                &self.u_d,
                &self.u_q,
                &self.torque,
                &self.i_d,
                &self.pm,
                &self.stator_tooth,
            ]
            .map(|raw| widget_value(raw.as_deref())),
        )
    }
}

/// Parse, clamp to bounds, and round to display precision.
pub fn widget_value(raw: Option<&str>) -> f64 {
    let parsed = raw
        .map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(FEATURE_DEFAULT);
    bounded(parsed)
}

/// Apply the widget rules to an already-parsed value.
pub fn bounded(value: f64) -> f64 {
    if !value.is_finite() {
        return FEATURE_DEFAULT;
    }
    round_to_precision(value.clamp(FEATURE_MIN, FEATURE_MAX))
}

/// Apply the widget rules to every field of `vector`.
pub fn bounded_vector(vector: FeatureVector) -> FeatureVector {
    FeatureVector::from_values(vector.values().map(bounded))
}

fn round_to_precision(value: f64) -> f64 {
    let factor = 10f64.powi(DISPLAY_PRECISION as i32);
    let rounded = (value * factor).round() / factor;
    // Avoid rendering "-0.000000".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Render a value the way the input widget displays it.
pub fn display_value(value: f64) -> String {
    format!("{value:.prec$}", prec = DISPLAY_PRECISION)
}
