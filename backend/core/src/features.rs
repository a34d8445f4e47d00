//! Sensor feature vector and its fixed column schema.
//!
//! The column order here is the order the scaler and forest were fitted on;
//! every row handed to inference is assembled from [`FEATURE_NAMES`].

use serde::{Deserialize, Serialize};

/// Inclusive lower bound of every input field.
pub const FEATURE_MIN: f64 = -3.0;

/// Inclusive upper bound of every input field.
pub const FEATURE_MAX: f64 = 2.0;

/// Value a field takes before the user touches it.
pub const FEATURE_DEFAULT: f64 = 0.0;

/// Number of decimal digits the form displays and accepts.
pub const DISPLAY_PRECISION: usize = 6;

/// Column order of the training-time schema.
pub const FEATURE_NAMES: [&str; 8] = [
    "ambient",
    "coolant",
    "u_d",
    "u_q",
    "torque",
    "i_d",
    "pm",
    "stator_tooth",
];

/// Name and display label of one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureField {
    pub name: &'static str,
    pub label: &'static str,
}

/// Every field, in schema order.
pub const FEATURES: [FeatureField; 8] = [
    FeatureField { name: "ambient", label: "Ambient Temperature (℃)" },
    FeatureField { name: "coolant", label: "Coolant Temperature (℃)" },
    FeatureField { name: "u_d", label: "Voltage d-axis (u_d)" },
    FeatureField { name: "u_q", label: "Voltage q-axis (u_q)" },
    FeatureField { name: "torque", label: "Torque (Nm)" },
    FeatureField { name: "i_d", label: "Current d-axis (i_d)" },
    FeatureField { name: "pm", label: "Permanent Magnet Temperature (℃)" },
    FeatureField { name: "stator_tooth", label: "Stator Tooth Temperature (℃)" },
];

/// Eight sensor readings, already bounded to `[FEATURE_MIN, FEATURE_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    pub ambient: f64,
    pub coolant: f64,
    pub u_d: f64,
    pub u_q: f64,
    pub torque: f64,
    pub i_d: f64,
    pub pm: f64,
    pub stator_tooth: f64,
}

impl FeatureVector {
    /// Build a vector from values given in schema order.
    pub fn from_values(values: [f64; 8]) -> Self {
        let [ambient, coolant, u_d, u_q, torque, i_d, pm, stator_tooth] = values;
        Self {
            ambient,
            coolant,
            u_d,
            u_q,
            torque,
            i_d,
            pm,
            stator_tooth,
        }
    }

    /// Values in schema order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.ambient,
            self.coolant,
            self.u_d,
            self.u_q,
            self.torque,
            self.i_d,
            self.pm,
            self.stator_tooth,
        ]
    }

    /// Assemble the single-row table handed to the scaler.
    pub fn to_row(&self) -> FeatureRow {
        FeatureRow {
            columns: FEATURE_NAMES.to_vec(),
            values: self.values().to_vec(),
        }
    }
}

/// One named row of features.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub columns: Vec<&'static str>,
    pub values: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        assert_eq!(FeatureVector::default().values(), [FEATURE_DEFAULT; 8]);
    }

    #[test]
    fn row_follows_schema_order() {
        let v = FeatureVector::from_values([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let row = v.to_row();
        assert_eq!(row.columns, FEATURE_NAMES.to_vec());
        assert_eq!(row.values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(v.torque, 5.0);
    }

    #[test]
    fn field_table_matches_names() {
        let names: Vec<_> = FEATURES.iter().map(|f| f.name).collect();
        assert_eq!(names, FEATURE_NAMES.to_vec());
    }
}
