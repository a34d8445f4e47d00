//! `motorspeed predict`: one prediction from flags, same rules as the web form.

use anyhow::{Context, Result};
use clap::Args;
use motorspeed_config::MotorSpeedConfig;
use motorspeed_core::FeatureVector;
use motorspeed_gateway::form::bounded_vector;
use motorspeed_inference::InferenceAdapter;

#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Ambient temperature
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub ambient: f64,
    /// Coolant temperature
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub coolant: f64,
    /// Voltage d-axis
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub u_d: f64,
    /// Voltage q-axis
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub u_q: f64,
    /// Torque
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub torque: f64,
    /// Current d-axis
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub i_d: f64,
    /// Permanent magnet temperature
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub pm: f64,
    /// Stator tooth temperature
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub stator_tooth: f64,
}

impl PredictArgs {
    fn to_vector(&self) -> FeatureVector {
        bounded_vector(FeatureVector {
            ambient: self.ambient,
            coolant: self.coolant,
            u_d: self.u_d,
            u_q: self.u_q,
            torque: self.torque,
            i_d: self.i_d,
            pm: self.pm,
            stator_tooth: self.stator_tooth,
        })
    }
}

pub async fn run(config: &MotorSpeedConfig, args: &PredictArgs) -> Result<()> {
    let adapter = InferenceAdapter::load(&config.scaler_path(), &config.model_path())
        .await
        .context("Cannot load the scaler and model artifacts")?;
    let rpm = adapter.predict(&args.to_vector())?;
    println!("Predicted Motor Speed: {rpm:.6} RPM");
    Ok(())
}
