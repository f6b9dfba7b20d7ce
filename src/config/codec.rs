use anyhow::{Context, Result};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use super::types::{Config, DeviceSettings};

/// Text of [`Config::first_run`] as FlexASIO expects it on disk
pub const DEFAULT_CONFIG_TOML: &str =
    "backend = \"Windows WASAPI\"\n[input]\ndevice = \"\"\n[output]\ndevice = \"\"";

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config TOML")
    }

    /// Serialize for saving. Latencies are rounded first and trailing
    /// whitespace is dropped.
    pub fn to_toml_string(&self) -> Result<String> {
        let normalized = self.clone().normalized();
        let toml_str = toml::to_string(&normalized).context("Failed to serialize config")?;
        Ok(toml_str.trim_end().to_string())
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).context("Failed to parse config JSON")
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).context("Failed to serialize config to JSON")
    }

    /// Round latencies to one decimal place
    pub fn normalized(mut self) -> Self {
        if let Some(input) = self.input.as_mut() {
            input.normalize();
        }
        if let Some(output) = self.output.as_mut() {
            output.normalize();
        }
        self
    }
}

impl DeviceSettings {
    fn normalize(&mut self) {
        self.suggested_latency_seconds = self.suggested_latency_seconds.map(round_tenths);
    }
}

/// Ties go to the even digit, so `0.25` saves as `0.2`.
fn round_tenths(value: f64) -> f64 {
    Decimal::from_f64(value)
        .and_then(|d| d.round_dp(1).to_f64())
        .unwrap_or(value)
}
