use serde::{Deserialize, Deserializer, Serialize};

use crate::devices::Backend;

/// FlexASIO configuration (`FlexASIO.toml`)
///
/// Every field is optional: the UI edits partial records and FlexASIO falls
/// back to its own defaults for anything left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_size_samples: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<DeviceSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<DeviceSettings>,
}

/// Per-direction stream settings (`[input]` / `[output]` tables)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_seconds"
    )]
    pub suggested_latency_seconds: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wasapi_exclusive_mode: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wasapi_auto_convert: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<u8>,
}

impl Config {
    /// Configuration written when no file exists yet
    pub fn first_run() -> Self {
        Self {
            backend: Some(Backend::Wasapi.host_api_name().to_string()),
            buffer_size_samples: None,
            input: Some(DeviceSettings::with_device("")),
            output: Some(DeviceSettings::with_device("")),
        }
    }

    /// Backend selected by this config, if any
    pub fn backend_kind(&self) -> Option<Backend> {
        self.backend.as_deref().map(Backend::parse)
    }
}

impl DeviceSettings {
    pub fn with_device(device: impl Into<String>) -> Self {
        Self {
            device: Some(device.into()),
            ..Self::default()
        }
    }
}

/// Latency that is not a number is treated as unset.
fn deserialize_lenient_seconds<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer).unwrap_or(None);
    Ok(value.and_then(|v| v.as_f64()))
}
