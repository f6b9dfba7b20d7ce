use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the synthetic "unselected" row
pub const NONE_LABEL: &str = "None";

/// Value carried by the "unselected" row
pub const NONE_VALUE: i32 = -1;

/// Label prefix of loopback capture devices
pub const LOOPBACK_PREFIX: &str = "[Loopback]";

/// Device direction (input or output)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Input,
    Output,
}

/// One row of a device picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEntry {
    /// Raw driver string, written back to the config as-is
    pub name: String,
    /// Display string
    pub label: String,
    /// Hardware or category token, may be empty
    pub device: String,
    /// Position in the sorted list, `-1` for the "None" row
    pub value: i32,
}

impl DeviceEntry {
    /// The "None" row placed first in every list
    pub fn none() -> Self {
        Self {
            name: String::new(),
            label: NONE_LABEL.to_string(),
            device: String::new(),
            value: NONE_VALUE,
        }
    }

    pub fn is_none(&self) -> bool {
        self.value == NONE_VALUE
    }

    pub fn is_loopback(&self) -> bool {
        self.label.starts_with(LOOPBACK_PREFIX)
    }
}

/// Audio backend used to enumerate devices
///
/// Known backends accept both their short name (`WASAPI`) and the
/// host API name FlexASIO stores in its config (`Windows WASAPI`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Backend {
    Mme,
    DirectSound,
    Wasapi,
    WdmKs,
    Other(String),
}

impl Backend {
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "MME" => Backend::Mme,
            "DirectSound" | "Windows DirectSound" => Backend::DirectSound,
            "WASAPI" | "Windows WASAPI" => Backend::Wasapi,
            "WDM-KS" | "Windows WDM-KS" => Backend::WdmKs,
            _ => Backend::Other(name.to_string()),
        }
    }

    /// Backends offered in the backend picker
    pub fn known() -> [Backend; 4] {
        [
            Backend::Mme,
            Backend::DirectSound,
            Backend::Wasapi,
            Backend::WdmKs,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Backend::Mme => "MME",
            Backend::DirectSound => "DirectSound",
            Backend::Wasapi => "WASAPI",
            Backend::WdmKs => "WDM-KS",
            Backend::Other(name) => name,
        }
    }

    /// Host API name reported by the enumeration layer
    pub fn host_api_name(&self) -> &str {
        match self {
            Backend::Mme => "MME",
            Backend::DirectSound => "Windows DirectSound",
            Backend::Wasapi => "Windows WASAPI",
            Backend::WdmKs => "Windows WDM-KS",
            Backend::Other(name) => name,
        }
    }

    /// Whether output devices can also be opened for capture
    pub fn supports_loopback(&self) -> bool {
        matches!(self, Backend::Wasapi)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Backend::Other(_))
    }
}

impl From<&str> for Backend {
    fn from(name: &str) -> Self {
        Backend::parse(name)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parses_both_spellings() {
        assert_eq!(Backend::parse("WASAPI"), Backend::Wasapi);
        assert_eq!(Backend::parse("Windows WASAPI"), Backend::Wasapi);
        assert_eq!(Backend::parse("Windows WDM-KS"), Backend::WdmKs);
        assert_eq!(Backend::parse("MME"), Backend::Mme);
    }

    #[test]
    fn test_unknown_backend_is_preserved() {
        let backend = Backend::parse("ASIO4ALL");
        assert_eq!(backend, Backend::Other("ASIO4ALL".to_string()));
        assert_eq!(backend.as_str(), "ASIO4ALL");
        assert_eq!(backend.host_api_name(), "ASIO4ALL");
        assert!(!backend.is_known());
    }

    #[test]
    fn test_host_api_names() {
        assert_eq!(Backend::DirectSound.host_api_name(), "Windows DirectSound");
        assert_eq!(Backend::Wasapi.to_string(), "WASAPI");
        assert!(Backend::Wasapi.supports_loopback());
        assert!(!Backend::Mme.supports_loopback());
    }

    #[test]
    fn test_known_backends_round_trip() {
        for backend in Backend::known() {
            assert!(backend.is_known());
            assert_eq!(Backend::parse(backend.as_str()), backend);
            assert_eq!(Backend::parse(backend.host_api_name()), backend);
        }
    }

    #[test]
    fn test_none_entry() {
        let none = DeviceEntry::none();
        assert_eq!(none.label, "None");
        assert_eq!(none.value, -1);
        assert!(none.name.is_empty());
        assert!(none.is_none());
    }

    #[test]
    fn test_device_entry_json_shape() {
        let json = serde_json::to_value(DeviceEntry::none()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "", "label": "None", "device": "", "value": -1})
        );
    }
}
