use anyhow::Result;
use async_trait::async_trait;

use super::types::Backend;

/// Device as reported by a host audio API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDevice {
    pub name: String,
    pub max_input_channels: u32,
    pub max_output_channels: u32,
}

impl HostDevice {
    pub fn new(name: impl Into<String>, max_input_channels: u32, max_output_channels: u32) -> Self {
        Self {
            name: name.into(),
            max_input_channels,
            max_output_channels,
        }
    }
}

/// Unprocessed device names for both directions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDeviceLists {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl RawDeviceLists {
    /// Sort host devices into input and output names.
    ///
    /// On a loopback-capable backend each output device is also offered for
    /// capture as `"<name> [Loopback]"`.
    pub fn from_host_devices<'a, I>(backend: &Backend, devices: I) -> Self
    where
        I: IntoIterator<Item = &'a HostDevice>,
    {
        let mut lists = Self::default();

        for device in devices {
            if device.max_input_channels > 0 {
                lists.inputs.push(device.name.clone());
            }
            if device.max_output_channels > 0 {
                if backend.supports_loopback() {
                    lists.inputs.push(loopback_name(&device.name));
                }
                lists.outputs.push(device.name.clone());
            }
        }

        lists
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }
}

/// Name under which an output device is offered for capture
pub fn loopback_name(name: &str) -> String {
    format!("{} [Loopback]", name)
}

/// Source of raw device names for a backend
#[async_trait]
pub trait DeviceEnumerator: Send + Sync {
    /// List device names of `backend`, grouped by direction
    async fn enumerate(&self, backend: &Backend) -> Result<RawDeviceLists>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_devices() -> Vec<HostDevice> {
        vec![
            HostDevice::new("Microphone (USB Audio)", 1, 0),
            HostDevice::new("Speakers (Realtek(R) Audio)", 0, 2),
            HostDevice::new("Headset (USB Headset)", 1, 2),
        ]
    }

    #[test]
    fn test_wasapi_adds_loopback_inputs() {
        let lists = RawDeviceLists::from_host_devices(&Backend::Wasapi, &host_devices());

        assert_eq!(
            lists.inputs,
            vec![
                "Microphone (USB Audio)",
                "Speakers (Realtek(R) Audio) [Loopback]",
                "Headset (USB Headset)",
                "Headset (USB Headset) [Loopback]",
            ]
        );
        assert_eq!(
            lists.outputs,
            vec!["Speakers (Realtek(R) Audio)", "Headset (USB Headset)"]
        );
    }

    #[test]
    fn test_mme_has_no_loopback() {
        let lists = RawDeviceLists::from_host_devices(&Backend::Mme, &host_devices());
        assert_eq!(lists.inputs, vec!["Microphone (USB Audio)", "Headset (USB Headset)"]);
        assert_eq!(lists.outputs.len(), 2);
    }

    #[test]
    fn test_device_without_channels_is_skipped() {
        let devices = vec![HostDevice::new("Disconnected", 0, 0)];
        let lists = RawDeviceLists::from_host_devices(&Backend::Wasapi, &devices);
        assert!(lists.is_empty());
    }
}
