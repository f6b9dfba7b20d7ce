use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;

use super::enumerator::{DeviceEnumerator, HostDevice, RawDeviceLists};
use super::types::Backend;

/// Enumerator serving a fixed set of host devices per backend
#[derive(Debug, Clone, Default)]
pub struct StaticEnumerator {
    devices: HashMap<Backend, Vec<HostDevice>>,
    failure: Option<String>,
}

impl StaticEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enumerator whose every call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            devices: HashMap::new(),
            failure: Some(message.into()),
        }
    }

    pub fn with_devices(mut self, backend: Backend, devices: Vec<HostDevice>) -> Self {
        self.devices.insert(backend, devices);
        self
    }
}

#[async_trait]
impl DeviceEnumerator for StaticEnumerator {
    async fn enumerate(&self, backend: &Backend) -> Result<RawDeviceLists> {
        if let Some(message) = &self.failure {
            bail!("{}", message);
        }

        let devices = self
            .devices
            .get(backend)
            .map(Vec::as_slice)
            .unwrap_or_default();

        Ok(RawDeviceLists::from_host_devices(backend, devices))
    }
}
