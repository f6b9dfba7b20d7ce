use std::sync::Arc;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use super::enumerator::{DeviceEnumerator, RawDeviceLists};
use super::labeler::DeviceLabeler;
use super::types::{Backend, DeviceEntry, Direction};

/// Labeled device lists for both directions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceLists {
    pub input: Vec<DeviceEntry>,
    pub output: Vec<DeviceEntry>,
}

impl DeviceLists {
    pub fn get(&self, direction: Direction) -> &[DeviceEntry] {
        match direction {
            Direction::Input => &self.input,
            Direction::Output => &self.output,
        }
    }

    /// Entry whose raw name matches `name`, as stored in the config
    pub fn find(&self, direction: Direction, name: &str) -> Option<&DeviceEntry> {
        self.get(direction).iter().find(|entry| entry.name == name)
    }
}

/// Enumerates devices through a [`DeviceEnumerator`] and labels the result
#[derive(Clone)]
pub struct DeviceCatalog {
    enumerator: Arc<dyn DeviceEnumerator>,
}

impl DeviceCatalog {
    pub fn new(enumerator: impl DeviceEnumerator + 'static) -> Self {
        Self {
            enumerator: Arc::new(enumerator),
        }
    }

    /// Raw names of `backend`, or two empty lists when enumeration fails
    pub async fn raw_devices(&self, backend: &Backend) -> RawDeviceLists {
        match self.enumerator.enumerate(backend).await {
            Ok(lists) => {
                debug!(
                    "Backend {} reported {} inputs and {} outputs",
                    backend,
                    lists.inputs.len(),
                    lists.outputs.len()
                );
                lists
            }
            Err(e) => {
                error!("Error getting devices for backend {}: {:#}", backend, e);
                RawDeviceLists::default()
            }
        }
    }

    /// Enumerate `backend` and build both picker lists
    pub async fn refresh(&self, backend: &Backend) -> DeviceLists {
        let raw = self.raw_devices(backend).await;

        DeviceLists {
            input: DeviceLabeler::label(&raw.inputs, backend, Direction::Input),
            output: DeviceLabeler::label(&raw.outputs, backend, Direction::Output),
        }
    }
}
