pub mod types;
pub mod parser;
pub mod labeler;
pub mod enumerator;
pub mod catalog;
pub mod mock;

pub use types::{Backend, DeviceEntry, Direction, LOOPBACK_PREFIX, NONE_LABEL, NONE_VALUE};
pub use parser::{DeviceNameParser, BLUETOOTH_DEVICE, BLUETOOTH_MARKER};
pub use labeler::DeviceLabeler;
pub use enumerator::{loopback_name, DeviceEnumerator, HostDevice, RawDeviceLists};
pub use catalog::{DeviceCatalog, DeviceLists};
pub use mock::StaticEnumerator;
