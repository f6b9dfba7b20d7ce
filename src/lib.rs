pub mod color;
pub mod config;
pub mod devices;
pub mod system;

pub use color::adjust_brightness;
pub use config::{Config, ConfigDiffer, DeviceSettings};
pub use devices::{Backend, DeviceCatalog, DeviceEntry, DeviceLabeler, Direction};
