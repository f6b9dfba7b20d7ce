pub mod types;
pub mod codec;
pub mod diff;

pub use types::{Config, DeviceSettings};
pub use codec::DEFAULT_CONFIG_TOML;
pub use diff::ConfigDiffer;
