use super::types::{Config, DeviceSettings};

/// Decides whether edited settings match the saved ones
pub struct ConfigDiffer;

impl ConfigDiffer {
    /// Structural equality of two configs.
    ///
    /// A missing side is never equal: a config that was never loaded always
    /// counts as changed.
    pub fn equal(current: Option<&Config>, original: Option<&Config>) -> bool {
        let (Some(current), Some(original)) = (current, original) else {
            return false;
        };

        current.backend == original.backend
            && current.buffer_size_samples == original.buffer_size_samples
            && Self::settings_equal(current.input.as_ref(), original.input.as_ref())
            && Self::settings_equal(current.output.as_ref(), original.output.as_ref())
    }

    /// Both tables must set the same fields to the same values.
    fn settings_equal(a: Option<&DeviceSettings>, b: Option<&DeviceSettings>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.device == b.device
                    && a.suggested_latency_seconds == b.suggested_latency_seconds
                    && a.wasapi_exclusive_mode == b.wasapi_exclusive_mode
                    && a.wasapi_auto_convert == b.wasapi_auto_convert
                    && a.channels == b.channels
            }
            _ => false,
        }
    }
}

impl Config {
    /// Whether saving `self` would change `original`
    pub fn has_changes(&self, original: Option<&Config>) -> bool {
        !ConfigDiffer::equal(Some(self), original)
    }
}
