use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// First Windows 11 build (10.0.22000)
pub const WINDOWS_11_FIRST_BUILD: u32 = 22000;

/// Windows version triple as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowsVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl WindowsVersion {
    pub fn new(major: u32, minor: u32, build: u32) -> Self {
        Self { major, minor, build }
    }

    /// Windows 11 still reports major version 10; only the build tells them apart.
    pub fn is_windows_11(&self) -> bool {
        self.major > 10 || (self.major == 10 && self.build >= WINDOWS_11_FIRST_BUILD)
    }

    /// Mica backdrop is available; otherwise the UI paints a solid background.
    pub fn supports_mica(&self) -> bool {
        self.is_windows_11()
    }
}

impl From<(u32, u32, u32)> for WindowsVersion {
    fn from((major, minor, build): (u32, u32, u32)) -> Self {
        Self::new(major, minor, build)
    }
}

/// Compare dotted release versions numerically.
///
/// A leading `v` is ignored, missing parts count as 0 and so do parts that
/// are not numbers.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a = version_parts(a);
    let b = version_parts(b);

    for i in 0..a.len().max(b.len()) {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

/// Whether `latest` is a newer release than `current`
pub fn is_update_available(current: &str, latest: &str) -> bool {
    compare_versions(latest, current) == Ordering::Greater
}

fn version_parts(version: &str) -> Vec<u64> {
    let version = version.trim();
    let version = version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version);

    version
        .split('.')
        .map(|part| part.trim().parse().unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parts() {
        assert_eq!(version_parts("v1.2.3"), vec![1, 2, 3]);
        assert_eq!(version_parts("1.x"), vec![1, 0]);
    }

    #[test]
    fn test_windows_version_from_tuple() {
        let version = WindowsVersion::from((10, 0, 19045));
        assert_eq!(version, WindowsVersion::new(10, 0, 19045));
        assert!(!version.supports_mica());
    }
}
