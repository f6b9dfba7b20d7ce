use super::types::{Backend, DeviceEntry, NONE_VALUE};

/// Driver file name present in hands-free Bluetooth endpoint names
pub const BLUETOOTH_MARKER: &str = "bthhfenum.sys";

/// Category shown for hands-free Bluetooth endpoints
pub const BLUETOOTH_DEVICE: &str = "Bluetooth";

/// Splits raw driver strings into display label and hardware token
pub struct DeviceNameParser;

impl DeviceNameParser {
    /// Parse one raw device string.
    ///
    /// The returned entry still carries the placeholder value `-1`; the
    /// labeler assigns the final position after sorting.
    pub fn parse(raw: &str, backend: &Backend) -> DeviceEntry {
        let parsed = if *backend == Backend::Mme {
            Self::parse_mme(raw)
        } else if raw.contains(BLUETOOTH_MARKER) {
            Self::parse_bluetooth(raw)
        } else {
            Self::parse_general(raw)
        };

        let (label, device) = parsed.unwrap_or_else(|| (raw.to_string(), String::new()));

        DeviceEntry {
            name: raw.to_string(),
            label,
            device,
            value: NONE_VALUE,
        }
    }

    /// `Speakers (Realtek High Definition Audio)`: MME truncates names, so
    /// the closing parenthesis may be missing.
    fn parse_mme(raw: &str) -> Option<(String, String)> {
        let (before, after) = raw.split_once('(')?;
        let segment = after.split('(').next().unwrap_or_default();
        let device = segment.replace(')', "");
        Some((before.trim().to_string(), device.trim().to_string()))
    }

    /// `Headset (@System32\drivers\bthhfenum.sys,#2;%1 Hands-Free%0\r\n;(WH-1000XM4))`
    ///
    /// The group never spans a line break.
    fn parse_bluetooth(raw: &str) -> Option<(String, String)> {
        raw.match_indices(";(").find_map(|(idx, _)| {
            let content = &raw[idx + 2..];
            let end = content.find([')', '\r', '\n'])?;
            if !content[end..].starts_with(')') {
                return None;
            }
            let label = content[..end].trim().to_string();
            Some((label, BLUETOOTH_DEVICE.to_string()))
        })
    }

    /// `Speakers (Realtek(R) Audio) [Loopback]`
    fn parse_general(raw: &str) -> Option<(String, String)> {
        let (rest, annotation) = split_annotation(raw);
        let (open, close) = last_group(rest)?;

        let base = rest[..open].trim();
        let device = rest[open + 1..close].trim().to_string();

        let label = match annotation {
            Some(annotation) => format!("[{}] {}", annotation, base),
            None => base.to_string(),
        };

        Some((label, device))
    }
}

/// Strip a trailing `[...]` annotation, returning the remainder and the
/// annotation content. The annotation only counts when a parenthesized group
/// closes right before it. Trailing whitespace is not skipped.
fn split_annotation(raw: &str) -> (&str, Option<&str>) {
    if let Some(without_close) = raw.strip_suffix(']') {
        if let Some(open) = without_close.rfind('[') {
            let rest = without_close[..open].trim_end();
            if rest.ends_with(')') {
                return (rest, Some(&without_close[open + 1..]));
            }
        }
    }
    (raw, None)
}

/// Byte offsets of the parentheses enclosing the group that ends the string.
///
/// Scans right to left with a depth counter so that `(Realtek(R) Audio)`
/// is matched as a whole instead of stopping at `(R)`.
fn last_group(s: &str) -> Option<(usize, usize)> {
    let close = s.len().checked_sub(1)?;
    if !s.ends_with(')') {
        return None;
    }

    let mut depth = 0usize;
    for (idx, ch) in s.char_indices().rev() {
        match ch {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    return Some((idx, close));
                }
            }
            _ => {}
        }
    }

    None
}
