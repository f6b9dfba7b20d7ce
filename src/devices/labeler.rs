use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use log::{debug, warn};

use super::parser::DeviceNameParser;
use super::types::{Backend, DeviceEntry, Direction};

/// Turns raw driver strings into the rows of a device picker
pub struct DeviceLabeler;

impl DeviceLabeler {
    /// Parse, sort and index `raw_devices`.
    ///
    /// Loopback captures sort after every other device, the rest follows
    /// locale collation of the label. The "None" row is always first and
    /// keeps value `-1`; the others are numbered from 0 in display order.
    pub fn label<I, S>(
        raw_devices: I,
        backend: &Backend,
        direction: Direction,
    ) -> Vec<DeviceEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<DeviceEntry> = raw_devices
            .into_iter()
            .map(|raw| DeviceNameParser::parse(raw.as_ref(), backend))
            .collect();

        let collator = Self::collator();
        entries.sort_by(|a, b| {
            a.is_loopback()
                .cmp(&b.is_loopback())
                .then_with(|| Self::compare_labels(collator.as_ref(), &a.label, &b.label))
        });

        for (idx, entry) in entries.iter_mut().enumerate() {
            entry.value = idx as i32;
        }

        debug!(
            "Labeled {} {:?} devices for backend {}",
            entries.len(),
            direction,
            backend
        );

        let mut list = Vec::with_capacity(entries.len() + 1);
        list.push(DeviceEntry::none());
        list.extend(entries);
        list
    }

    fn collator() -> Option<Collator> {
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!("Collation data unavailable, sorting by code point: {}", e);
                None
            }
        }
    }

    fn compare_labels(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
        match collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}
