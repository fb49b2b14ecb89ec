use std::collections::HashSet;

use super::{MacMatcher, WriteableMatcher};
use crate::error::Result;
use crate::parser::parse_mac;
use crate::types::MacAddr;

/// Static MAC address set - hash lookup on the canonical 6-byte value
///
/// Filled during construction only. Once shared with readers it is never
/// mutated; reloads build a new set instead.
#[derive(Debug, Clone, Default)]
pub struct MacSet {
    macs: HashSet<MacAddr>,
}

impl MacSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already parsed address. Returns false if it was present.
    pub fn insert(&mut self, mac: MacAddr) -> bool {
        self.macs.insert(mac)
    }

    pub fn contains(&self, mac: &MacAddr) -> bool {
        self.macs.contains(mac)
    }
}

impl FromIterator<MacAddr> for MacSet {
    fn from_iter<I: IntoIterator<Item = MacAddr>>(iter: I) -> Self {
        Self {
            macs: iter.into_iter().collect(),
        }
    }
}

impl MacMatcher for MacSet {
    fn matches(&self, mac: &[u8]) -> bool {
        MacAddr::from_slice(mac).is_some_and(|key| self.contains(&key))
    }

    fn len(&self) -> usize {
        self.macs.len()
    }

    fn close(&self) -> Result<()> {
        // In-memory only
        Ok(())
    }
}

impl WriteableMatcher for MacSet {
    fn add(&mut self, pattern: &str) -> Result<()> {
        self.insert(parse_mac(pattern)?);
        Ok(())
    }
}
