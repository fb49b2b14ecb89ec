mod dynamic;
mod group;
mod static_set;

pub use dynamic::DynamicMatcher;
pub use group::MatcherGroup;
pub use static_set::MacSet;

use std::sync::Arc;

use crate::error::Result;

/// Trait for MAC address matchers
///
/// Lookups take raw bytes so that callers can test any payload; anything
/// that is not exactly 6 bytes never matches.
pub trait MacMatcher: Send + Sync {
    /// Check if the address is a member of this matcher
    fn matches(&self, mac: &[u8]) -> bool;

    /// Number of entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Release resources held by the matcher
    fn close(&self) -> Result<()>;
}

/// Matcher that accepts new literals during construction
pub trait WriteableMatcher: MacMatcher {
    /// Parse `pattern` as an address literal and add it
    fn add(&mut self, pattern: &str) -> Result<()>;
}

impl<T: MacMatcher + ?Sized> MacMatcher for Arc<T> {
    fn matches(&self, mac: &[u8]) -> bool {
        (**self).matches(mac)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }
}

impl<T: MacMatcher + ?Sized> MacMatcher for Box<T> {
    fn matches(&self, mac: &[u8]) -> bool {
        (**self).matches(mac)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }
}
