use std::fmt;

use parking_lot::Mutex;

use super::MacMatcher;
use crate::error::Result;

type Closer = Box<dyn FnOnce() + Send>;

/// Ordered OR of heterogeneous matchers plus teardown callbacks
///
/// `close` (or drop) runs every registered closer once, in registration
/// order. Members should be appended cheapest/likeliest first since `matches`
/// short-circuits.
#[derive(Default)]
pub struct MatcherGroup {
    members: Vec<Box<dyn MacMatcher>>,
    closers: Mutex<Vec<Closer>>,
}

impl MatcherGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member matcher
    pub fn append<M: MacMatcher + 'static>(&mut self, matcher: M) {
        self.members.push(Box::new(matcher));
    }

    /// Register a teardown callback to run on close
    pub fn append_closer<F: FnOnce() + Send + 'static>(&mut self, f: F) {
        self.closers.get_mut().push(Box::new(f));
    }

    /// Number of member matchers
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl MacMatcher for MatcherGroup {
    fn matches(&self, mac: &[u8]) -> bool {
        self.members.iter().any(|m| m.matches(mac))
    }

    /// Sum of member lengths. Addresses present in several members are
    /// counted once per member.
    fn len(&self) -> usize {
        self.members.iter().map(|m| m.len()).sum()
    }

    fn close(&self) -> Result<()> {
        let closers = std::mem::take(&mut *self.closers.lock());
        if !closers.is_empty() {
            tracing::debug!(closers = closers.len(), "closing MAC matcher group");
        }
        for f in closers {
            f();
        }
        for m in &self.members {
            if let Err(e) = m.close() {
                tracing::debug!(error = %e, "member close failed");
            }
        }
        Ok(())
    }
}

impl Drop for MatcherGroup {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

impl fmt::Debug for MatcherGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherGroup")
            .field("members", &self.members.len())
            .field("closers", &self.closers.lock().len())
            .finish()
    }
}
