use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::MacMatcher;
use crate::error::Result;

/// Producer that builds a complete matcher from raw source bytes
type ParseFn = Box<dyn Fn(&[u8]) -> Result<Arc<dyn MacMatcher>> + Send + Sync>;

/// Hot-reloadable matcher
///
/// Holds a reference to an immutable snapshot. The lock guards only the
/// reference slot: readers clone the `Arc` and release the lock before
/// delegating, and `update` builds the replacement outside the lock and swaps
/// it in one step. Readers observe either the old or the new snapshot.
pub struct DynamicMatcher {
    parser: ParseFn,
    current: RwLock<Option<Arc<dyn MacMatcher>>>,
}

impl DynamicMatcher {
    /// Create an empty matcher bound to `parser`
    pub fn new<F, M>(parser: F) -> Self
    where
        F: Fn(&[u8]) -> Result<M> + Send + Sync + 'static,
        M: MacMatcher + 'static,
    {
        Self {
            parser: Box::new(move |data: &[u8]| Ok(Arc::new(parser(data)?) as Arc<dyn MacMatcher>)),
            current: RwLock::new(None),
        }
    }

    /// Current snapshot, if one has been installed
    pub fn snapshot(&self) -> Option<Arc<dyn MacMatcher>> {
        self.current.read().clone()
    }

    /// Rebuild from `data` and swap in the result.
    ///
    /// On a parse failure the previous snapshot is kept.
    pub fn update(&self, data: &[u8]) -> Result<()> {
        let next = match (self.parser)(data) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(bytes = data.len(), error = %e, "rejected MAC set reload, keeping previous data");
                return Err(e);
            }
        };
        let entries = next.len();

        *self.current.write() = Some(next);

        tracing::debug!(entries, "reloaded MAC set");
        Ok(())
    }
}

impl MacMatcher for DynamicMatcher {
    fn matches(&self, mac: &[u8]) -> bool {
        self.snapshot().is_some_and(|m| m.matches(mac))
    }

    fn len(&self) -> usize {
        self.snapshot().map_or(0, |m| m.len())
    }

    fn close(&self) -> Result<()> {
        match self.snapshot() {
            Some(m) => m.close(),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for DynamicMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicMatcher")
            .field("loaded", &self.current.read().is_some())
            .field("len", &self.len())
            .finish()
    }
}
