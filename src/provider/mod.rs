//! Data providers.
//!
//! A provider holds the latest raw bytes of a named source and pushes them to
//! registered listeners whenever the source changes.

mod manager;
#[cfg(feature = "async")]
mod reload;
mod source;

pub use manager::DataManager;
#[cfg(feature = "async")]
pub use reload::spawn_auto_reload;
pub use source::DataProvider;

use crate::error::Result;
use crate::matcher::DynamicMatcher;

/// Sink for provider data
///
/// `update` may query the provider (`listener_count`, `delete_listener`,
/// `Debug`) but must not push data into the same provider (`set_data`,
/// `reload`, `load_and_add_listener`): deliveries are serialized and such a
/// call would wait on itself.
pub trait DataListener: Send + Sync {
    /// Receive the full current content of the source
    fn update(&self, data: &[u8]) -> Result<()>;
}

impl DataListener for DynamicMatcher {
    fn update(&self, data: &[u8]) -> Result<()> {
        DynamicMatcher::update(self, data)
    }
}

impl<F> DataListener for F
where
    F: Fn(&[u8]) -> Result<()> + Send + Sync,
{
    fn update(&self, data: &[u8]) -> Result<()> {
        self(data)
    }
}
