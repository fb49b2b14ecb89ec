use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::{Mutex, RwLock};

use super::DataListener;
use crate::error::Result;

/// Named byte source with change listeners
///
/// Content is either set directly (`set_data`) or read from a file
/// (`from_file` + `reload`). Every change is pushed to all listeners.
///
/// Deliveries are serialized: listeners receive changes in the order they
/// were stored, and the last delivered content equals `data()`.
pub struct DataProvider {
    tag: String,
    path: Option<PathBuf>,
    data: RwLock<Arc<[u8]>>,
    modified: Mutex<Option<SystemTime>>,
    listeners: Mutex<Vec<Arc<dyn DataListener>>>,
    // Held across store + delivery, never while `listeners` is locked
    notify: Mutex<()>,
}

impl DataProvider {
    /// Create an in-memory provider
    pub fn new(tag: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let data: Vec<u8> = data.into();
        Self {
            tag: tag.into(),
            path: None,
            data: RwLock::new(Arc::from(data)),
            modified: Mutex::new(None),
            listeners: Mutex::new(Vec::new()),
            notify: Mutex::new(()),
        }
    }

    /// Create a provider backed by a file, reading its current content
    pub fn from_file(tag: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let modified = fs::metadata(&path)?.modified().ok();
        let data = fs::read(&path)?;

        let mut provider = Self::new(tag, data);
        provider.path = Some(path);
        *provider.modified.get_mut() = modified;
        Ok(provider)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current content
    pub fn data(&self) -> Arc<[u8]> {
        self.data.read().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Push the current content to `listener` and register it.
    ///
    /// If the initial load fails the listener is not registered.
    pub fn load_and_add_listener(&self, listener: Arc<dyn DataListener>) -> Result<()> {
        // A concurrent set_data cannot slip between the load and the push
        let _notify = self.notify.lock();
        let data = self.data();
        listener.update(&data)?;
        self.listeners.lock().push(listener);
        Ok(())
    }

    /// Deregister `listener`. No-op if it is not registered.
    pub fn delete_listener(&self, listener: &Arc<dyn DataListener>) {
        let target = Arc::as_ptr(listener) as *const ();
        self.listeners
            .lock()
            .retain(|l| Arc::as_ptr(l) as *const () != target);
    }

    /// Replace the content and notify every listener.
    ///
    /// A failing listener does not stop the others. Returns the number of
    /// listeners that rejected the new content.
    pub fn set_data(&self, data: impl Into<Vec<u8>>) -> usize {
        let data: Vec<u8> = data.into();
        let data: Arc<[u8]> = Arc::from(data);

        let _notify = self.notify.lock();
        *self.data.write() = data.clone();

        let listeners = self.listeners.lock().clone();
        let mut failed = 0;
        for listener in &listeners {
            if let Err(e) = listener.update(&data) {
                failed += 1;
                tracing::debug!(provider = %self.tag, error = %e, "listener rejected provider data");
            }
        }

        tracing::debug!(
            provider = %self.tag,
            bytes = data.len(),
            listeners = listeners.len(),
            failed,
            "provider data updated"
        );
        failed
    }

    /// Re-read the backing file and notify listeners.
    ///
    /// In-memory providers have nothing to reload and return `Ok(0)`.
    pub fn reload(&self) -> Result<usize> {
        let Some(path) = self.path.as_ref() else {
            return Ok(0);
        };
        let modified = fs::metadata(path)?.modified().ok();
        let data = fs::read(path)?;
        *self.modified.lock() = modified;
        Ok(self.set_data(data))
    }

    /// Reload only if the backing file's modification time changed.
    /// Returns whether a reload happened.
    pub fn reload_if_modified(&self) -> Result<bool> {
        let Some(path) = self.path.as_ref() else {
            return Ok(false);
        };
        let modified = fs::metadata(path)?.modified().ok();
        if modified.is_some() && modified == *self.modified.lock() {
            return Ok(false);
        }
        self.reload()?;
        Ok(true)
    }
}

impl fmt::Debug for DataProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataProvider")
            .field("tag", &self.tag)
            .field("path", &self.path)
            .field("bytes", &self.data.read().len())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
