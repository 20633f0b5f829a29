//! Active-transfer registry.
//!
//! Every fetch registers its destination path before the first byte is
//! written and deregisters it on any terminal state. The cancellation path
//! walks the registry and deletes whatever is still in flight, so the set
//! must stay correct under concurrent mutation from all fetches at once.
//!
//! The registry is an explicit, cheap-to-clone handle shared by reference
//! counting; there is no process-global state.
//!
//! # Examples
//!
//! ```rust
//! use snag::registry::ActiveTransfers;
//! use std::path::Path;
//!
//! let registry = ActiveTransfers::new();
//! registry.register("/tmp/part.bin");
//! assert!(registry.contains(Path::new("/tmp/part.bin")));
//!
//! registry.deregister(Path::new("/tmp/part.bin"));
//! assert!(registry.is_empty());
//!
//! // Deregistering an unknown path is a no-op, not an error.
//! registry.deregister(Path::new("/tmp/never-registered"));
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

/// Shared set of destination paths currently being written.
#[derive(Debug, Clone, Default)]
pub struct ActiveTransfers {
    inner: Arc<Mutex<HashSet<PathBuf>>>,
}

impl ActiveTransfers {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<PathBuf>> {
        // A fetch task that panicked mid-write poisons the lock; the set
        // itself is still usable for cleanup.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Registers a destination path about to be written.
    pub fn register(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        debug!("Registering in-flight transfer {:?}", path);
        self.lock().insert(path);
    }

    /// Removes a path that reached a terminal state. Unknown paths are a
    /// no-op.
    pub fn deregister(&self, path: &Path) {
        self.lock().remove(path);
    }

    /// Whether the path is currently registered.
    pub fn contains(&self, path: &Path) -> bool {
        self.lock().contains(path)
    }

    /// Number of in-flight transfers.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no transfer is in flight.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Current registered paths, in no particular order.
    pub fn snapshot(&self) -> Vec<PathBuf> {
        self.lock().iter().cloned().collect()
    }

    /// Deletes every registered partial file, best effort, and clears the
    /// registry. Returns the paths that were actually deleted.
    ///
    /// Files already gone from disk and deletion errors are skipped
    /// silently; a purge racing a normal deregister must not turn into an
    /// error.
    pub fn purge(&self) -> Vec<PathBuf> {
        let paths: Vec<PathBuf> = {
            let mut guard = self.lock();
            guard.drain().collect()
        };

        let mut deleted = Vec::new();
        for path in paths {
            if path.exists() && std::fs::remove_file(&path).is_ok() {
                debug!("Deleted incomplete file {:?}", path);
                deleted.push(path);
            }
        }
        deleted
    }
}
