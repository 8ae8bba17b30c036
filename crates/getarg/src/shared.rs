//! A process-wide argument handle that can be re-parsed while readers hold it.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::store::ArgumentStore;

/// Shared, swappable [`ArgumentStore`].
///
/// Readers take a [`snapshot`](Self::snapshot) and keep a consistent view for
/// as long as they hold it. A re-parse builds the new store before taking the
/// write lock, so nobody ever observes a partially populated map.
#[derive(Debug, Default)]
pub struct SharedArgs {
    current: RwLock<Arc<ArgumentStore>>,
}

impl SharedArgs {
    pub fn new(store: ArgumentStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(store)),
        }
    }

    /// Parse `argv` (program name first) and publish the result, replacing
    /// whatever was there before. Nothing from the previous parse is kept.
    pub fn parse<I, S>(&self, argv: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.replace(ArgumentStore::parse(argv));
    }

    /// Publish a pre-built store. Returns the one it replaced.
    pub fn replace(&self, store: ArgumentStore) -> Arc<ArgumentStore> {
        let next = Arc::new(store);
        let prev = std::mem::replace(&mut *self.current.write(), next);
        tracing::debug!("published new argument store");
        prev
    }

    /// The currently published store.
    pub fn snapshot(&self) -> Arc<ArgumentStore> {
        Arc::clone(&self.current.read())
    }
}
