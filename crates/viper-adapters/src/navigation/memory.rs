//! In-memory navigation adapter for testing.

use std::sync::{Arc, PoisonError, RwLock};

use viper_core::application::ports::NavigationSink;

/// Records every navigation request. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    inner: Arc<RwLock<Vec<String>>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destinations requested so far, oldest first.
    pub fn destinations(&self) -> Vec<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent destination.
    pub fn last(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NavigationSink for MemoryNavigator {
    fn navigate(&self, name: &str) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(name.to_owned());
    }
}
