//! In-memory display adapter for testing.

use std::sync::{Arc, PoisonError, RwLock};

use viper_core::application::ports::DisplaySink;

/// Records every rendered message. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    inner: Arc<RwLock<Vec<String>>>,
}

impl MemoryDisplay {
    /// Create a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages rendered so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all recorded messages.
    pub fn clear(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DisplaySink for MemoryDisplay {
    fn render(&self, message: &str) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_messages() {
        let display = MemoryDisplay::new();
        let handle = display.clone();

        display.render("one");
        display.render("two");

        assert_eq!(handle.messages(), vec!["one", "two"]);
        assert_eq!(handle.len(), 2);
    }

    #[test]
    fn clear_empties_the_record() {
        let display = MemoryDisplay::new();
        display.render("one");
        display.clear();
        assert!(display.is_empty());
    }
}
