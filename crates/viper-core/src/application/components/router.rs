//! Router - navigation behind the `Router` contract.

use tracing::debug;

use crate::application::ports::{NavigationSink, Router};

/// Router that delegates to an injected navigation action.
pub struct CallbackRouter {
    navigation: Box<dyn NavigationSink>,
}

impl CallbackRouter {
    pub fn new(navigation: impl NavigationSink + 'static) -> Self {
        Self {
            navigation: Box::new(navigation),
        }
    }
}

impl Router for CallbackRouter {
    fn present_screen(&self, name: &str) {
        debug!(name, "navigating");
        self.navigation.navigate(name);
    }
}
