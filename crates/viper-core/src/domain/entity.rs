//! The profile entity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name used by the sample profile when nothing else is configured.
pub const DEFAULT_ENTITY_NAME: &str = "Taylor Swift";

/// Immutable data holder for the profile being greeted.
///
/// Owned exclusively by the interactor; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    name: String,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new(DEFAULT_ENTITY_NAME)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
