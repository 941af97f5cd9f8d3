//! Navigation adapters.

mod console;
mod memory;

pub use console::{ConsoleNavigator, NAVIGATION_PREFIX};
pub use memory::MemoryNavigator;
