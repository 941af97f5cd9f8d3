//! Display adapters.

mod console;
mod memory;

pub use console::ConsoleDisplay;
pub use memory::MemoryDisplay;
