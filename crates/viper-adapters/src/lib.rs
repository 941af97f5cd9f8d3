//! Infrastructure adapters for Viper.
//!
//! This crate implements the driven ports defined in
//! `viper-core::application::ports`. It contains all I/O.

mod console;
pub mod display;
pub mod format;
pub mod navigation;

// Re-export commonly used adapters
pub use display::{ConsoleDisplay, MemoryDisplay};
pub use format::LineFormat;
pub use navigation::{ConsoleNavigator, MemoryNavigator};
