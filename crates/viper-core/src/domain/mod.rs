//! Core domain layer for Viper.
//!
//! Pure data and formatting with no knowledge of the components that move
//! it around.
//!
//! - **No I/O**: nothing here prints, logs or navigates
//! - **Immutable entities**: `Entity` is constructed once and only read

pub mod entity;
pub mod greeting;

pub use entity::{DEFAULT_ENTITY_NAME, Entity};
pub use greeting::format_greeting;
