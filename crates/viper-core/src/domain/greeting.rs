//! User-facing welcome text.

/// Build the welcome message shown when a profile screen appears.
///
/// The name is inserted verbatim.
pub fn format_greeting(name: &str) -> String {
    format!("Hello, {name}, and welcome to your profile!")
}
