//! Driven (output) ports - implemented by infrastructure.
//!
//! These are the two side effects the module needs from the outside world.
//! The `viper-adapters` crate provides implementations; any `Fn(&str)`
//! closure qualifies as well.
//!
//! ## Design Notes
//!
//! - Single operation, synchronous, no return value
//! - Adapters that can fail internally absorb the failure themselves

/// Port for the navigation side effect behind the router.
///
/// Implemented by:
/// - `viper_adapters::navigation::ConsoleNavigator` (production)
/// - `viper_adapters::navigation::MemoryNavigator` (testing)
/// - any `Fn(&str)` closure
pub trait NavigationSink {
    /// Navigate to the screen named after `name`.
    fn navigate(&self, name: &str);
}

/// Port for rendering a message on the display.
///
/// Implemented by:
/// - `viper_adapters::display::ConsoleDisplay` (production)
/// - `viper_adapters::display::MemoryDisplay` (testing)
/// - any `Fn(&str)` closure
pub trait DisplaySink {
    /// Render `message` exactly as given.
    fn render(&self, message: &str);
}

impl<F> NavigationSink for F
where
    F: Fn(&str),
{
    fn navigate(&self, name: &str) {
        self(name)
    }
}

impl<F> DisplaySink for F
where
    F: Fn(&str),
{
    fn render(&self, message: &str) {
        self(message)
    }
}
