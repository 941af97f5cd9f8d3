//! Application layer for Viper.
//!
//! This layer contains:
//! - **Ports**: capability contracts between components, plus the two
//!   driven sinks (navigation, display)
//! - **Components**: one concrete implementation per role
//! - **Assembly**: wiring the components into a [`ProfileModule`]
//!
//! Message delivery is synchronous and single-threaded; each call runs to
//! completion before the next begins.

pub mod assembly;
pub mod components;
pub mod ports;

pub use assembly::{ProfileModule, Step};

pub use components::{
    BackRef, CallbackRouter, ProfileInteractor, ProfilePresenter, ProfileView,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DisplaySink, Interactor, NavigationSink, Output, Presenter, Router, View};
