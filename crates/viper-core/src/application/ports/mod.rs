//! Application ports (traits).
//!
//! ## Port Types
//!
//! - **Contracts**: the capabilities the four components offer each other
//!   - `Router`, `View`, `Presenter`, `Interactor`, `Output`
//!
//! - **Driven (Output) Ports**: called by components, implemented by infrastructure
//!   - `NavigationSink`: navigation side effect consumed by the router
//!   - `DisplaySink`: display side effect consumed by the view

pub mod contracts;
pub mod output;

pub use contracts::{Interactor, Output, Presenter, Router, View};
pub use output::{DisplaySink, NavigationSink};

#[cfg(test)]
pub use contracts::{MockInteractor, MockOutput, MockPresenter, MockRouter, MockView};
