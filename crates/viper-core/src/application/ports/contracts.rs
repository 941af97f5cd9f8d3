//! Capability contracts between the four roles.
//!
//! Each trait is the narrow set of operations one component needs from
//! another. Components only ever hold one of these trait objects, never a
//! concrete neighbour type, so any implementation can be swapped in.
//!
//! ```text
//!  View ──Presenter──▶ Presenter ──Interactor──▶ Interactor
//!   ▲                    │  ▲                        │
//!   └───────View─────────┘  └─────────Output─────────┘
//!                        │
//!                        └──Router──▶ Router
//! ```

/// Turns a "show the screen for this name" request into navigation.
#[cfg_attr(test, mockall::automock)]
pub trait Router {
    fn present_screen(&self, name: &str);
}

/// Outward-facing surface that displays messages.
#[cfg_attr(test, mockall::automock)]
pub trait View {
    fn show(&self, message: &str);
}

/// Intents raised by the view.
#[cfg_attr(test, mockall::automock)]
pub trait Presenter {
    /// The screen appeared.
    fn arrive(&self);

    /// The user asked to move on.
    fn wants_to_continue(&self);
}

/// Domain operations driven by the presenter.
#[cfg_attr(test, mockall::automock)]
pub trait Interactor {
    fn arrived(&self);

    fn wants_to_continue(&self);
}

/// Boundary through which the interactor reports domain results.
#[cfg_attr(test, mockall::automock)]
pub trait Output {
    fn welcome(&self, name: &str);

    fn wants_to_show_screen(&self, name: &str);
}
