//! Concrete components, one per role.
//!
//! Ownership runs one way: view → presenter → {router, interactor}. The two
//! edges back (presenter → view, interactor → presenter as output) are
//! [`BackRef`]s and never extend a lifetime.

pub mod back_ref;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod view;

pub use back_ref::BackRef;
pub use interactor::ProfileInteractor;
pub use presenter::ProfilePresenter;
pub use router::CallbackRouter;
pub use view::ProfileView;
