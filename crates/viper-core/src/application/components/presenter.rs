//! Presenter - mediates between view intents and interactor results.

use std::rc::{Rc, Weak};

use tracing::debug;

use crate::{
    application::{
        components::BackRef,
        ports::{Interactor, Output, Presenter, Router, View},
    },
    domain::format_greeting,
    error::ViperResult,
};

/// Relays view intents to the interactor and turns the interactor's results
/// into display commands and navigation requests.
///
/// Owns the router and the interactor; the view is only referenced, since
/// the view owns the presenter.
pub struct ProfilePresenter {
    router: Box<dyn Router>,
    interactor: Rc<dyn Interactor>,
    view: BackRef<dyn View>,
}

impl ProfilePresenter {
    pub fn new(router: Box<dyn Router>, interactor: Rc<dyn Interactor>) -> Self {
        Self {
            router,
            interactor,
            view: BackRef::new("presenter", "view"),
        }
    }

    /// Attach the view. Non-owning; may only be done once.
    pub fn attach_view(&self, view: Weak<dyn View>) -> ViperResult<()> {
        self.view.attach(view)
    }

    /// The view, if attached and still alive.
    pub fn view(&self) -> Option<Rc<dyn View>> {
        self.view.get()
    }

    pub(crate) fn view_link(&self) -> &BackRef<dyn View> {
        &self.view
    }
}

impl Presenter for ProfilePresenter {
    fn arrive(&self) {
        self.interactor.arrived();
    }

    fn wants_to_continue(&self) {
        self.interactor.wants_to_continue();
    }
}

impl Output for ProfilePresenter {
    fn welcome(&self, name: &str) {
        if let Some(view) = self.view.get() {
            let message = format_greeting(name);
            debug!(%message, "showing welcome");
            view.show(&message);
        }
    }

    fn wants_to_show_screen(&self, name: &str) {
        debug!(name, "presenting screen");
        self.router.present_screen(name);
    }
}
