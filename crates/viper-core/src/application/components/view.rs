//! View - originates user events and displays messages.

use std::rc::Rc;

use tracing::debug;

use crate::application::ports::{DisplaySink, Presenter, View};

/// Outward-facing surface of the profile module.
///
/// Owns its presenter. Events arrive as direct method calls; display output
/// goes to the injected [`DisplaySink`].
pub struct ProfileView {
    presenter: Rc<dyn Presenter>,
    display: Box<dyn DisplaySink>,
}

impl ProfileView {
    pub fn new(presenter: Rc<dyn Presenter>, display: Box<dyn DisplaySink>) -> Self {
        Self { presenter, display }
    }

    /// The screen appeared.
    pub fn trigger_arrival(&self) {
        debug!("view event: arrival");
        self.presenter.arrive();
    }

    /// The user asked to continue.
    pub fn trigger_continue(&self) {
        debug!("view event: continue");
        self.presenter.wants_to_continue();
    }

    /// Alias for [`ProfileView::trigger_arrival`].
    pub fn come_on_screen(&self) {
        self.trigger_arrival();
    }

    /// Alias for [`ProfileView::trigger_continue`].
    pub fn proceed(&self) {
        self.trigger_continue();
    }
}

impl View for ProfileView {
    fn show(&self, message: &str) {
        self.display.render(message);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::application::ports::MockPresenter;

    #[test]
    fn arrival_triggers_presenter_arrive() {
        let mut presenter = MockPresenter::new();
        presenter.expect_arrive().times(1).return_const(());
        presenter.expect_wants_to_continue().never();

        let view = ProfileView::new(Rc::new(presenter), Box::new(|_: &str| {}));
        view.trigger_arrival();
    }

    #[test]
    fn continue_triggers_presenter_wants_to_continue() {
        let mut presenter = MockPresenter::new();
        presenter.expect_wants_to_continue().times(1).return_const(());
        presenter.expect_arrive().never();

        let view = ProfileView::new(Rc::new(presenter), Box::new(|_: &str| {}));
        view.trigger_continue();
    }

    #[test]
    fn aliases_trigger_the_same_events() {
        let mut presenter = MockPresenter::new();
        presenter.expect_arrive().times(1).return_const(());
        presenter.expect_wants_to_continue().times(1).return_const(());

        let view = ProfileView::new(Rc::new(presenter), Box::new(|_: &str| {}));
        view.come_on_screen();
        view.proceed();
    }

    #[test]
    fn show_hands_message_to_display_unchanged() {
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&shown);
        let view = ProfileView::new(
            Rc::new(MockPresenter::new()),
            Box::new(move |m: &str| sink.borrow_mut().push(m.to_owned())),
        );

        view.show("  exactly this  ");
        assert_eq!(*shown.borrow(), vec!["  exactly this  ".to_owned()]);
    }
}
