//! Module assembly - the one place that knows every concrete component.
//!
//! Wiring order is fixed:
//! 1. Construct the owning chain leaves first
//!    (entity → interactor → router → presenter → view)
//! 2. Close the back-references (presenter → view, interactor → output)
//!
//! After [`ProfileModule::assemble`] returns, the view is the only strong
//! root; dropping the module releases all components.

use std::{
    fmt,
    rc::{Rc, Weak},
};

use tracing::{info, instrument};

use crate::{
    application::{
        components::{CallbackRouter, ProfileInteractor, ProfilePresenter, ProfileView},
        ports::{DisplaySink, Interactor, NavigationSink, Output, Presenter, View},
    },
    domain::Entity,
    error::{ViperError, ViperResult},
};

/// A single user-driven event on the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The screen appeared.
    Arrive,
    /// The user asked to continue.
    Continue,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrive => write!(f, "arrive"),
            Self::Continue => write!(f, "continue"),
        }
    }
}

/// The wired profile module.
///
/// Owns the view (and through it everything else). Presenter and
/// interactor are kept only as weak inspection handles.
pub struct ProfileModule {
    view: Rc<ProfileView>,
    presenter: Weak<ProfilePresenter>,
    interactor: Weak<ProfileInteractor>,
}

impl ProfileModule {
    /// Build and wire all components around `entity`.
    #[instrument(skip_all, fields(entity = %entity))]
    pub fn assemble(
        entity: Entity,
        navigation: impl NavigationSink + 'static,
        display: impl DisplaySink + 'static,
    ) -> ViperResult<Self> {
        let interactor = Rc::new(ProfileInteractor::new(entity));
        let router = CallbackRouter::new(navigation);
        let presenter = Rc::new(ProfilePresenter::new(
            Box::new(router),
            Rc::clone(&interactor) as Rc<dyn Interactor>,
        ));
        let view = Rc::new(ProfileView::new(
            Rc::clone(&presenter) as Rc<dyn Presenter>,
            Box::new(display),
        ));

        presenter.attach_view(Rc::downgrade(&view) as Weak<dyn View>)?;
        interactor.attach_output(Rc::downgrade(&presenter) as Weak<dyn Output>)?;

        info!("profile module assembled");
        Ok(Self {
            presenter: Rc::downgrade(&presenter),
            interactor: Rc::downgrade(&interactor),
            view,
        })
    }

    pub fn view(&self) -> &Rc<ProfileView> {
        &self.view
    }

    pub fn presenter(&self) -> Option<Rc<ProfilePresenter>> {
        self.presenter.upgrade()
    }

    pub fn interactor(&self) -> Option<Rc<ProfileInteractor>> {
        self.interactor.upgrade()
    }

    /// Check that both back-references are live and point at the
    /// components assembled with them.
    pub fn verify_wiring(&self) -> ViperResult<()> {
        let presenter = self.presenter().ok_or(ViperError::Unwired {
            component: "view",
            link: "presenter",
        })?;
        presenter.view_link().verify(&self.view)?;

        let interactor = self.interactor().ok_or(ViperError::Unwired {
            component: "presenter",
            link: "interactor",
        })?;
        interactor.output_link().verify(&presenter)?;

        Ok(())
    }

    /// Arrival followed by continue.
    pub fn run_scenario(&self) {
        self.run_steps(&[Step::Arrive, Step::Continue]);
    }

    #[instrument(skip(self))]
    pub fn run_steps(&self, steps: &[Step]) {
        for step in steps {
            match step {
                Step::Arrive => self.view.trigger_arrival(),
                Step::Continue => self.view.trigger_continue(),
            }
        }
    }
}

impl fmt::Debug for ProfileModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileModule")
            .field("presenter_live", &(self.presenter.strong_count() > 0))
            .field("interactor_live", &(self.interactor.strong_count() > 0))
            .finish_non_exhaustive()
    }
}
