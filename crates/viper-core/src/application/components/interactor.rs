//! Interactor - owns the entity and reports domain events.

use std::rc::{Rc, Weak};

use tracing::debug;

use crate::{
    application::{
        components::BackRef,
        ports::{Interactor, Output},
    },
    domain::Entity,
    error::ViperResult,
};

/// Holds the profile entity and decides what to report, without knowing
/// how the result is displayed or navigated.
#[derive(Debug)]
pub struct ProfileInteractor {
    entity: Entity,
    output: BackRef<dyn Output>,
}

impl ProfileInteractor {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            output: BackRef::new("interactor", "output"),
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Attach the output boundary. Non-owning; may only be done once.
    pub fn attach_output(&self, output: Weak<dyn Output>) -> ViperResult<()> {
        self.output.attach(output)
    }

    /// The output boundary, if attached and still alive.
    pub fn output(&self) -> Option<Rc<dyn Output>> {
        self.output.get()
    }

    pub(crate) fn output_link(&self) -> &BackRef<dyn Output> {
        &self.output
    }
}

impl Interactor for ProfileInteractor {
    fn arrived(&self) {
        if let Some(output) = self.output.get() {
            debug!(name = self.entity.name(), "reporting welcome");
            output.welcome(self.entity.name());
        }
    }

    fn wants_to_continue(&self) {
        if let Some(output) = self.output.get() {
            debug!(name = self.entity.name(), "reporting screen request");
            output.wants_to_show_screen(self.entity.name());
        }
    }
}
