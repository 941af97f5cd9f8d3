//! Set-once, non-owning references back up the ownership graph.

use std::{
    cell::OnceCell,
    fmt,
    rc::{Rc, Weak},
};

use tracing::trace;

use crate::error::{ViperError, ViperResult};

/// A back-reference that never keeps its target alive.
///
/// Empty until [`BackRef::attach`] is called once; read-only afterwards.
/// [`BackRef::get`] yields `None` both before attachment and after the
/// target has been dropped, which callers treat as "deliver nothing".
pub struct BackRef<T: ?Sized> {
    target: OnceCell<Weak<T>>,
    component: &'static str,
    link: &'static str,
}

impl<T: ?Sized> BackRef<T> {
    /// `component` and `link` name this reference in errors and traces,
    /// e.g. `("presenter", "view")`.
    pub fn new(component: &'static str, link: &'static str) -> Self {
        Self {
            target: OnceCell::new(),
            component,
            link,
        }
    }

    /// Attach the target. Fails if a target was already attached, even one
    /// that has since been released.
    pub fn attach(&self, target: Weak<T>) -> ViperResult<()> {
        self.target.set(target).map_err(|_| ViperError::AlreadyWired {
            component: self.component,
            link: self.link,
        })?;
        trace!(component = self.component, link = self.link, "back-reference attached");
        Ok(())
    }

    /// Upgrade to a temporary strong handle for the duration of one call.
    pub fn get(&self) -> Option<Rc<T>> {
        let live = self.target.get().and_then(Weak::upgrade);
        if live.is_none() {
            trace!(
                component = self.component,
                link = self.link,
                "back-reference absent or released"
            );
        }
        live
    }

    /// `true` once a target has been attached, regardless of liveness.
    pub fn is_attached(&self) -> bool {
        self.target.get().is_some()
    }

    /// Check that the reference is live and points at `expected`.
    pub fn verify<U: ?Sized>(&self, expected: &Rc<U>) -> ViperResult<()> {
        let live = self.get().ok_or(ViperError::Unwired {
            component: self.component,
            link: self.link,
        })?;
        if std::ptr::addr_eq(Rc::as_ptr(&live), Rc::as_ptr(expected)) {
            Ok(())
        } else {
            Err(ViperError::MisWired {
                component: self.component,
                link: self.link,
            })
        }
    }
}

impl<T: ?Sized> fmt::Debug for BackRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.target.get() {
            None => "unset",
            Some(weak) if weak.strong_count() > 0 => "live",
            Some(_) => "released",
        };
        f.debug_struct("BackRef")
            .field("component", &self.component)
            .field("link", &self.link)
            .field("state", &state)
            .finish()
    }
}
