//! Unified error handling for Viper Core.
//!
//! Message delivery between components never fails: a released or missing
//! back-reference turns the call into a no-op. The errors here only cover
//! wiring the module together and checking that wiring afterwards.

use thiserror::Error;

/// Root error type for Viper Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViperError {
    /// A set-once back-reference was attached a second time.
    #[error("{component} already has its {link} reference attached")]
    AlreadyWired {
        component: &'static str,
        link: &'static str,
    },

    /// A back-reference was never attached, or its target has been released.
    #[error("{component} has no live {link} reference")]
    Unwired {
        component: &'static str,
        link: &'static str,
    },

    /// A back-reference is live but points at a different instance than the
    /// one assembled with it.
    #[error("{component} has its {link} reference pointing at a foreign instance")]
    MisWired {
        component: &'static str,
        link: &'static str,
    },
}

impl ViperError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyWired { component, link } => vec![
                format!("{component}.{link} is set exactly once during assembly"),
                "Build a fresh module instead of re-attaching references".into(),
            ],
            Self::Unwired { component, link } => vec![
                format!("Attach {component}.{link} after all components are constructed"),
                "Keep the module root alive for as long as messages are dispatched".into(),
            ],
            Self::MisWired { component, link } => vec![
                format!("{component}.{link} must point at the instance built alongside it"),
                "This is likely a bug in module assembly".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyWired { .. } => ErrorCategory::Misuse,
            Self::Unwired { .. } | Self::MisWired { .. } => ErrorCategory::Wiring,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A back-reference is missing or points at the wrong instance.
    Wiring,
    /// The assembly API was used out of order.
    Misuse,
}

/// Convenient result type alias.
pub type ViperResult<T> = Result<T, ViperError>;
