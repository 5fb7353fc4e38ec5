//! Error types.

use std::any::Any;
use std::io;

use thiserror::Error;

/// A descendant render failure.
///
/// Returned by components through [`RenderResult`](crate::RenderResult) and
/// recovered by the nearest [`ErrorBoundary`](crate::ErrorBoundary).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A component reported a failure.
    #[error("{component} failed to render: {message}")]
    Failed { component: String, message: String },
    /// A component panicked while rendering.
    #[error("render panicked: {message}")]
    Panicked { message: String },
}

impl RenderError {
    /// Shorthand for [`RenderError::Failed`].
    pub fn failed(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Build from a payload caught with `catch_unwind`.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self::Panicked { message }
    }
}

/// Errors from the host render loop.
#[derive(Debug, Error)]
pub enum MountError {
    /// The root component failed outside any error boundary.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// Writing to the terminal failed.
    #[error("terminal output failed: {0}")]
    Io(#[from] io::Error),
}
