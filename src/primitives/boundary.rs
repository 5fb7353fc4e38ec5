//! Error Boundary - Contain render failures of a subtree.
//!
//! An [`ErrorBoundary`] renders its child component until the first failure,
//! then latches into [`BoundaryState::Failed`] and renders its fallback for the
//! rest of its life. A failure is either an `Err` returned by the child or a
//! panic during the child's render.
//!
//! # Lifecycle
//!
//! - Created `Normal`: each pass renders the child and passes its output through
//! - Child fails: one diagnostic record goes to the sink, state becomes `Failed`,
//!   fallback is rendered for that same pass
//! - `Failed`: every later pass renders the fallback; the child is never called
//!   again, even if it would now succeed
//!
//! There is no reset. Build a new boundary to try the child again.
//!
//! Panics caught by a boundary are not printed by the default panic hook;
//! their location is carried in [`ErrorInfo::location`] instead.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tracing::{error, trace};

use crate::error::RenderError;
use crate::node::Node;
use crate::primitives::panic_capture::CaptureGuard;
use crate::primitives::{Component, RenderResult};

// =============================================================================
// Diagnostics
// =============================================================================

/// Context reported alongside a caught failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Label of the boundary that caught the failure.
    pub boundary: String,
    /// The boundary's own render pass count at the time of failure (1-based).
    pub pass: u64,
    /// `file:line:column` of the panic, when the failure was a panic.
    pub location: Option<String>,
}

/// Receives `(error, info)` pairs from boundaries. Best effort, no return value.
pub trait DiagnosticSink {
    fn report(&self, error: &RenderError, info: &ErrorInfo);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&RenderError, &ErrorInfo),
{
    fn report(&self, error: &RenderError, info: &ErrorInfo) {
        self(error, info)
    }
}

/// Default sink: emits a `tracing` error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, err: &RenderError, info: &ErrorInfo) {
        error!(
            target: "spark_flow::boundary",
            boundary = %info.boundary,
            pass = info.pass,
            location = info.location.as_deref(),
            error = %err,
            "Uncaught render error"
        );
    }
}

// =============================================================================
// Error Boundary
// =============================================================================

/// Containment state of an [`ErrorBoundary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryState {
    /// Child output is passed through.
    #[default]
    Normal,
    /// A failure was caught. Terminal.
    Failed,
}

/// Wraps a child component and substitutes a fallback once it fails.
///
/// # Example
///
/// ```ignore
/// use spark_flow::{ErrorBoundary, RenderError, text};
///
/// let failing = || -> RenderResult { Err(RenderError::failed("Button", "error!")) };
/// let mut boundary = ErrorBoundary::new(failing)
///     .with_fallback(text("Something went wrong"));
///
/// // First pass catches the failure
/// assert_eq!(boundary.render_node(), text("Something went wrong"));
/// assert!(boundary.is_failed());
/// ```
pub struct ErrorBoundary<C> {
    children: C,
    fallback: Option<Node>,
    label: String,
    sink: Rc<dyn DiagnosticSink>,
    state: BoundaryState,
    passes: u64,
}

impl<C: Component> ErrorBoundary<C> {
    /// Boundary around `children`, reporting to [`TracingSink`], with no fallback.
    pub fn new(children: C) -> Self {
        Self {
            children,
            fallback: None,
            label: "ErrorBoundary".to_string(),
            sink: Rc::new(TracingSink),
            state: BoundaryState::Normal,
            passes: 0,
        }
    }

    /// Content rendered once the boundary has failed.
    pub fn with_fallback(mut self, fallback: impl Into<Node>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Name used in diagnostic records.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Rc::new(sink);
        self
    }

    /// Share an existing sink between several boundaries.
    pub fn with_shared_sink(mut self, sink: Rc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn children(&self) -> &C {
        &self.children
    }

    /// Mutable access to the child. Has no effect on a failed boundary's output.
    pub fn children_mut(&mut self) -> &mut C {
        &mut self.children
    }

    pub fn fallback(&self) -> Option<&Node> {
        self.fallback.as_ref()
    }

    pub fn set_fallback(&mut self, fallback: Option<Node>) {
        self.fallback = fallback;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> BoundaryState {
        self.state
    }

    pub fn is_failed(&self) -> bool {
        self.state == BoundaryState::Failed
    }

    /// Run one render pass. Never fails.
    pub fn render_node(&mut self) -> Node {
        self.passes += 1;

        if self.is_failed() {
            trace!(boundary = %self.label, "boundary failed, rendering fallback");
            return self.fallback_node();
        }

        let capture = CaptureGuard::enter();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.children.render()));
        let (err, location) = match outcome {
            Ok(Ok(node)) => return node,
            Ok(Err(err)) => (err, None),
            Err(payload) => (RenderError::from_panic(payload.as_ref()), capture.take_location()),
        };

        self.state = BoundaryState::Failed;

        let info = ErrorInfo {
            boundary: self.label.clone(),
            pass: self.passes,
            location,
        };
        // Reporting never changes what this pass renders.
        let sink = &self.sink;
        let _ = panic::catch_unwind(AssertUnwindSafe(|| sink.report(&err, &info)));

        self.fallback_node()
    }

    fn fallback_node(&self) -> Node {
        self.fallback.clone().unwrap_or_default()
    }
}

impl<C: Component> Component for ErrorBoundary<C> {
    fn render(&mut self) -> RenderResult {
        Ok(self.render_node())
    }
}

impl<C> fmt::Debug for ErrorBoundary<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBoundary")
            .field("label", &self.label)
            .field("state", &self.state)
            .field("fallback", &self.fallback)
            .field("passes", &self.passes)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
