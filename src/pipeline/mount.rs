//! Mount API - Application lifecycle and render passes.
//!
//! This module provides the entry point for mounting an application. The
//! returned [`MountHandle`] owns the root component and runs render passes on
//! demand.
//!
//! # Example
//!
//! ```ignore
//! use spark_flow::pipeline::mount;
//!
//! // Mount the application
//! let mut handle = mount::mount(app, std::io::stdout(), Config::from_env());
//!
//! // Render whenever your data changes
//! handle.render()?;
//!
//! // Clean up
//! let stdout = handle.unmount();
//! ```
//!
//! # Render Pass
//!
//! 1. Call the root component
//! 2. Compare the node tree with the previous frame
//! 3. Commit to the terminal only if it changed

use std::io::{self, Stdout, Write};

use tracing::debug;

use crate::config::Config;
use crate::error::MountError;
use crate::node::Node;
use crate::primitives::Component;
use crate::renderer::TerminalRenderer;

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`].
///
/// Holds:
/// - The root component (and with it every boundary's state)
/// - The terminal renderer
/// - The last committed frame, for change detection
pub struct MountHandle<C, W: Write> {
    root: C,
    renderer: TerminalRenderer<W>,
    previous: Option<Node>,
    passes: u64,
}

impl<C: Component, W: Write> MountHandle<C, W> {
    /// Run one render pass.
    ///
    /// Returns `Ok(true)` when the frame changed and was written, `Ok(false)`
    /// when it matched the previous frame. A failure outside any error
    /// boundary is returned as [`MountError::Render`] and nothing is written.
    pub fn render(&mut self) -> Result<bool, MountError> {
        self.passes += 1;
        let pass = self.passes;

        let frame = self.root.render()?;

        if self.previous.as_ref() == Some(&frame) {
            debug!(pass, "frame unchanged, skipping commit");
            return Ok(false);
        }

        self.renderer.render(&frame)?;
        debug!(pass, lines = frame.lines().len(), "frame committed");
        self.previous = Some(frame);
        Ok(true)
    }

    /// Force the next pass to commit even if the frame is unchanged.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Number of render passes run, including failed ones.
    pub fn render_pass_count(&self) -> u64 {
        self.passes
    }

    /// The last frame written to the terminal.
    pub fn last_frame(&self) -> Option<&Node> {
        self.previous.as_ref()
    }

    pub fn root(&self) -> &C {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut C {
        &mut self.root
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    /// Drop the component tree and return the writer.
    pub fn unmount(self) -> W {
        debug!(passes = self.passes, "unmounted");
        self.renderer.into_inner()
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount `root`, writing frames to `out`.
///
/// Nothing is rendered until the first [`MountHandle::render`].
pub fn mount<C: Component, W: Write>(root: C, out: W, config: Config) -> MountHandle<C, W> {
    debug!(?config, "mounted");
    MountHandle {
        root,
        renderer: TerminalRenderer::new(out, config),
        previous: None,
        passes: 0,
    }
}

/// Mount `root` on stdout with configuration from the environment.
pub fn mount_stdout<C: Component>(root: C) -> MountHandle<C, Stdout> {
    mount(root, io::stdout(), Config::from_env())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::node::text;
    use crate::primitives::RenderResult;
    use std::cell::Cell;
    use std::rc::Rc;

    fn plain() -> Config {
        Config {
            ansi: false,
            indent: 2,
        }
    }

    #[test]
    fn test_mount_does_not_render_until_asked() {
        let handle = mount(|| -> RenderResult { Ok(text("hi")) }, Vec::new(), plain());
        assert_eq!(handle.render_pass_count(), 0);
        assert!(handle.last_frame().is_none());
        assert!(handle.unmount().is_empty());
    }

    #[test]
    fn test_render_commits_changed_frames_only() {
        let counter = Rc::new(Cell::new(0));
        let counter_clone = counter.clone();

        let mut handle = mount(
            move || -> RenderResult { Ok(text(format!("count {}", counter_clone.get()))) },
            Vec::new(),
            plain(),
        );

        assert!(handle.render().unwrap(), "first frame is always committed");
        assert!(!handle.render().unwrap(), "unchanged frame is skipped");

        counter.set(1);
        assert!(handle.render().unwrap());

        assert_eq!(handle.render_pass_count(), 3);
        assert_eq!(handle.renderer().frames(), 2);
        assert_eq!(
            String::from_utf8(handle.unmount()).unwrap(),
            "count 0\ncount 1\n"
        );
    }

    #[test]
    fn test_invalidate_forces_commit() {
        let mut handle = mount(|| -> RenderResult { Ok(text("same")) }, Vec::new(), plain());
        handle.render().unwrap();
        handle.invalidate();
        assert!(handle.render().unwrap());
        assert_eq!(handle.renderer().frames(), 2);
    }

    #[test]
    fn test_unbounded_failure_reaches_caller() {
        let mut handle = mount(
            || -> RenderResult { Err(RenderError::failed("Root", "no boundary")) },
            Vec::new(),
            plain(),
        );

        let err = handle.render().unwrap_err();
        assert!(
            matches!(err, MountError::Render(RenderError::Failed { .. })),
            "failure outside a boundary propagates to the host"
        );
        assert!(handle.last_frame().is_none());
        assert!(handle.unmount().is_empty(), "nothing is written for a failed pass");
    }
}
