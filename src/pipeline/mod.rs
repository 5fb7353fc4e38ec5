//! Render Pipeline
//!
//! This module connects the component tree to terminal output.
//!
//! # Pipeline Architecture
//!
//! ```text
//! Root Component → Node tree → change check → TerminalRenderer
//! ```
//!
//! ## Data Flow
//!
//! 1. **render pass** - The root component (and every primitive inside it) recomputes its output
//! 2. **change check** - The new tree is compared with the last committed frame
//! 3. **commit** - Changed frames are written and flushed in one go
//!
//! Passes are synchronous and single-threaded. Each pass either completes or
//! returns the first failure not caught by an error boundary.

pub mod mount;

pub use mount::{mount, mount_stdout, MountHandle};
