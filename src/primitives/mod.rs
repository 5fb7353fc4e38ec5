//! Control flow primitives - Structural building blocks for render trees.
//!
//! This module provides:
//! - [`each`] - List rendering, one node per item
//! - [`show`] - Conditional rendering with guard narrowing
//! - [`switch`] / [`Match`] - Ordered multi-way branch, first match wins
//! - [`ErrorBoundary`] - Contains render failures and substitutes a fallback
//!
//! # Architecture
//!
//! Components are anything implementing [`Component`], which includes every
//! `FnMut() -> RenderResult` closure. The host calls the root component once per
//! render pass; the primitives are plain functions called from inside
//! components, so their output is recomputed on every pass.
//!
//! # Value or Producer
//!
//! [`show`] accepts either a literal node or a producer of the guard value:
//!
//! ```ignore
//! // Literal
//! show(logged_in, text("Welcome back"), None)?;
//!
//! // Producer - receives the inner value of the Option
//! show(name, Content::producer(|name: String| Ok(text(name))), None)?;
//!
//! // Any value, truthy or not, via a presence guard
//! show(present(user), Content::producer(|user: User| Ok(text(user.name))), None)?;
//! ```

mod types;
mod control_flow;
mod boundary;
mod panic_capture;

pub use types::*;
pub use control_flow::{each, show, switch, Match};
pub use boundary::{BoundaryState, DiagnosticSink, ErrorBoundary, ErrorInfo, TracingSink};
