//! # spark-flow
//!
//! Control-flow primitives for terminal render trees.
//!
//! ## Architecture
//!
//! Components are functions of their current inputs that return a [`Node`]
//! tree. The host ([`pipeline::mount`]) runs the root component once per render
//! pass and commits changed frames to the terminal.
//!
//! Inside components, four primitives shape the tree:
//! ```text
//! each     → one node per item, in order (fallback when empty)
//! show     → content only when the guard is truthy
//! switch   → first Match whose guard is truthy
//! ErrorBoundary → fallback once a descendant fails, forever after
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Text attributes
//! - [`node`] - Render nodes and constructors
//! - [`primitives`] - `each`, `show`, `switch`/`Match`, `ErrorBoundary`
//! - [`pipeline`] - Mounting and render passes
//! - [`renderer`] - Terminal output
//! - [`config`] - Render configuration
//! - [`logging`] - `tracing` subscriber setup

pub mod config;
pub mod error;
pub mod logging;
pub mod node;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::Config;

pub use error::{MountError, RenderError};

pub use node::{element, fragment, text, Line, Node};

pub use primitives::{
    // Components
    Component, RenderResult,
    // Guards and content
    Condition, Content, Present, Truthy, present,
    // Control flow
    each, show, switch, Match,
    // Error containment
    BoundaryState, DiagnosticSink, ErrorBoundary, ErrorInfo, TracingSink,
};

pub use pipeline::{mount, mount_stdout, MountHandle};

pub use renderer::TerminalRenderer;

pub use logging::init_logging;
