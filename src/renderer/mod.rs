//! Terminal renderer.
//!
//! Turns a committed node tree into terminal output. The host only calls the
//! renderer when a frame differs from the previous one.

pub mod terminal;

pub use terminal::TerminalRenderer;
