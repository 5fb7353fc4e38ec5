//! Terminal renderer for node trees.
//!
//! Writes one line per visible text node. Element nesting becomes indentation
//! and [`Attr`](crate::types::Attr) flags become terminal attributes. All
//! commands are queued and flushed once per frame.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};

use crate::config::Config;
use crate::node::Node;

/// Renders node trees to a writer.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    config: Config,
    frames: u64,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer writing to `out`.
    pub fn new(out: W, config: Config) -> Self {
        Self {
            out,
            config,
            frames: 0,
        }
    }

    /// Write a full frame and flush.
    pub fn render(&mut self, node: &Node) -> io::Result<()> {
        for line in node.lines() {
            let indent = line.depth.saturating_sub(1) * self.config.indent;
            queue!(self.out, Print(" ".repeat(indent)))?;

            let styled = self.config.ansi && !line.attrs.is_empty();
            if styled {
                for attribute in line.attrs.terminal_attributes() {
                    queue!(self.out, SetAttribute(attribute))?;
                }
            }

            queue!(self.out, Print(line.content))?;

            if styled {
                queue!(self.out, SetAttribute(Attribute::Reset))?;
            }
            queue!(self.out, Print("\n"))?;
        }

        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }

    /// Frames written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

// =============================================================================
// Tests
// =============================================================================
