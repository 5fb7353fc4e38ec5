//! Core types for spark-flow.
//!
//! Text attributes carried by render nodes and mapped onto terminal
//! attributes by the renderer.

use crossterm::style::Attribute;

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

impl Attr {
    /// Terminal attributes for every flag that is set, in bit order.
    pub fn terminal_attributes(self) -> Vec<Attribute> {
        let mut out = Vec::new();
        for (flag, attribute) in [
            (Attr::BOLD, Attribute::Bold),
            (Attr::DIM, Attribute::Dim),
            (Attr::ITALIC, Attribute::Italic),
            (Attr::UNDERLINE, Attribute::Underlined),
            (Attr::BLINK, Attribute::SlowBlink),
            (Attr::INVERSE, Attribute::Reverse),
            (Attr::HIDDEN, Attribute::Hidden),
            (Attr::STRIKETHROUGH, Attribute::CrossedOut),
        ] {
            if self.contains(flag) {
                out.push(attribute);
            }
        }
        out
    }
}
