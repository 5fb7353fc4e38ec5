//! Render nodes - the values components produce.
//!
//! A render pass turns the component tree into a tree of [`Node`]s. The host
//! compares it to the previous frame and hands it to the terminal renderer.
//! `Node::Empty` is "render nothing".

use crate::types::Attr;

/// A renderable value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Node {
    /// Renders nothing.
    #[default]
    Empty,
    /// A run of text.
    Text { content: String, attrs: Attr },
    /// A tagged container. Children are rendered one nesting level deeper.
    Element {
        tag: String,
        attrs: Attr,
        children: Vec<Node>,
    },
    /// Children rendered in place, without a container of their own.
    Fragment(Vec<Node>),
}

/// Plain text node.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text {
        content: content.into(),
        attrs: Attr::NONE,
    }
}

/// Element node with the given tag and children.
pub fn element(tag: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Node {
    Node::Element {
        tag: tag.into(),
        attrs: Attr::NONE,
        children: children.into_iter().collect(),
    }
}

/// Fragment of sibling nodes.
pub fn fragment(children: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(children.into_iter().collect())
}

impl Node {
    /// Return this node with `attrs` added. No effect on `Empty` and `Fragment`.
    pub fn styled(mut self, extra: Attr) -> Self {
        match &mut self {
            Node::Text { attrs, .. } | Node::Element { attrs, .. } => *attrs |= extra,
            Node::Empty | Node::Fragment(_) => {}
        }
        self
    }

    /// True when the node renders nothing at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Empty => true,
            Node::Fragment(children) => children.iter().all(Node::is_empty),
            Node::Text { .. } | Node::Element { .. } => false,
        }
    }

    /// All visible text, concatenated in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Empty => {}
            Node::Text { content, .. } => out.push_str(content),
            Node::Element { children, .. } | Node::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Flatten into visible lines: one per text node, with nesting depth and
    /// the attributes inherited from enclosing elements.
    pub fn lines(&self) -> Vec<Line<'_>> {
        let mut out = Vec::new();
        self.collect_lines(0, Attr::NONE, &mut out);
        out
    }

    fn collect_lines<'a>(&'a self, depth: usize, inherited: Attr, out: &mut Vec<Line<'a>>) {
        match self {
            Node::Empty => {}
            Node::Text { content, attrs } => out.push(Line {
                depth,
                attrs: inherited | *attrs,
                content,
            }),
            Node::Element {
                attrs, children, ..
            } => {
                for child in children {
                    child.collect_lines(depth + 1, inherited | *attrs, out);
                }
            }
            Node::Fragment(children) => {
                for child in children {
                    child.collect_lines(depth, inherited, out);
                }
            }
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        text(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        text(value)
    }
}

/// One visible line of a flattened node tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub depth: usize,
    pub attrs: Attr,
    pub content: &'a str,
}
