//! Control Flow Primitives - Conditional, list and branch rendering.
//!
//! This module provides control flow primitives for render trees:
//! - [`each`] - One node per item of a sequence, in order
//! - [`show`] - Conditional rendering, optionally from the guard value
//! - [`switch`] / [`Match`] - First-match-wins multi-way branch
//!
//! # Pattern: Recompute Every Pass
//!
//! None of these primitives hold state. Each call is a pure function of its
//! inputs and runs again on every render pass, so the output always reflects
//! the current data.
//!
//! # Pattern: Errors Pass Through
//!
//! Render functions return [`RenderResult`]. A failure inside a render function
//! aborts the primitive and travels upward unchanged with `?` until an
//! [`ErrorBoundary`](super::ErrorBoundary) recovers it.
//!
//! # Fallbacks
//!
//! Every primitive takes an optional fallback. When the "nothing to render"
//! path is taken, the fallback is returned, or [`Node::Empty`] without one.

use tracing::trace;

use crate::node::Node;
use crate::primitives::{Condition, Content, RenderResult, Truthy};

// =============================================================================
// each() - List rendering
// =============================================================================

/// Render one node per item.
///
/// # Arguments
///
/// * `items` - The sequence (anything viewable as a slice), or `None` when absent
/// * `render_fn` - Called with `(item, index)` for every item, in order
/// * `fallback` - Rendered when there are no items or no render function
///
/// # Returns
///
/// A [`Node::Fragment`] holding the rendered items, the fallback, or
/// [`Node::Empty`]. An empty sequence is not an error.
///
/// # Example
///
/// ```ignore
/// use spark_flow::{each, element, text};
///
/// let list = [1, 2, 3];
/// let node = each(
///     Some(&list),
///     Some(|n: &i32, _index| Ok(element("div", [text(n.to_string())]))),
///     Some(text("No items")),
/// )?;
/// ```
///
/// # Without a fallback
///
/// ```ignore
/// let node = each(Some(&list), None::<fn(&i32, usize) -> RenderResult>, None)?;
/// assert!(node.is_empty());
/// ```
pub fn each<T, S, F>(items: Option<S>, render_fn: Option<F>, fallback: Option<Node>) -> RenderResult
where
    S: AsRef<[T]>,
    F: FnMut(&T, usize) -> RenderResult,
{
    let items: Option<&[T]> = items.as_ref().map(|s| AsRef::<[T]>::as_ref(s));
    match (items, render_fn) {
        (Some(items), Some(mut render_fn)) if !items.is_empty() => {
            let mut nodes = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                nodes.push(render_fn(item, index)?);
            }
            Ok(Node::Fragment(nodes))
        }
        _ => Ok(fallback.unwrap_or_default()),
    }
}

// =============================================================================
// show() - Conditional rendering
// =============================================================================

/// Conditionally render content.
///
/// # Arguments
///
/// * `when` - The guard. Narrowed through [`Condition`]
/// * `children` - A literal node, or a producer receiving the narrowed guard value
/// * `fallback` - Rendered when the guard is falsy
///
/// The producer is never called for a falsy guard.
///
/// # Example
///
/// ```ignore
/// use spark_flow::{show, text, Content};
///
/// let first: Option<i32> = list.first().copied();
///
/// // Producer gets the inner i32, not the Option
/// let node = show(
///     first,
///     Content::producer(|n: i32| Ok(text(n.to_string()))),
///     Some(text("empty list")),
/// )?;
///
/// // Literal content
/// let node = show(is_ready, text("Ready!"), None)?;
/// ```
pub fn show<'a, C>(
    when: C,
    children: impl Into<Content<'a, C::Value>>,
    fallback: Option<Node>,
) -> RenderResult
where
    C: Condition,
{
    match when.narrow() {
        Some(value) => children.into().resolve(value),
        None => Ok(fallback.unwrap_or_default()),
    }
}

// =============================================================================
// switch() / Match - Multi-way branch
// =============================================================================

enum Guard<'a> {
    Ready(bool),
    Deferred(Box<dyn FnOnce() -> bool + 'a>),
}

/// One branch of a [`switch`]: a guard and pre-built content.
pub struct Match<'a> {
    guard: Guard<'a>,
    content: Node,
}

impl<'a> Match<'a> {
    /// Branch selected when `when` is truthy.
    pub fn new(when: impl Truthy, content: impl Into<Node>) -> Self {
        Self {
            guard: Guard::Ready(when.is_truthy()),
            content: content.into(),
        }
    }

    /// Branch whose guard is only evaluated if every earlier branch missed.
    pub fn when_with(when: impl FnOnce() -> bool + 'a, content: impl Into<Node>) -> Self {
        Self {
            guard: Guard::Deferred(Box::new(when)),
            content: content.into(),
        }
    }

    fn select(self) -> Option<Node> {
        let matched = match self.guard {
            Guard::Ready(matched) => matched,
            Guard::Deferred(check) => check(),
        };
        matched.then_some(self.content)
    }
}

impl std::fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = match self.guard {
            Guard::Ready(matched) => matched.to_string(),
            Guard::Deferred(_) => "deferred".to_string(),
        };
        f.debug_struct("Match")
            .field("guard", &guard)
            .field("content", &self.content)
            .finish()
    }
}

/// Render the first branch whose guard is truthy.
///
/// Branches are checked in order and the scan stops at the first match, so
/// later deferred guards never run. Branch order is significant.
///
/// # Example
///
/// ```ignore
/// use spark_flow::{switch, Match, text};
///
/// let node = switch(
///     [
///         Match::new(status == "loading", text("Loading...")),
///         Match::new(status == "error", text("Something broke")),
///         Match::new(true, text("Done")),
///     ],
///     None,
/// );
/// ```
pub fn switch<'a>(branches: impl IntoIterator<Item = Match<'a>>, fallback: Option<Node>) -> Node {
    let selected = branches
        .into_iter()
        .enumerate()
        .find_map(|(index, branch)| branch.select().map(|node| (index, node)));

    match selected {
        Some((index, node)) => {
            trace!(branch = index, "switch matched");
            node
        }
        None => fallback.unwrap_or_default(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::node::{element, fragment, text};
    use crate::primitives::present;
    use std::cell::Cell;

    type NoRender = fn(&i32, usize) -> RenderResult;

    // =========================================================================
    // each() tests
    // =========================================================================

    #[test]
    fn test_each_renders_all_items_in_order() {
        let items = [10, 20, 30];

        let node = each(
            Some(&items),
            Some(|item: &i32, index| Ok(text(format!("{index}:{item}")))),
            None,
        )
        .unwrap();

        assert_eq!(
            node,
            fragment([text("0:10"), text("1:20"), text("2:30")]),
            "each should render one node per item, in input order"
        );
    }

    #[test]
    fn test_each_calls_render_once_per_item() {
        let items = ["a", "b", "c", "d"];
        let calls = Cell::new(0);

        let _ = each(
            Some(&items),
            Some(|_: &&str, _| {
                calls.set(calls.get() + 1);
                Ok(Node::Empty)
            }),
            None,
        );

        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_each_empty_list_renders_fallback() {
        let items: [i32; 0] = [];
        let calls = Cell::new(0);

        let node = each(
            Some(&items),
            Some(|_: &i32, _| {
                calls.set(calls.get() + 1);
                Ok(text("item"))
            }),
            Some(text("No items")),
        )
        .unwrap();

        assert_eq!(node, text("No items"));
        assert_eq!(calls.get(), 0, "render_fn must not run for an empty list");
    }

    #[test]
    fn test_each_absent_list_renders_nothing() {
        let node = each(
            None::<&[i32]>,
            Some(|_: &i32, _| Ok(text("item"))),
            None,
        )
        .unwrap();
        assert_eq!(node, Node::Empty);
    }

    #[test]
    fn test_each_without_render_fn_renders_fallback() {
        let items = [1, 2];
        let node = each(Some(&items), None::<NoRender>, Some(text("fallback"))).unwrap();
        assert_eq!(node, text("fallback"));
    }

    #[test]
    fn test_each_propagates_render_error() {
        let items = [1, 2, 3];
        let visited = Cell::new(0);

        let result = each(
            Some(&items),
            Some(|item: &i32, _| {
                visited.set(visited.get() + 1);
                if *item == 2 {
                    Err(RenderError::failed("Row", "bad row"))
                } else {
                    Ok(text(item.to_string()))
                }
            }),
            Some(text("fallback")),
        );

        assert_eq!(result, Err(RenderError::failed("Row", "bad row")));
        assert_eq!(visited.get(), 2, "iteration stops at the failing item");
    }

    // =========================================================================
    // show() tests
    // =========================================================================

    #[test]
    fn test_show_producer_receives_narrowed_value() {
        let list = [7, 8];

        let node = show(
            list.first().copied(),
            Content::producer(|n: i32| Ok(element("div", [text(n.to_string())]))),
            None,
        )
        .unwrap();

        assert_eq!(node, element("div", [text("7")]));
    }

    #[test]
    fn test_show_producer_receives_same_reference() {
        let value = String::from("exact");
        let seen: Cell<*const String> = Cell::new(std::ptr::null());

        let _ = show(
            &value,
            Content::producer(|v: &String| {
                seen.set(v as *const String);
                Ok(Node::Empty)
            }),
            None,
        );

        assert!(
            std::ptr::eq(seen.get(), &value),
            "the guard value is passed through untouched"
        );
    }

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        name: String,
    }

    #[test]
    fn test_show_struct_guard_with_present() {
        let user = Some(User {
            name: String::from("ada"),
        });

        let node = show(
            present(user),
            Content::producer(|user: User| Ok(text(user.name))),
            Some(text("signed out")),
        )
        .unwrap();
        assert_eq!(node, text("ada"));

        let node = show(
            present(None::<User>),
            Content::producer(|user: User| Ok(text(user.name))),
            Some(text("signed out")),
        )
        .unwrap();
        assert_eq!(node, text("signed out"));
    }

    #[test]
    fn test_show_vec_guard_is_truthy_even_when_empty() {
        let items: Vec<i32> = Vec::new();
        let node = show(
            &items,
            Content::producer(|items: &Vec<i32>| Ok(text(format!("{} items", items.len())))),
            Some(text("fallback")),
        )
        .unwrap();
        assert_eq!(node, text("0 items"));
    }

    #[test]
    fn test_show_literal_when_truthy() {
        let node = show(true, text("Visible!"), Some(text("Hidden"))).unwrap();
        assert_eq!(node, text("Visible!"));
    }

    #[test]
    fn test_show_falsy_renders_fallback_without_calling_producer() {
        let called = Cell::new(false);

        let node = show(
            None::<i32>,
            Content::producer(|_| {
                called.set(true);
                Ok(text("never"))
            }),
            Some(text("fallback")),
        )
        .unwrap();

        assert_eq!(node, text("fallback"));
        assert!(!called.get(), "producer must not run for a falsy guard");
    }

    #[test]
    fn test_show_falsy_without_fallback() {
        assert_eq!(show(0u32, text("x"), None).unwrap(), Node::Empty);
        assert_eq!(show(Some(0i32), text("x"), None).unwrap(), Node::Empty);
        assert_eq!(show(String::new(), text("x"), None).unwrap(), Node::Empty);
    }

    #[test]
    fn test_show_propagates_producer_error() {
        let result = show(
            1i32,
            Content::producer(|_| Err(RenderError::failed("Child", "nope"))),
            Some(text("fallback")),
        );
        assert_eq!(result, Err(RenderError::failed("Child", "nope")));
    }

    // =========================================================================
    // switch() tests
    // =========================================================================

    #[test]
    fn test_switch_first_match_wins() {
        let c_checked = Cell::new(false);

        let node = switch(
            [
                Match::new(false, text("A")),
                Match::new(true, text("B")),
                Match::when_with(
                    || {
                        c_checked.set(true);
                        true
                    },
                    text("C"),
                ),
            ],
            None,
        );

        assert_eq!(node, text("B"));
        assert!(!c_checked.get(), "branches after the match are not evaluated");
    }

    #[test]
    fn test_switch_deferred_guards_run_in_order() {
        let order = std::cell::RefCell::new(Vec::new());

        let node = switch(
            [
                Match::when_with(
                    || {
                        order.borrow_mut().push(0);
                        false
                    },
                    text("first"),
                ),
                Match::when_with(
                    || {
                        order.borrow_mut().push(1);
                        true
                    },
                    text("second"),
                ),
            ],
            None,
        );

        assert_eq!(node, text("second"));
        assert_eq!(*order.borrow(), vec![0, 1]);
    }

    #[test]
    fn test_switch_accepts_collection_and_struct_guards() {
        let list = vec![1];
        let user = User {
            name: String::from("ada"),
        };

        let node = switch(
            [
                Match::new(present(None::<&User>), text("A")),
                Match::new(&list, text("B")),
                Match::new(present(Some(&user)), text("C")),
            ],
            None,
        );
        assert_eq!(node, text("B"));
    }

    #[test]
    fn test_switch_no_match_renders_fallback() {
        let node = switch(
            [Match::new(0i32, text("A")), Match::new("", text("B"))],
            Some(text("F")),
        );
        assert_eq!(node, text("F"));
    }

    #[test]
    fn test_switch_no_match_no_fallback() {
        let node = switch([Match::new(None::<i32>, text("A"))], None);
        assert_eq!(node, Node::Empty);
    }

    #[test]
    fn test_switch_empty_branch_list() {
        let node = switch(Vec::<Match<'_>>::new(), Some(text("F")));
        assert_eq!(node, text("F"));
    }
}
