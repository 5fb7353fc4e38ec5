//! Primitive types - Components, guards and content.
//!
//! These types define the interface shared by the control flow primitives.
//! Guards decide *whether* something renders; content decides *what*.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::RenderError;
use crate::node::Node;

// =============================================================================
// Render Result
// =============================================================================

/// Outcome of rendering one component.
pub type RenderResult = Result<Node, RenderError>;

// =============================================================================
// Component
// =============================================================================

/// A renderable unit, invoked by the host once per render pass.
///
/// Any `FnMut() -> RenderResult` closure is a component, so most components
/// are just closures over their inputs:
///
/// ```ignore
/// let items = vec![1, 2, 3];
/// let list = move || each(Some(&items), Some(|n: &i32, _| Ok(text(n.to_string()))), None);
/// ```
pub trait Component {
    /// Produce this pass's output.
    fn render(&mut self) -> RenderResult;
}

impl<F> Component for F
where
    F: FnMut() -> RenderResult,
{
    fn render(&mut self) -> RenderResult {
        self()
    }
}

// =============================================================================
// Truthiness
// =============================================================================

/// Whether a value counts as "present" for conditional rendering.
///
/// `false`, zero, `NaN`, empty strings and `None` are falsy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_float {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0.0 && !self.is_nan()
            }
        })*
    };
}

impl_truthy_float!(f32, f64);

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

// Collections and owning pointers are objects: always truthy, even when empty.

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T, const N: usize> Truthy for [T; N] {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: ?Sized> Truthy for Box<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: ?Sized> Truthy for Rc<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: ?Sized> Truthy for Arc<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

// =============================================================================
// Present - presence guard for any value
// =============================================================================

/// Guard that is truthy whenever the option is `Some`, whatever `T` is.
///
/// Use it for values with no truthiness of their own, such as a struct:
///
/// ```ignore
/// show(present(user), Content::producer(|user: User| Ok(text(user.name))), None)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Present<T>(pub Option<T>);

/// Wrap an option as a [`Present`] guard.
pub fn present<T>(value: Option<T>) -> Present<T> {
    Present(value)
}

impl<T> Truthy for Present<T> {
    fn is_truthy(&self) -> bool {
        self.0.is_some()
    }
}

// =============================================================================
// Condition - guard with narrowing
// =============================================================================

/// A guard for [`show`](super::show).
///
/// `narrow` yields the value handed to a producer when the guard is truthy.
/// For `Option<T>` that is the inner `T`, so producers receive the non-null
/// value directly; every other guard hands over itself.
pub trait Condition {
    type Value;

    fn narrow(self) -> Option<Self::Value>;
}

impl<T: Truthy> Condition for Option<T> {
    type Value = T;

    fn narrow(self) -> Option<T> {
        self.filter(Truthy::is_truthy)
    }
}

impl<'a, T: Truthy + ?Sized> Condition for &'a T {
    type Value = &'a T;

    fn narrow(self) -> Option<&'a T> {
        self.is_truthy().then_some(self)
    }
}

macro_rules! impl_condition_self {
    ($($t:ty),*) => {
        $(impl Condition for $t {
            type Value = $t;

            fn narrow(self) -> Option<$t> {
                self.is_truthy().then_some(self)
            }
        })*
    };
}

impl_condition_self!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String
);

impl<T> Condition for Present<T> {
    type Value = T;

    fn narrow(self) -> Option<T> {
        self.0
    }
}

impl<T> Condition for Vec<T> {
    type Value = Vec<T>;

    fn narrow(self) -> Option<Vec<T>> {
        Some(self)
    }
}

impl<T: ?Sized> Condition for Box<T> {
    type Value = Box<T>;

    fn narrow(self) -> Option<Box<T>> {
        Some(self)
    }
}

impl<T: ?Sized> Condition for Rc<T> {
    type Value = Rc<T>;

    fn narrow(self) -> Option<Rc<T>> {
        Some(self)
    }
}

// =============================================================================
// Content - literal node or producer
// =============================================================================

/// What [`show`](super::show) renders when its guard is truthy.
pub enum Content<'a, V> {
    /// Already-built output.
    Node(Node),
    /// Built on demand from the narrowed guard value.
    Producer(Box<dyn FnOnce(V) -> RenderResult + 'a>),
}

impl<'a, V> Content<'a, V> {
    /// Literal content.
    pub fn node(node: impl Into<Node>) -> Self {
        Content::Node(node.into())
    }

    /// Content produced from the guard value. Only called when the guard is truthy.
    pub fn producer(f: impl FnOnce(V) -> RenderResult + 'a) -> Self {
        Content::Producer(Box::new(f))
    }

    /// Resolve against a truthy guard value.
    pub(crate) fn resolve(self, value: V) -> RenderResult {
        match self {
            Content::Node(node) => Ok(node),
            Content::Producer(f) => f(value),
        }
    }
}

impl<V> From<Node> for Content<'_, V> {
    fn from(node: Node) -> Self {
        Content::Node(node)
    }
}

impl<V> std::fmt::Debug for Content<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Content::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Content::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}
