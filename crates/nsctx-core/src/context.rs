//! Immutable, request-scoped value chains.
//!
//! A [`RequestContext`] is a handle to a persistent list of frames. Each call
//! to [`RequestContext::with_value`] pushes a new frame in front of the
//! existing chain and returns a new handle; the original handle keeps seeing
//! exactly what it saw before. Chains are shared through `Arc`, so cloning a
//! context or extending it never copies earlier frames.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased value stored in a context frame.
pub type ContextValue = dyn Any + Send + Sync;

/// Read access to a chain of context values.
///
/// Implemented by [`RequestContext`]. Other implementations can be read from,
/// but only a `RequestContext` can be extended.
pub trait Context: Send + Sync {
    /// Looks up the value bound to `key`, nearest frame first.
    ///
    /// A key matches only if it has the same concrete type as the bound key
    /// and compares equal to it.
    fn value(&self, key: &dyn Any) -> Option<&ContextValue>;

    fn as_any(&self) -> &dyn Any;
}

impl dyn Context + '_ {
    /// Looks up `key` and downcasts the value. A value of another type is
    /// reported as absent.
    pub fn value_as<T: Any>(&self, key: &dyn Any) -> Option<&T> {
        self.value(key)?.downcast_ref::<T>()
    }
}

trait ErasedKey: fmt::Debug + Send + Sync {
    fn matches(&self, other: &dyn Any) -> bool;
}

impl<K> ErasedKey for K
where
    K: Any + PartialEq + fmt::Debug + Send + Sync,
{
    fn matches(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<K>().is_some_and(|k| k == self)
    }
}

struct Frame {
    key: Box<dyn ErasedKey>,
    value: Arc<ContextValue>,
    parent: Option<Arc<Frame>>,
}

#[derive(Clone, Default)]
pub struct RequestContext {
    head: Option<Arc<Frame>>,
}

impl RequestContext {
    /// An empty root context with no values attached.
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a child of `self` in which `key` maps to `value`.
    pub fn with_value<K, V>(&self, key: K, value: V) -> Self
    where
        K: Any + PartialEq + fmt::Debug + Send + Sync,
        V: Any + Send + Sync,
    {
        Self {
            head: Some(Arc::new(Frame {
                key: Box::new(key),
                value: Arc::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    pub fn value_as<T: Any>(&self, key: &dyn Any) -> Option<&T> {
        self.value(key)?.downcast_ref::<T>()
    }

    /// Number of frames between this handle and the root.
    pub fn depth(&self) -> usize {
        self.frames().count()
    }

    /// True if both handles point at the same chain.
    pub fn ptr_eq(&self, other: &RequestContext) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    fn frames(&self) -> impl Iterator<Item = &Frame> {
        std::iter::successors(self.head.as_deref(), |frame| frame.parent.as_deref())
    }
}

impl Context for RequestContext {
    fn value(&self, key: &dyn Any) -> Option<&ContextValue> {
        self.frames()
            .find(|frame| frame.key.matches(key))
            .map(|frame| frame.value.as_ref())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&dyn ErasedKey> = self.frames().map(|frame| frame.key.as_ref()).collect();
        f.debug_struct("RequestContext").field("keys", &keys).finish()
    }
}
