use std::any::Any;
use std::fmt;

use nsctx_core::{Context, HasObjectMeta, NAMESPACE_DEFAULT, ObjectMeta, RequestContext};

/// Keys owned by this module. The type is private, so no other crate can
/// build a key that matches one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContextKey {
    Namespace,
}

/// A fresh context with nothing attached.
pub fn new_context() -> RequestContext {
    RequestContext::background()
}

/// A fresh context bound to [`NAMESPACE_DEFAULT`].
pub fn new_default_context() -> RequestContext {
    with_namespace(&new_context(), NAMESPACE_DEFAULT)
}

/// Returns a child of `parent` in which `key` maps to `value`.
///
/// # Panics
///
/// Panics if `parent` is not a [`RequestContext`]. Only contexts built by
/// this crate can be extended; anything else is a caller bug.
pub fn with_value<K, V>(parent: &dyn Context, key: K, value: V) -> RequestContext
where
    K: Any + PartialEq + fmt::Debug + Send + Sync,
    V: Any + Send + Sync,
{
    request_context(parent).with_value(key, value)
}

pub fn with_namespace(parent: &dyn Context, namespace: impl Into<String>) -> RequestContext {
    let namespace = namespace.into();
    tracing::debug!(namespace = %namespace, "Binding namespace to context");
    with_value(parent, ContextKey::Namespace, namespace)
}

/// Returns the namespace bound to `ctx` and whether one was bound at all.
///
/// A missing binding and a binding of the wrong type both yield `("", false)`.
pub fn namespace_from(ctx: &dyn Context) -> (String, bool) {
    match ctx.value_as::<String>(&ContextKey::Namespace) {
        Some(namespace) => (namespace.clone(), true),
        None => (String::new(), false),
    }
}

/// The namespace bound to `ctx`, or the empty string if none.
///
/// An unbound namespace and an empty one look the same here; use
/// [`namespace_from`] when the difference matters.
pub fn namespace(ctx: &dyn Context) -> String {
    namespace_from(ctx).0
}

/// Checks `resource` against the namespace carried by `ctx`.
///
/// If the resource has no namespace it is set to the context's namespace
/// first. Returns false when the context has no namespace or the two differ.
pub fn valid_namespace(ctx: &dyn Context, resource: &mut ObjectMeta) -> bool {
    let (namespace, found) = namespace_from(ctx);
    if resource.namespace.is_empty() {
        tracing::debug!(
            context_namespace = %namespace,
            bound = found,
            "Filling empty resource namespace from context"
        );
        resource.namespace.clone_from(&namespace);
    }

    let valid = found && resource.namespace == namespace;
    if !valid {
        tracing::debug!(
            context_namespace = %namespace,
            resource_namespace = %resource.namespace,
            bound = found,
            "Resource namespace rejected"
        );
    }
    valid
}

pub fn valid_namespace_for<R>(ctx: &dyn Context, resource: &mut R) -> bool
where
    R: HasObjectMeta + ?Sized,
{
    valid_namespace(ctx, resource.object_meta_mut())
}

/// Binds [`NAMESPACE_DEFAULT`] unless `parent` already carries a non-empty
/// namespace, in which case `parent` itself is handed back.
///
/// # Panics
///
/// Panics if the default has to be bound and `parent` is not a
/// [`RequestContext`], as [`with_value`] does.
pub fn with_namespace_default_if_none<C>(parent: &C) -> C
where
    C: Context + Clone + 'static,
{
    let (namespace, found) = namespace_from(parent);
    if found && !namespace.is_empty() {
        return parent.clone();
    }

    tracing::debug!(
        previous = %namespace,
        bound = found,
        "Defaulting context namespace"
    );
    let defaulted: Box<dyn Any> = Box::new(with_namespace(parent, NAMESPACE_DEFAULT));
    match defaulted.downcast::<C>() {
        Ok(ctx) => *ctx,
        Err(_) => invalid_context(),
    }
}

fn request_context(parent: &dyn Context) -> &RequestContext {
    match parent.as_any().downcast_ref::<RequestContext>() {
        Some(ctx) => ctx,
        None => invalid_context(),
    }
}

fn invalid_context() -> ! {
    tracing::error!("Context was not created by new_context or one of its children");
    panic!("invalid context type");
}
