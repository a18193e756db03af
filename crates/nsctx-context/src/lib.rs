//! Namespace accessors over request-scoped contexts

mod namespace;
mod spec;

pub use namespace::{
    namespace, namespace_from, new_context, new_default_context, valid_namespace,
    valid_namespace_for, with_namespace, with_namespace_default_if_none, with_value,
};
pub use spec::ContextSpec;
