//! Request-scoped namespace contexts

pub mod context {
    pub use nsctx_context::{
        namespace, namespace_from, new_context, new_default_context, valid_namespace,
        valid_namespace_for, with_namespace, with_namespace_default_if_none, with_value,
    };
    pub use nsctx_core::{Context, ContextValue, RequestContext};
}

pub mod error {
    pub use nsctx_core::{ContextError, Result};
}

pub mod meta {
    pub use nsctx_core::{HasObjectMeta, NAMESPACE_ALL, NAMESPACE_DEFAULT, ObjectMeta};
}

pub mod spec {
    pub use nsctx_context::ContextSpec;
}

pub use context::{Context, RequestContext};
pub use error::{ContextError, Result};
pub use meta::{NAMESPACE_DEFAULT, ObjectMeta};
