//! Core types for request-scoped namespace contexts

pub mod context;
pub mod error;
pub mod meta;

pub use context::{Context, ContextValue, RequestContext};
pub use error::{ContextError, Result};
pub use meta::{HasObjectMeta, NAMESPACE_ALL, NAMESPACE_DEFAULT, ObjectMeta};
