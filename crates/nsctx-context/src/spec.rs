use std::path::Path;

use serde::{Deserialize, Serialize};

use nsctx_core::{ContextError, RequestContext, Result};

use super::namespace::{new_context, with_namespace, with_namespace_default_if_none};

const MAX_NAMESPACE_LEN: usize = 63;

/// Declarative description of how a request context is seeded.
///
/// ```yaml
/// namespace: team-a
/// default_if_none: true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextSpec {
    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default = "default_if_none")]
    pub default_if_none: bool,
}

fn default_if_none() -> bool {
    true
}

impl Default for ContextSpec {
    fn default() -> Self {
        Self {
            namespace: None,
            default_if_none: default_if_none(),
        }
    }
}

impl ContextSpec {
    pub fn from_yaml(yaml_content: &str) -> Result<Self> {
        let spec: ContextSpec = serde_yaml::from_str(yaml_content)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn from_json(json_content: &str) -> Result<Self> {
        let spec: ContextSpec = serde_json::from_str(json_content)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let Some(namespace) = self.namespace.as_deref() else {
            return Ok(());
        };

        if namespace.len() > MAX_NAMESPACE_LEN {
            return Err(ContextError::InvalidSpec(format!(
                "Namespace '{}' is longer than {} bytes",
                namespace, MAX_NAMESPACE_LEN
            )));
        }
        if namespace
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ContextError::InvalidSpec(format!(
                "Namespace {:?} contains whitespace or control characters",
                namespace
            )));
        }
        Ok(())
    }

    /// Builds a fresh context from this spec. An empty `namespace` counts as
    /// unset.
    pub fn build(&self) -> RequestContext {
        let mut ctx = new_context();
        if let Some(namespace) = self.namespace.as_deref().filter(|ns| !ns.is_empty()) {
            ctx = with_namespace(&ctx, namespace);
        }
        if self.default_if_none {
            ctx = with_namespace_default_if_none(&ctx);
        }
        tracing::debug!(depth = ctx.depth(), "Built request context from spec");
        ctx
    }
}
