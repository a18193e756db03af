use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Invalid context spec: {0}")]
    InvalidSpec(String),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ContextError>;
