use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json page template: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid yaml page template: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported page template format: {0}")]
    UnsupportedFormat(String),
    #[error("duplicate target id: {0}")]
    DuplicateTarget(String),
}
