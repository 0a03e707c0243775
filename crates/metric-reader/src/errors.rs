use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid yaml snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported snapshot format: {0}")]
    UnsupportedFormat(String),
    #[error("snapshot root must be an object")]
    NotAnObject,
}
