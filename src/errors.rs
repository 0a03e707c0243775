//! Error handling module
//!
//! Errors only arise at the edges: loading configuration, snapshots and page templates, and
//! rendering output. The inspection run itself never fails; it reports per-target outcomes.

use deviceinfo_metric_reader::SnapshotError;
use deviceinfo_presenter::PageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceInfoError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("host snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
    #[error("page template: {0}")]
    Page(#[from] PageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failed: {0}")]
    Serialize(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl DeviceInfoError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl From<serde_json::Error> for DeviceInfoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

impl From<serde_yaml::Error> for DeviceInfoError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

pub type DeviceInfoResult<T> = Result<T, DeviceInfoError>;
