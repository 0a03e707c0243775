//! DeviceInfo library
//!
//! Exposes the application object and the CLI plumbing for integration testing.

pub mod app;
pub mod config;
pub mod errors;
pub mod output;
pub mod telemetry;

pub use app::{DeviceInfo, ExecutionReport, TargetOutcome};
pub use config::{load_configuration, DeviceInfoConfig};
pub use errors::{DeviceInfoError, DeviceInfoResult};

pub use deviceinfo_classifier as classifier;
pub use deviceinfo_core_types as core_types;
pub use deviceinfo_diagnostics as diagnostics;
pub use deviceinfo_metric_reader as metric_reader;
pub use deviceinfo_presenter as presenter;
