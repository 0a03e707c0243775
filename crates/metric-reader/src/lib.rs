pub mod environment;
pub mod errors;
pub mod reader;

pub use environment::{HostEnvironment, PropertyValue, SnapshotEnvironment};
pub use errors::SnapshotError;
pub use reader::MetricReader;
