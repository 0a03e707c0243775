//! Diagnostic plumbing shared by the reader and the presenter.
//!
//! The host console is a port: DeviceInfo looks up a logging function by name and tolerates it
//! not existing. [`DiagnosticLogger`] implements that lookup; [`TracingConsole`] and
//! [`RecordingConsole`] are the two hosts shipped with the workspace.

pub mod console;
pub mod logger;

pub use console::{ConsoleEntry, HostConsole, RecordingConsole, TracingConsole};
pub use logger::DiagnosticLogger;
