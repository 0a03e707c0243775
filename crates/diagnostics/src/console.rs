use std::collections::BTreeSet;

use deviceinfo_core_types::ConsoleLevel;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Console exposed by the host: a set of logging functions addressed by name.
pub trait HostConsole {
    /// Whether a logging function called `level` exists.
    fn supports(&self, level: &str) -> bool;

    /// Invoke the `level` function with `params`.
    fn emit(&self, level: &str, params: &[String]);
}

impl<T> HostConsole for &T
where
    T: HostConsole + ?Sized,
{
    fn supports(&self, level: &str) -> bool {
        (**self).supports(level)
    }

    fn emit(&self, level: &str, params: &[String]) {
        (**self).emit(level, params)
    }
}

/// Forwards console calls into `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingConsole;

impl HostConsole for TracingConsole {
    fn supports(&self, level: &str) -> bool {
        ConsoleLevel::parse(level).is_some()
    }

    fn emit(&self, level: &str, params: &[String]) {
        let message = params.join(" ");
        match ConsoleLevel::parse(level) {
            Some(ConsoleLevel::Trace) => tracing::trace!(target: "deviceinfo::console", "{message}"),
            Some(ConsoleLevel::Debug) => tracing::debug!(target: "deviceinfo::console", "{message}"),
            Some(ConsoleLevel::Warn) => tracing::warn!(target: "deviceinfo::console", "{message}"),
            Some(ConsoleLevel::Error) => tracing::error!(target: "deviceinfo::console", "{message}"),
            Some(ConsoleLevel::Log) | Some(ConsoleLevel::Info) | None => {
                tracing::info!(target: "deviceinfo::console", "{message}")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleEntry {
    pub level: String,
    pub params: Vec<String>,
}

impl ConsoleEntry {
    pub fn message(&self) -> String {
        self.params.join(" ")
    }
}

/// In-memory console that keeps every call for later inspection.
#[derive(Debug)]
pub struct RecordingConsole {
    levels: BTreeSet<String>,
    entries: Mutex<Vec<ConsoleEntry>>,
}

impl RecordingConsole {
    /// Console offering `log`, `info`, `debug`, `warn`, `error` and `trace`.
    pub fn new() -> Self {
        Self::with_levels(
            [
                ConsoleLevel::Log,
                ConsoleLevel::Info,
                ConsoleLevel::Debug,
                ConsoleLevel::Warn,
                ConsoleLevel::Error,
                ConsoleLevel::Trace,
            ]
            .iter()
            .map(|level| level.as_str()),
        )
    }

    pub fn with_levels<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            levels: levels.into_iter().map(Into::into).collect(),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> Vec<ConsoleEntry> {
        self.entries.lock().clone()
    }

    pub fn count(&self, level: &str) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.level == level)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for RecordingConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl HostConsole for RecordingConsole {
    fn supports(&self, level: &str) -> bool {
        self.levels.contains(level)
    }

    fn emit(&self, level: &str, params: &[String]) {
        self.entries.lock().push(ConsoleEntry {
            level: level.to_string(),
            params: params.to_vec(),
        });
    }
}
