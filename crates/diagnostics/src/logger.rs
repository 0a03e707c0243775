use deviceinfo_core_types::{ConsoleLevel, LOG_PREFIX};

use crate::console::HostConsole;

/// Forwards diagnostics to a named console function.
///
/// Never fails loudly: a missing payload or an unknown level is reported through the return
/// value, and an unknown level additionally produces one `error` and one `debug` call so the
/// original message is not lost.
pub struct DiagnosticLogger<'a, C>
where
    C: HostConsole + ?Sized,
{
    console: &'a C,
}

impl<'a, C> Clone for DiagnosticLogger<'a, C>
where
    C: HostConsole + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C> Copy for DiagnosticLogger<'a, C> where C: HostConsole + ?Sized {}

impl<'a, C> DiagnosticLogger<'a, C>
where
    C: HostConsole + ?Sized,
{
    pub fn new(console: &'a C) -> Self {
        Self { console }
    }

    pub fn console(&self) -> &'a C {
        self.console
    }

    /// Log `values` at `level`. Returns `true` only when the console accepted the call.
    pub fn log(&self, level: &str, values: &[&str]) -> bool {
        if values.is_empty() {
            return false;
        }

        let params = Self::prefixed(values);
        if self.console.supports(level) {
            self.console.emit(level, &params);
            return true;
        }

        self.console.emit(
            ConsoleLevel::Error.as_str(),
            &[format!("console.{level} is not a valid logging function.")],
        );
        self.console.emit(ConsoleLevel::Debug.as_str(), &params);
        false
    }

    pub fn warn(&self, message: &str) -> bool {
        self.log(ConsoleLevel::Warn.as_str(), &[message])
    }

    pub fn error(&self, message: &str) -> bool {
        self.log(ConsoleLevel::Error.as_str(), &[message])
    }

    fn prefixed(values: &[&str]) -> Vec<String> {
        std::iter::once(LOG_PREFIX)
            .chain(values.iter().copied())
            .map(str::to_string)
            .collect()
    }
}
