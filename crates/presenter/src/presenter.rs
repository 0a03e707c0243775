use deviceinfo_diagnostics::{DiagnosticLogger, HostConsole};
use tracing::debug;

use crate::content::Content;
use crate::page::HostPage;

/// Writes content into page slots; one independent write per call.
pub struct Presenter<'a, P, C>
where
    P: HostPage + ?Sized,
    C: HostConsole + ?Sized,
{
    page: &'a mut P,
    logger: DiagnosticLogger<'a, C>,
}

impl<'a, P, C> Presenter<'a, P, C>
where
    P: HostPage + ?Sized,
    C: HostConsole + ?Sized,
{
    pub fn new(page: &'a mut P, logger: DiagnosticLogger<'a, C>) -> Self {
        Self { page, logger }
    }

    /// Replace the value of `target_id` with `content`.
    ///
    /// Returns `false` and leaves the page untouched when no such slot exists.
    pub fn present(&mut self, target_id: &str, content: impl Into<Content>) -> bool {
        let content = content.into();
        match self.page.target_mut(target_id) {
            Some(slot) => {
                debug!(
                    target_id,
                    text = content.text(),
                    status = %content.status(),
                    "writing target"
                );
                slot.replace_value(content);
                true
            }
            None => {
                self.logger
                    .error(&format!("{target_id} is not a DOM element"));
                false
            }
        }
    }
}
