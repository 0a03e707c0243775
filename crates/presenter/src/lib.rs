//! Writes formatted summaries into named slots of the host page.

pub mod content;
pub mod errors;
pub mod format;
pub mod page;
pub mod presenter;

pub use content::{Content, SlotStatus};
pub use errors::PageError;
pub use page::{HostPage, MemoryPage, PageTemplate, TargetSlot, TemplateTarget};
pub use presenter::Presenter;
