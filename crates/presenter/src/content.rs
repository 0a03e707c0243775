use std::fmt;

use deviceinfo_core_types::UNAVAILABLE;
use serde::{Deserialize, Serialize};

/// Visual marking of a written slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Success,
    Failure,
}

impl SlotStatus {
    /// CSS class the page styles the value with.
    pub fn css_class(&self) -> &'static str {
        match self {
            SlotStatus::Success => "text-success",
            SlotStatus::Failure => "text-danger",
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SlotStatus::Success => "success",
            SlotStatus::Failure => "failure",
        })
    }
}

/// Text destined for a slot, with whether it carries real data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    text: String,
    available: bool,
}

impl Content {
    pub fn new(text: impl Into<String>, available: bool) -> Self {
        Self {
            text: text.into(),
            available,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn status(&self) -> SlotStatus {
        if self.available {
            SlotStatus::Success
        } else {
            SlotStatus::Failure
        }
    }
}

/// Plain text is unavailable exactly when it is the sentinel itself.
impl From<String> for Content {
    fn from(text: String) -> Self {
        let available = text != UNAVAILABLE;
        Self { text, available }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::from(text.to_string())
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
