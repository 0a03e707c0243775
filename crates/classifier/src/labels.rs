use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum WindowState {
    Fullscreen,
    Maximized,
    Minimized,
    Restored,
}

impl WindowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowState::Fullscreen => "Fullscreen",
            WindowState::Maximized => "Maximized",
            WindowState::Minimized => "Minimized",
            WindowState::Restored => "Restored",
        }
    }
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ScreenRole {
    Primary,
    Secondary,
}

impl ScreenRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenRole::Primary => "Primary",
            ScreenRole::Secondary => "Secondary",
        }
    }
}

impl fmt::Display for ScreenRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HorizontalPosition {
    Left,
    Center,
    Right,
}

impl HorizontalPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalPosition::Left => "Left",
            HorizontalPosition::Center => "Center",
            HorizontalPosition::Right => "Right",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum VerticalPosition {
    Top,
    Center,
    Bottom,
}

impl VerticalPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalPosition::Top => "Top",
            VerticalPosition::Center => "Center",
            VerticalPosition::Bottom => "Bottom",
        }
    }
}

/// Position of the window on a single axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AxisPosition {
    Horizontal(HorizontalPosition),
    Vertical(VerticalPosition),
}

impl AxisPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisPosition::Horizontal(position) => position.as_str(),
            AxisPosition::Vertical(position) => position.as_str(),
        }
    }
}

impl fmt::Display for AxisPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the window sits relative to the available screen area.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub horizontal: HorizontalPosition,
    pub vertical: VerticalPosition,
}

impl ScreenPosition {
    /// `"Center"` when both axes agree, otherwise `"<horizontal> <vertical>"`.
    pub fn label(&self) -> String {
        merge_values(self.horizontal.as_str(), self.vertical.as_str(), " ")
    }
}

impl fmt::Display for ScreenPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Collapse two identical values into one, otherwise join them with `delimiter`.
pub fn merge_values(first: &str, second: &str, delimiter: &str) -> String {
    if first == second {
        first.to_string()
    } else {
        format!("{first}{delimiter}{second}")
    }
}
