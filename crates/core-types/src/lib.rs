//! Shared primitives for the DeviceInfo crates.
//!
//! Metrics, host property paths, page target identifiers and console levels live here so the
//! reader, classifier and presenter crates agree on them without depending on each other.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Text rendered for a metric the host could not provide.
pub const UNAVAILABLE: &str = "undefined";

/// Prefix prepended to every diagnostic forwarded to the host console.
pub const LOG_PREFIX: &str = "[DeviceInfo]";

/// A single host value captured at read time.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-full", serde(untagged))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Metric {
    Number(f64),
    Flag(bool),
    Unavailable,
}

impl Metric {
    pub fn is_available(&self) -> bool {
        !matches!(self, Metric::Unavailable)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Metric::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// True only for a flag that is set. Numbers follow host truthiness (non-zero).
    pub fn is_set(&self) -> bool {
        match self {
            Metric::Flag(flag) => *flag,
            Metric::Number(value) => *value != 0.0 && !value.is_nan(),
            Metric::Unavailable => false,
        }
    }

    /// Numeric equality; false whenever either side is not a number.
    pub fn same_number(&self, other: &Metric) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn equals(&self, value: f64) -> bool {
        self.as_number().map(|n| n == value).unwrap_or(false)
    }

    pub fn below(&self, value: f64) -> bool {
        self.as_number().map(|n| n < value).unwrap_or(false)
    }

    /// Strictly greater than `bound`; false whenever either side is not a number.
    pub fn exceeds(&self, bound: &Metric) -> bool {
        match (self.as_number(), bound.as_number()) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    }
}

impl From<f64> for Metric {
    fn from(value: f64) -> Self {
        Metric::Number(value)
    }
}

impl From<bool> for Metric {
    fn from(value: bool) -> Self {
        Metric::Flag(value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Number(value) => write!(f, "{}", format_number(*value)),
            Metric::Flag(flag) => write!(f, "{flag}"),
            Metric::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

/// Integral values print without a fractional part (`1024`, not `1024.0`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Host properties the reader knows how to query.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HostProperty {
    InnerWidth,
    InnerHeight,
    OuterWidth,
    OuterHeight,
    AvailWidth,
    AvailHeight,
    ScreenWidth,
    ScreenHeight,
    PixelRatio,
    ColorDepth,
    ScreenX,
    ScreenY,
    FullScreen,
}

impl HostProperty {
    pub const ALL: [HostProperty; 13] = [
        HostProperty::InnerWidth,
        HostProperty::InnerHeight,
        HostProperty::OuterWidth,
        HostProperty::OuterHeight,
        HostProperty::AvailWidth,
        HostProperty::AvailHeight,
        HostProperty::ScreenWidth,
        HostProperty::ScreenHeight,
        HostProperty::PixelRatio,
        HostProperty::ColorDepth,
        HostProperty::ScreenX,
        HostProperty::ScreenY,
        HostProperty::FullScreen,
    ];

    /// Dotted path of the property in the host environment.
    pub fn path(&self) -> &'static str {
        match self {
            HostProperty::InnerWidth => "window.innerWidth",
            HostProperty::InnerHeight => "window.innerHeight",
            HostProperty::OuterWidth => "window.outerWidth",
            HostProperty::OuterHeight => "window.outerHeight",
            HostProperty::AvailWidth => "window.screen.availWidth",
            HostProperty::AvailHeight => "window.screen.availHeight",
            HostProperty::ScreenWidth => "window.screen.width",
            HostProperty::ScreenHeight => "window.screen.height",
            HostProperty::PixelRatio => "window.devicePixelRatio",
            HostProperty::ColorDepth => "window.screen.colorDepth",
            HostProperty::ScreenX => "window.screenX",
            HostProperty::ScreenY => "window.screenY",
            HostProperty::FullScreen => "window.fullScreen",
        }
    }
}

impl fmt::Display for HostProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Metrics the classifier works from, captured in one pass.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowGeometry {
    pub fullscreen: Metric,
    pub outer_width: Metric,
    pub outer_height: Metric,
    pub avail_width: Metric,
    pub avail_height: Metric,
    pub screen_x: Metric,
    pub screen_y: Metric,
}

impl WindowGeometry {
    /// Geometry of a non-fullscreen window; handy for callers that only know numbers.
    pub fn from_numbers(outer: (f64, f64), avail: (f64, f64), position: (f64, f64)) -> Self {
        Self {
            fullscreen: Metric::Flag(false),
            outer_width: Metric::Number(outer.0),
            outer_height: Metric::Number(outer.1),
            avail_width: Metric::Number(avail.0),
            avail_height: Metric::Number(avail.1),
            screen_x: Metric::Number(position.0),
            screen_y: Metric::Number(position.1),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown target id: {0}")]
pub struct ParseTargetError(pub String);

/// Named slots of the host page that receive a formatted summary.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-full", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum TargetId {
    WindowInnerDimension,
    WindowOuterDimension,
    WindowMaxDimension,
    WindowSize,
    ScreenDimension,
    ScreenPixelRatio,
    ScreenColorDepth,
    ScreenType,
    ScreenPosition,
}

impl TargetId {
    /// Execution order of the standard run.
    pub const ALL: [TargetId; 9] = [
        TargetId::WindowInnerDimension,
        TargetId::WindowOuterDimension,
        TargetId::WindowMaxDimension,
        TargetId::WindowSize,
        TargetId::ScreenDimension,
        TargetId::ScreenPixelRatio,
        TargetId::ScreenColorDepth,
        TargetId::ScreenType,
        TargetId::ScreenPosition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetId::WindowInnerDimension => "window-inner-dimension",
            TargetId::WindowOuterDimension => "window-outer-dimension",
            TargetId::WindowMaxDimension => "window-max-dimension",
            TargetId::WindowSize => "window-size",
            TargetId::ScreenDimension => "screen-dimension",
            TargetId::ScreenPixelRatio => "screen-pixel-ratio",
            TargetId::ScreenColorDepth => "screen-color-depth",
            TargetId::ScreenType => "screen-type",
            TargetId::ScreenPosition => "screen-position",
        }
    }

    /// Human label shown next to the slot on the standard page.
    pub fn label(&self) -> &'static str {
        match self {
            TargetId::WindowInnerDimension => "Inner Dimension",
            TargetId::WindowOuterDimension => "Outer Dimension",
            TargetId::WindowMaxDimension => "Max. Dimension",
            TargetId::WindowSize => "Window Size",
            TargetId::ScreenDimension => "Screen Dimension",
            TargetId::ScreenPixelRatio => "Pixel Ratio",
            TargetId::ScreenColorDepth => "Color Depth",
            TargetId::ScreenType => "Screen Type",
            TargetId::ScreenPosition => "Screen Position",
        }
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetId {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetId::ALL
            .iter()
            .copied()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| ParseTargetError(s.to_string()))
    }
}

/// Console severities used by the crates themselves.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ConsoleLevel {
    Trace,
    Debug,
    Log,
    Info,
    Warn,
    Error,
}

impl ConsoleLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleLevel::Trace => "trace",
            ConsoleLevel::Debug => "debug",
            ConsoleLevel::Log => "log",
            ConsoleLevel::Info => "info",
            ConsoleLevel::Warn => "warn",
            ConsoleLevel::Error => "error",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "trace" => Some(ConsoleLevel::Trace),
            "debug" => Some(ConsoleLevel::Debug),
            "log" => Some(ConsoleLevel::Log),
            "info" => Some(ConsoleLevel::Info),
            "warn" => Some(ConsoleLevel::Warn),
            "error" => Some(ConsoleLevel::Error),
            _ => None,
        }
    }
}

impl fmt::Display for ConsoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
