//! Short human-readable renderings of metrics and labels.
//!
//! A rendering is unavailable as soon as one of its input metrics is.

use std::fmt::Display;

use deviceinfo_core_types::Metric;

use crate::content::Content;

/// `1024x768`
pub fn dimension(width: Metric, height: Metric) -> Content {
    Content::new(
        format!("{width}x{height}"),
        width.is_available() && height.is_available(),
    )
}

/// `2x`
pub fn pixel_ratio(ratio: Metric) -> Content {
    Content::new(format!("{ratio}x"), ratio.is_available())
}

/// `24 Bit`
pub fn color_depth(depth: Metric) -> Content {
    Content::new(format!("{depth} Bit"), depth.is_available())
}

/// `Primary Screen`
pub fn screen_type(role: impl Display) -> Content {
    Content::new(format!("{role} Screen"), true)
}

pub fn label(value: impl Display) -> Content {
    Content::from(value.to_string())
}
