use deviceinfo_core_types::WindowGeometry;
use serde::Serialize;

use crate::labels::{
    Axis, AxisPosition, HorizontalPosition, ScreenPosition, ScreenRole, VerticalPosition,
    WindowState,
};
use crate::policy::ClassifierThresholds;

/// Fullscreen wins over Maximized, which wins over the exact Minimized size match.
pub fn window_state(geometry: &WindowGeometry, thresholds: &ClassifierThresholds) -> WindowState {
    if geometry.fullscreen.is_set() {
        WindowState::Fullscreen
    } else if geometry.outer_width.same_number(&geometry.avail_width)
        && geometry.outer_height.same_number(&geometry.avail_height)
    {
        WindowState::Maximized
    } else if geometry.outer_width.equals(thresholds.minimized_width)
        && geometry.outer_height.equals(thresholds.minimized_height)
    {
        WindowState::Minimized
    } else {
        WindowState::Restored
    }
}

/// A window whose origin lies outside the available area lives on another screen.
pub fn screen_role(geometry: &WindowGeometry) -> ScreenRole {
    let outside = geometry.screen_x.below(0.0)
        || geometry.screen_y.below(0.0)
        || geometry.screen_x.exceeds(&geometry.avail_width)
        || geometry.screen_y.exceeds(&geometry.avail_height);

    if outside {
        ScreenRole::Secondary
    } else {
        ScreenRole::Primary
    }
}

pub fn axis_position(axis: Axis, geometry: &WindowGeometry) -> AxisPosition {
    match axis {
        Axis::Horizontal => {
            let position = if geometry.screen_x.below(0.0) {
                HorizontalPosition::Left
            } else if geometry.screen_x.exceeds(&geometry.avail_width) {
                HorizontalPosition::Right
            } else {
                HorizontalPosition::Center
            };
            AxisPosition::Horizontal(position)
        }
        Axis::Vertical => {
            let position = if geometry.screen_y.below(0.0) {
                VerticalPosition::Top
            } else if geometry.screen_y.exceeds(&geometry.avail_height) {
                VerticalPosition::Bottom
            } else {
                VerticalPosition::Center
            };
            AxisPosition::Vertical(position)
        }
    }
}

pub fn screen_position(geometry: &WindowGeometry) -> ScreenPosition {
    let horizontal = match axis_position(Axis::Horizontal, geometry) {
        AxisPosition::Horizontal(position) => position,
        AxisPosition::Vertical(_) => HorizontalPosition::Center,
    };
    let vertical = match axis_position(Axis::Vertical, geometry) {
        AxisPosition::Vertical(position) => position,
        AxisPosition::Horizontal(_) => VerticalPosition::Center,
    };
    ScreenPosition {
        horizontal,
        vertical,
    }
}

/// All three labels for one geometry sample.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Classification {
    pub window_state: WindowState,
    pub screen_role: ScreenRole,
    pub screen_position: ScreenPosition,
}

impl Classification {
    pub fn of(geometry: &WindowGeometry, thresholds: &ClassifierThresholds) -> Self {
        Self {
            window_state: window_state(geometry, thresholds),
            screen_role: screen_role(geometry),
            screen_position: screen_position(geometry),
        }
    }
}
