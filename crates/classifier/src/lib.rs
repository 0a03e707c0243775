//! Categorical labels derived from raw window and screen metrics.
//!
//! Every function here is pure: it works on an already captured [`WindowGeometry`] and never
//! touches the host. Any comparison that involves an unavailable metric is false, so missing
//! data degrades to `Restored`, `Primary` and `Center`.

pub mod labels;
pub mod policy;
pub mod rules;

pub use deviceinfo_core_types::WindowGeometry;
pub use labels::{
    merge_values, Axis, AxisPosition, HorizontalPosition, ScreenPosition, ScreenRole,
    VerticalPosition, WindowState,
};
pub use policy::ClassifierThresholds;
pub use rules::{axis_position, screen_position, screen_role, window_state, Classification};
