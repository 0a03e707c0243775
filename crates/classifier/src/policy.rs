use serde::{Deserialize, Serialize};

/// Exact outer size a minimized window reports on the host.
///
/// The defaults match Firefox on Windows; other platforms report different sizes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierThresholds {
    #[serde(default = "ClassifierThresholds::default_minimized_width")]
    pub minimized_width: f64,
    #[serde(default = "ClassifierThresholds::default_minimized_height")]
    pub minimized_height: f64,
}

impl ClassifierThresholds {
    pub const MINIMIZED_WIDTH: f64 = 160.0;
    pub const MINIMIZED_HEIGHT: f64 = 28.0;

    fn default_minimized_width() -> f64 {
        Self::MINIMIZED_WIDTH
    }

    fn default_minimized_height() -> f64 {
        Self::MINIMIZED_HEIGHT
    }
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            minimized_width: Self::MINIMIZED_WIDTH,
            minimized_height: Self::MINIMIZED_HEIGHT,
        }
    }
}
