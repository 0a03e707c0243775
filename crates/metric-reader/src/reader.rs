use deviceinfo_core_types::{HostProperty, Metric, WindowGeometry};
use deviceinfo_diagnostics::{DiagnosticLogger, HostConsole};
use tracing::trace;

use crate::environment::{HostEnvironment, PropertyValue};

/// Reads host properties as [`Metric`]s.
///
/// Only an absent or `null` property (or one of a type no metric can hold) becomes
/// [`Metric::Unavailable`]. Zero is a legitimate measurement and is returned as-is.
pub struct MetricReader<'a, E, C>
where
    E: HostEnvironment + ?Sized,
    C: HostConsole + ?Sized,
{
    env: &'a E,
    logger: DiagnosticLogger<'a, C>,
}

impl<'a, E, C> MetricReader<'a, E, C>
where
    E: HostEnvironment + ?Sized,
    C: HostConsole + ?Sized,
{
    pub fn new(env: &'a E, logger: DiagnosticLogger<'a, C>) -> Self {
        Self { env, logger }
    }

    pub fn read(&self, property: HostProperty) -> Metric {
        self.read_path(property.path())
    }

    /// Query the host fresh; every call re-reads the environment.
    pub fn read_path(&self, path: &str) -> Metric {
        let raw = self.env.property(path);
        trace!(path, value = %raw, "read host property");
        match raw {
            PropertyValue::Number(value) => Metric::Number(value),
            PropertyValue::Bool(flag) => Metric::Flag(flag),
            PropertyValue::Undefined | PropertyValue::Null => {
                self.logger.warn(&format!("{path} is undefined (={raw})"));
                Metric::Unavailable
            }
            PropertyValue::Other(kind) => {
                self.logger
                    .warn(&format!("{path} is undefined (unexpected {kind})"));
                Metric::Unavailable
            }
        }
    }

    pub fn inner_width(&self) -> Metric {
        self.read(HostProperty::InnerWidth)
    }

    pub fn inner_height(&self) -> Metric {
        self.read(HostProperty::InnerHeight)
    }

    pub fn outer_width(&self) -> Metric {
        self.read(HostProperty::OuterWidth)
    }

    pub fn outer_height(&self) -> Metric {
        self.read(HostProperty::OuterHeight)
    }

    /// Available screen width, i.e. the widest a window can get.
    pub fn max_width(&self) -> Metric {
        self.read(HostProperty::AvailWidth)
    }

    pub fn max_height(&self) -> Metric {
        self.read(HostProperty::AvailHeight)
    }

    pub fn screen_width(&self) -> Metric {
        self.read(HostProperty::ScreenWidth)
    }

    pub fn screen_height(&self) -> Metric {
        self.read(HostProperty::ScreenHeight)
    }

    pub fn pixel_ratio(&self) -> Metric {
        self.read(HostProperty::PixelRatio)
    }

    pub fn color_depth(&self) -> Metric {
        self.read(HostProperty::ColorDepth)
    }

    pub fn screen_x(&self) -> Metric {
        self.read(HostProperty::ScreenX)
    }

    pub fn screen_y(&self) -> Metric {
        self.read(HostProperty::ScreenY)
    }

    pub fn fullscreen(&self) -> Metric {
        self.read(HostProperty::FullScreen)
    }

    /// Everything the window state rule needs; the position is left unread.
    pub fn read_size_geometry(&self) -> WindowGeometry {
        WindowGeometry {
            fullscreen: self.fullscreen(),
            outer_width: self.outer_width(),
            outer_height: self.outer_height(),
            avail_width: self.max_width(),
            avail_height: self.max_height(),
            screen_x: Metric::Unavailable,
            screen_y: Metric::Unavailable,
        }
    }

    /// Everything the screen role and position rules need; the window size is left unread.
    pub fn read_position_geometry(&self) -> WindowGeometry {
        WindowGeometry {
            fullscreen: Metric::Unavailable,
            outer_width: Metric::Unavailable,
            outer_height: Metric::Unavailable,
            avail_width: self.max_width(),
            avail_height: self.max_height(),
            screen_x: self.screen_x(),
            screen_y: self.screen_y(),
        }
    }

    pub fn read_geometry(&self) -> WindowGeometry {
        WindowGeometry {
            fullscreen: self.fullscreen(),
            outer_width: self.outer_width(),
            outer_height: self.outer_height(),
            avail_width: self.max_width(),
            avail_height: self.max_height(),
            screen_x: self.screen_x(),
            screen_y: self.screen_y(),
        }
    }
}
