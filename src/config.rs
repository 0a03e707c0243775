//! Configuration management module
//!
//! Layers, lowest precedence first: built-in defaults, an optional config file (format by
//! extension: TOML, JSON or YAML), then `DEVICEINFO_*` environment variables with `__`
//! separating nested keys (`DEVICEINFO_THRESHOLDS__MINIMIZED_WIDTH=200`).

use std::path::Path;

use config::{Config, Environment, File};
use deviceinfo_classifier::ClassifierThresholds;
use serde::{Deserialize, Serialize};

use crate::errors::DeviceInfoResult;

pub const ENV_PREFIX: &str = "DEVICEINFO";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfoConfig {
    #[serde(default = "DeviceInfoConfig::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub thresholds: ClassifierThresholds,
}

impl DeviceInfoConfig {
    fn default_log_level() -> String {
        "info".to_string()
    }
}

impl Default for DeviceInfoConfig {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
            thresholds: ClassifierThresholds::default(),
        }
    }
}

/// Load configuration from defaults, `config_file` and the environment.
pub fn load_configuration(config_file: Option<&Path>) -> DeviceInfoResult<DeviceInfoConfig> {
    let defaults = DeviceInfoConfig::default();
    let mut builder = Config::builder()
        .set_default("log_level", defaults.log_level.as_str())?
        .set_default(
            "thresholds.minimized_width",
            defaults.thresholds.minimized_width,
        )?
        .set_default(
            "thresholds.minimized_height",
            defaults.thresholds.minimized_height,
        )?;

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path.to_path_buf()).required(true));
    }

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        std::env::remove_var("DEVICEINFO_LOG_LEVEL");
        std::env::remove_var("DEVICEINFO_THRESHOLDS__MINIMIZED_WIDTH");
        std::env::remove_var("DEVICEINFO_THRESHOLDS__MINIMIZED_HEIGHT");
    }

    #[test]
    #[serial]
    fn defaults_without_sources() {
        clear_env();
        let config = load_configuration(None).unwrap();
        assert_eq!(config, DeviceInfoConfig::default());
        assert_eq!(config.thresholds.minimized_width, 160.0);
        assert_eq!(config.thresholds.minimized_height, 28.0);
    }

    #[test]
    #[serial]
    fn file_overrides_defaults() {
        clear_env();
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "log_level = \"debug\"\n[thresholds]\nminimized_width = 200\nminimized_height = 40"
        )
        .unwrap();

        let config = load_configuration(Some(file.path())).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.thresholds.minimized_width, 200.0);
        assert_eq!(config.thresholds.minimized_height, 40.0);
    }

    #[test]
    #[serial]
    fn environment_overrides_file() {
        clear_env();
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "thresholds:\n  minimized_width: 200").unwrap();
        std::env::set_var("DEVICEINFO_THRESHOLDS__MINIMIZED_WIDTH", "240");

        let config = load_configuration(Some(file.path()));
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.thresholds.minimized_width, 240.0);
        assert_eq!(config.thresholds.minimized_height, 28.0);
    }

    #[test]
    #[serial]
    fn missing_file_is_an_error() {
        clear_env();
        assert!(load_configuration(Some(Path::new("/nonexistent/deviceinfo.toml"))).is_err());
    }
}
