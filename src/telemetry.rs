use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::{DeviceInfoError, DeviceInfoResult};

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global subscriber once. `RUST_LOG` wins over `level`; output goes to stderr.
pub fn init_logging(level: &str, debug: bool) -> DeviceInfoResult<()> {
    let level: tracing::Level = if debug {
        tracing::Level::DEBUG
    } else {
        level
            .parse()
            .map_err(|_| DeviceInfoError::invalid_argument(format!("invalid log level: {level}")))?
    };

    INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.to_string()));
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()
            .map_err(|err| DeviceInfoError::Logging(err.to_string()))
    })?;
    Ok(())
}
