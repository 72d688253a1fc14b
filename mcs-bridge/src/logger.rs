use crate::error::{BridgeError, Result as BridgeErrorResult};

use mcs_config::LoggingConfig;

use std::fmt::Arguments;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Where `logging.file` lands: `<config_dir>/<logging.dir>/<logging.file>`.
/// Creates the log directory; `None` means stdout.
pub fn log_file_path(
    logging: &LoggingConfig,
    config_dir: &Path,
) -> BridgeErrorResult<Option<PathBuf>> {
    let Some(ref filename) = logging.file else {
        return Ok(None);
    };

    let log_dir = config_dir.join(&logging.dir);
    std::fs::create_dir_all(&log_dir)?;

    Ok(Some(log_dir.join(filename)))
}

/// `[<rfc3339> - <LEVEL>] <message>`, optionally colored and with a
/// `[file:line]` suffix
fn formatter(
    colors: Option<ColoredLevelConfig>,
    with_location: bool,
) -> impl Fn(FormatCallback<'_>, &Arguments<'_>, &Record<'_>) + Sync + Send + 'static {
    move |out: FormatCallback<'_>, message: &Arguments<'_>, record: &Record<'_>| {
        let level = match &colors {
            Some(colors) => colors.color(record.level()).to_string(),
            None => record.level().to_string(),
        };
        let location = if with_location {
            format!(
                " [{}:{}]",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0)
            )
        } else {
            String::new()
        };

        out.finish(format_args!(
            "[{} - {}] {}{}",
            humantime::format_rfc3339(SystemTime::now()),
            level,
            message,
            location
        ))
    }
}

/// Install the global fern logger for the bridge.
///
/// Logs go to the configured file when `logging.file` is set, otherwise to
/// stdout; `logging.colored` only applies to stdout. Plain stdout drops the
/// source location, which systemd/docker log views don't need.
pub fn initialize(logging: &LoggingConfig, config_dir: &Path) -> BridgeErrorResult<()> {
    let level_filter = *logging.level;
    let log_file = log_file_path(logging, config_dir)?;

    let dispatch = match log_file {
        Some(ref log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| BridgeError::Logger {
                    message: format!("Failed to open log file {}: {}", log_path.display(), e),
                })?;

            Dispatch::new().format(formatter(None, true)).chain(file)
        }
        None if logging.colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(formatter(Some(colors), true))
                .chain(std::io::stdout())
        }
        None => Dispatch::new()
            .format(formatter(None, false))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(dispatch)
        .apply()
        .map_err(|e| BridgeError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={}, stdout", level_filter),
    }

    Ok(())
}
