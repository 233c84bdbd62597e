//! Logging setup.

use masterscript_error::{LoggingError, LoggingErrorKind, MasterscriptResult};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for headless commands
    Stderr,
    /// Append to a file, for the interactive screen
    File(PathBuf),
}

/// Default log file for the interactive screen:
/// `<data dir>/masterscript/masterscript.log`.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("masterscript").join("masterscript.log"))
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `info`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(verbose: bool, target: LogTarget) -> MasterscriptResult<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LoggingError::new(LoggingErrorKind::Directory(format!(
                        "{}: {}",
                        parent.display(),
                        e
                    )))
                })?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    LoggingError::new(LoggingErrorKind::File(format!("{}: {}", path.display(), e)))
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| LoggingError::new(LoggingErrorKind::Subscriber(e.to_string())))?;
    Ok(())
}
