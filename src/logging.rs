use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// The TUI owns the terminal, so interactive sessions only log when a file is
/// given. The returned guard flushes the file writer when dropped.
pub fn init(
    log_file: Option<&Path>,
    level: &str,
    interactive: bool,
) -> Result<Option<WorkerGuard>> {
    // Fallback to `level` if RUST_LOG is not set _or_ contains an invalid value
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("log file `{}` has no file name", path.display()))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .try_init();
            Ok(Some(guard))
        }
        None if !interactive => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
            Ok(None)
        }
        None => Ok(None),
    }
}
