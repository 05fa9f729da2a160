use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, ShelfError};

/// Filter used when `RUST_LOG` is not set.
fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("bookshelf={},async_graphql=warn", level)
}

/// Non-blocking writer for a daily-rotated file at `log_path`, creating its
/// directory first.
fn file_writer(log_path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;
    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("bookshelf.log"));

    Ok(tracing_appender::non_blocking(
        tracing_appender::rolling::daily(dir, file_name),
    ))
}

/// Initialize the logging system
///
/// Logs go to stderr in compact form. With `log_file`, a second layer writes
/// JSON lines to a daily-rotated file next to it. The returned guard flushes
/// the file writer on drop and must be held for the life of the process.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        subscriber
            .try_init()
            .map_err(|e| ShelfError::Config(format!("Logging already initialized: {}", e)))?;
        return Ok(None);
    };

    let (writer, guard) = file_writer(log_path)?;
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false).json();

    subscriber
        .with(file_layer)
        .try_init()
        .map_err(|e| ShelfError::Config(format!("Logging already initialized: {}", e)))?;
    Ok(Some(guard))
}
