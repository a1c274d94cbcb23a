//! File logging with tracing.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt};

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "contrastly.log";

/// Environment variable that replaces the `--log-level` filter entirely.
pub const LOG_ENV: &str = "CONTRASTLY_LOG";

/// Initialize tracing with file output.
///
/// Keep the returned guard alive for the duration of the program; dropping
/// it flushes buffered events. `CONTRASTLY_LOG`, when set, takes precedence
/// over `level` and accepts full `EnvFilter` directives.
///
/// Span enter/close events are only recorded in debug builds.
pub fn init_logging(
    log_path: Option<&Path>,
    level: Option<&str>,
) -> Result<WorkerGuard, TryInitError> {
    let log_path = log_path.unwrap_or(Path::new(DEFAULT_LOG_FILE));
    let level = level.unwrap_or("info");

    let parent = log_path.parent().unwrap_or(Path::new("."));
    let filename = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE));

    let file_appender = tracing_appender::rolling::never(parent, filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(format!("contrastly={level}")))
        .unwrap_or_else(|_| EnvFilter::new("contrastly=info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    #[cfg(debug_assertions)]
    let file_layer = {
        use tracing_subscriber::fmt::format::FmtSpan;
        file_layer.with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
