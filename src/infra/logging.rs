//! Logging infrastructure for ConnectTo
//!
//! Installs the tracing subscriber: a stderr layer always, plus a file layer
//! in `%APPDATA%\ConnectTo\ConnectTo_Debug.log` when debug mode is enabled
//! through the `CONNECTTO_DEBUG` environment variable. Debug mode is not a
//! command-line flag because argument dispatch is exact.

use crate::infra::paths::get_log_dir;
use crate::AppError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable that turns on debug logging
pub const DEBUG_ENV: &str = "CONNECTTO_DEBUG";

const LOG_FILE_NAME: &str = "ConnectTo_Debug.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Operational entries stay visible on the console; everything else only from warn up
const DEFAULT_DIRECTIVES: &str = "warn,connectto::oplog=info";

/// Reads `CONNECTTO_DEBUG` from the environment
pub fn is_debug_enabled() -> bool {
    parse_debug_flag(std::env::var(DEBUG_ENV).ok().as_deref())
}

/// Any value except empty, `0` or `false` enables debug mode
pub fn parse_debug_flag(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") | Some("0") => false,
        Some(v) => !v.eq_ignore_ascii_case("false"),
    }
}

/// Initializes the global tracing subscriber
///
/// `RUST_LOG` overrides the default filter.
///
/// # Returns
/// * `Ok(Some(guard))` - Debug mode; keep the guard alive so the file writer flushes
/// * `Ok(None)` - Console logging only
/// * `Err(AppError)` - A global subscriber was already installed
pub fn init_tracing(debug: bool) -> Result<Option<WorkerGuard>, AppError> {
    let default_directives = if debug { "debug" } else { DEFAULT_DIRECTIVES };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()));

    let registry = tracing_subscriber::registry().with(filter).with(stderr_layer);

    if !debug {
        registry.try_init().map_err(init_error)?;
        return Ok(None);
    }

    let log_dir = get_log_dir();
    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()));

    registry.with(file_layer).try_init().map_err(init_error)?;

    tracing::info!(
        log_file = %log_dir.join(LOG_FILE_NAME).display(),
        version = env!("CARGO_PKG_VERSION"),
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        "Debug logging enabled"
    );

    Ok(Some(guard))
}

fn init_error(e: tracing_subscriber::util::TryInitError) -> AppError {
    AppError::Other {
        message: format!("Failed to initialize tracing: {}", e),
        source: Some(e.into()),
    }
}
