pub mod config;
pub mod middleware;
pub mod paths;


use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::{AppError, Result};

pub use config::LogConfig;
pub use middleware::{access_log_middleware, request_id_middleware, RequestId};

/// Keeps the non-blocking file writers flushing; drop it only at shutdown
#[must_use = "log files stop being written when the guards are dropped"]
pub struct LoggingGuards {
    _guards: Vec<WorkerGuard>,
}

/// Initialize console + file logging for server mode
///
/// This sets up:
/// - Console logging (compact, filtered by RUST_LOG)
/// - Access log file (JSON, only events with target "access_log")
/// - Application log file (JSON, everything except access logs)
///
/// Both files roll over daily.
pub fn init_logging(config: &LogConfig) -> Result<LoggingGuards> {
    let log_dir = paths::get_log_directory(config.custom_log_dir.as_deref())?;
    let mut guards = Vec::new();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.console_log_level)),
        );

    let access_layer = if config.access_enabled {
        let appender = tracing_appender::rolling::daily(&log_dir, "access.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        guards.push(guard);

        Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new("access_log=info")),
        )
    } else {
        None
    };

    let app_layer = if config.application_enabled {
        let appender = tracing_appender::rolling::daily(&log_dir, "application.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        guards.push(guard);

        let filter = EnvFilter::new(&config.file_log_level).add_directive(
            "access_log=off"
                .parse()
                .map_err(|e| AppError::Config(format!("invalid log directive: {}", e)))?,
        );

        Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(filter),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(access_layer)
        .with(app_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("logging already initialized: {}", e)))?;

    tracing::info!(log_dir = %log_dir.display(), "Logging initialized");

    Ok(LoggingGuards { _guards: guards })
}

/// Initialize console-only logging for CLI mode
pub fn init_cli_logging(config: &LogConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.console_log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Log platform-specific information on startup
pub fn log_platform_info() {
    tracing::info!(
        platform = std::env::consts::OS,
        architecture = std::env::consts::ARCH,
        version = env!("CARGO_PKG_VERSION"),
        "Server starting on platform"
    );
}
