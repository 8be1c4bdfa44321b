//! Tracing infrastructure for development diagnostics
//!
//! Provides structured logging for debugging remap, scheduling, and restore
//! behavior. The library itself only emits events; hosts that want output
//! call [`init`] (or install their own subscriber).
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=ghostline=debug` - this crate only
//! - `RUST_LOG=ghostline::history=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/ghostline/logs/ghostline.log` with daily
//! rotation. File logging uses debug level by default for troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering. File logging
/// writes to `~/.config/ghostline/logs/ghostline.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "ghostline.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
