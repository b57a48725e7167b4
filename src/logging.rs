//! # Structured Logging Module
//!
//! Environment-aware structured logging that outputs to the console and,
//! when a log directory is configured, to JSON files for offline analysis
//! of query traffic.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration.
///
/// Safe to call more than once; only the first call installs a subscriber.
/// The filter comes from `RUST_LOG` when set, otherwise from an
/// environment-based default. Setting `DOCFLOW_LOG_DIR` adds a JSON file
/// layer writing `<environment>.<pid>.log` into that directory.
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);

        let console_layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
            );

        let file_layer = std::env::var("DOCFLOW_LOG_DIR").ok().and_then(|dir| {
            let log_dir = PathBuf::from(dir);
            if fs::create_dir_all(&log_dir).is_err() {
                return None;
            }
            let file_appender = tracing_appender::rolling::never(
                &log_dir,
                format!("{}.{}.log", environment, process::id()),
            );
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            // Keep the background writer alive for the process lifetime
            std::mem::forget(guard);
            Some(
                fmt::layer()
                    .with_writer(file_writer)
                    .with_target(true)
                    .with_ansi(false)
                    .json()
                    .with_filter(EnvFilter::new(&log_level)),
            )
        });

        let subscriber = tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer);

        // try_init so embedding hosts that already installed a subscriber
        // are left alone
        if subscriber.try_init().is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }

        tracing::info!(
            environment = %environment,
            log_level = %log_level,
            "structured logging initialized"
        );
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("DOCFLOW_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level from `DOCFLOW_LOG_LEVEL`, falling back to an
/// environment-based default
fn get_log_level(environment: &str) -> String {
    std::env::var("DOCFLOW_LOG_LEVEL").unwrap_or_else(|_| match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    })
}
