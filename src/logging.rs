//! Logging configuration for postpulse

use std::path::Path;

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::config::AppConfig;
use crate::Result;

/// Initialize the logging system with console and file output
pub fn init_logging(config: &AppConfig, verbose: bool) -> Result<()> {
    // Create logs directory if it doesn't exist
    let logs_dir = Path::new("logs");
    if !logs_dir.exists() {
        std::fs::create_dir_all(logs_dir)?;
    }

    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    // Environment variable takes precedence over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},postpulse={level}")));

    // Console output goes to stderr so predictions and tables stay clean on stdout
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let file_appender = tracing_appender::rolling::daily("logs", "postpulse.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_writer(non_blocking)
        .with_ansi(false); // No colors in file

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    if config.logging.backtrace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    tracing::debug!("logging initialized at {} level", level);

    // Keep the appender guard alive for the lifetime of the process
    std::mem::forget(guard);

    Ok(())
}
