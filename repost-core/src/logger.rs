//! Tracing initialization: fmt layer with full format (level, target, span,
//! all fields), optionally teed to a log file.

use crate::error::RepostError;
use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Initializes the global tracing subscriber.
/// Reads the level filter from RUST_LOG (default `info`); load .env (e.g. via
/// `dotenvy::dotenv()`) before calling this or RUST_LOG from .env has no effect.
/// When `log_file_path` is set, the same output is written to both stdout and
/// the file; otherwise stdout only.
pub fn init_tracing(log_file_path: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    match log_file_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(RepostError::Io)?;
            let file = Arc::new(file);
            use tracing_subscriber::fmt::writer::MakeWriterExt;
            let writer = io::stdout.and(file);
            Registry::default()
                .with(env_filter)
                .with(fmt_layer.with_writer(writer))
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;
        }
        None => {
            Registry::default()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;
        }
    }

    Ok(())
}
