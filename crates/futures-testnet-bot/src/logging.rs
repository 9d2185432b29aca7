/*
[INPUT]:  LogConfig (level directive and log file path)
[OUTPUT]: Global tracing subscriber writing to stderr and an append-only file
[POS]:    Observability layer - process-wide logging lifecycle
[UPDATE]: When changing log format, sinks, or flushing behavior
*/

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::LogConfig;

/// Keeps the file writer alive. Buffered lines are flushed when dropped.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: WorkerGuard,
}

/// Install the global subscriber. Call once at startup.
pub fn init(config: &LogConfig) -> Result<LogGuard> {
    let filter = EnvFilter::try_new(&config.level).context("invalid log level")?;

    let directory = config
        .file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = config
        .file
        .file_name()
        .context("log file path must name a file")?
        .to_string_lossy()
        .into_owned();

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .with_context(|| format!("open log file {}", config.file.display()))?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;

    Ok(LogGuard { _file: guard })
}
