//! Tracing initialization for applications embedding safe_file.
//!
//! The library only emits events (publish/remove at debug, link races at trace,
//! an exhausted reader at warn). `init_tracing` installs a stdout subscriber
//! whose verbosity comes from `LogLevel`; RUST_LOG is not consulted.

use anyhow::{Result, anyhow};
use chrono::Local;
use std::fmt;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry, fmt as tsfmt, registry};

use crate::config::LogLevel;

/// Local wall-clock timestamps with millisecond precision.
struct LocalMillis;

impl FormatTime for LocalMillis {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

pub(crate) fn level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

/// EnvFilter equivalent of `lvl`, usable for scoped subscribers as well.
pub fn env_filter_for(lvl: &LogLevel) -> EnvFilter {
    EnvFilter::default().add_directive(level_filter(lvl).into())
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn stdout_layer(json: bool) -> BoxedLayer {
    let base = tsfmt::layer()
        .with_timer(LocalMillis)
        .with_target(true)
        .with_thread_ids(true);
    if json {
        base.json().boxed()
    } else {
        base.compact().boxed()
    }
}

/// Install a global stdout subscriber for `lvl`, compact or JSON.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_tracing(lvl: &LogLevel, json: bool) -> Result<()> {
    registry()
        .with(stdout_layer(json))
        .with(env_filter_for(lvl))
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
