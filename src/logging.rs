use std::{fmt, fs::File, sync::Mutex};

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{
    EnvFilter,
    fmt::{format::Writer, time::FormatTime},
};

use crate::config::Config;

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// `RUST_LOG` wins over the level picked from the configuration.
fn env_filter(config: &Config) -> EnvFilter {
    let level = if config.log_file.is_some() { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("restore_windows={level}")))
}

/// Logs to stderr, or to a freshly truncated file when `--debuglog` was given.
pub fn init(config: &Config) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_timer(LocalTime)
        .with_target(false);
    let installed = match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
