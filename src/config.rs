use std::{path::PathBuf, time::Duration};

use clap::Parser;

pub const DEFAULT_RESUME_DELAY_MS: i64 = 1000;
pub const MAX_RESUME_DELAY_MS: i64 = 10 * 60 * 1000;
pub const COMMIT_INTERVAL: Duration = Duration::from_millis(1000);
pub const LOG_FILE: &str = "RestoreWindows.log";

/// Keeps window positions stable while monitors are unplugged and reconnected.
#[derive(Debug, Parser)]
#[command(name = "restore-windows", version)]
pub struct Cli {
    /// Write a diagnostic log to RestoreWindows.log in the working directory.
    #[arg(long)]
    pub debuglog: bool,

    /// Milliseconds to wait before restoring once the monitor layout is back.
    /// Clamped to 0..=600000.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_RESUME_DELAY_MS, allow_negative_numbers = true)]
    pub delay: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub resume_delay: Duration,
    pub commit_interval: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resume_delay: clamp_resume_delay(DEFAULT_RESUME_DELAY_MS),
            commit_interval: COMMIT_INTERVAL,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            resume_delay: clamp_resume_delay(cli.delay),
            commit_interval: COMMIT_INTERVAL,
            log_file: cli.debuglog.then(|| PathBuf::from(LOG_FILE)),
        }
    }
}

pub fn clamp_resume_delay(ms: i64) -> Duration {
    Duration::from_millis(ms.clamp(0, MAX_RESUME_DELAY_MS) as u64)
}
