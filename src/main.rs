#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use restore_windows::{
        config::{Cli, Config},
        dispatch,
        hook::{instance::InstanceGuard, win_api::{self, Win32Desktop}},
        logging,
        monitor::MonitorLayout,
        scheduler::SystemClock,
        tracker::Tracker,
    };
    use tracing::info;

    let Some(_instance) = InstanceGuard::acquire()? else {
        return Ok(());
    };
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    logging::init(&config)?;
    info!("resume delay {} ms", config.resume_delay.as_millis());

    let baseline = MonitorLayout::capture(&Win32Desktop);
    let mut tracker = Tracker::new(Win32Desktop, SystemClock, &config);
    tracker.initialize(baseline);

    let events = dispatch::channel_receiver();
    let _router = win_api::spawn_event_router();
    dispatch::run(&mut tracker, &events);
    Ok(())
}

#[cfg(not(windows))]
fn main() -> anyhow::Result<()> {
    anyhow::bail!("restore-windows only runs on Windows")
}
