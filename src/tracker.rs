use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::{
    config::Config,
    desktop::{Desktop, WindowId},
    event::TrackerEvent,
    monitor::MonitorLayout,
    pending::PendingUpdates,
    placement,
    registry::PlacementRegistry,
    restore,
    scheduler::{Clock, Scheduler, SystemClock, Timer},
};

/// Owns all tracking state. Every handler runs to completion on the dispatch
/// thread, so nothing here is shared or locked.
pub struct Tracker<D: Desktop, C: Clock = SystemClock> {
    desktop: D,
    clock: C,
    resume_delay: Duration,
    commit_interval: Duration,
    baseline: MonitorLayout,
    registry: PlacementRegistry,
    pending: PendingUpdates,
    scheduler: Scheduler,
    paused: bool,
}

impl<D: Desktop, C: Clock> Tracker<D, C> {
    pub fn new(desktop: D, clock: C, config: &Config) -> Self {
        Self {
            desktop,
            clock,
            resume_delay: config.resume_delay,
            commit_interval: config.commit_interval,
            baseline: MonitorLayout::default(),
            registry: PlacementRegistry::new(),
            pending: PendingUpdates::new(),
            scheduler: Scheduler::new(),
            paused: false,
        }
    }

    /// Seeds the desired layout and tracks every visible top-level window.
    pub fn initialize(&mut self, baseline: MonitorLayout) {
        for monitor in baseline.monitors() {
            info!(width = monitor.width(), height = monitor.height(), "monitor");
        }
        self.baseline = baseline;
        for window in self.desktop.windows() {
            if self.desktop.is_application_window(window) {
                self.registry.track(&self.desktop, window);
            }
        }
        info!(windows = self.registry.len(), "initial scan complete");
    }

    pub fn desktop_mut(&mut self) -> &mut D {
        &mut self.desktop
    }

    pub fn registry(&self) -> &PlacementRegistry {
        &self.registry
    }

    pub fn pending(&self) -> &PendingUpdates {
        &self.pending
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn baseline(&self) -> &MonitorLayout {
        &self.baseline
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn handle(&mut self, event: TrackerEvent) {
        match event {
            TrackerEvent::Created(window) | TrackerEvent::Shown(window) => {
                self.on_window_created_or_shown(window)
            }
            TrackerEvent::Destroyed(window) | TrackerEvent::Hidden(window) => {
                self.on_window_destroyed_or_hidden(window)
            }
            TrackerEvent::ParentChanged(window) => self.on_window_parent_changed(window),
            TrackerEvent::Moved(window) => self.on_window_moved(window),
            TrackerEvent::DisplayChanged => self.on_display_changed(),
        }
    }

    pub fn on_window_created_or_shown(&mut self, window: WindowId) {
        if self.paused || self.registry.contains(window) {
            return;
        }
        if self.desktop.is_application_window(window) {
            self.registry.track(&self.desktop, window);
        }
    }

    pub fn on_window_destroyed_or_hidden(&mut self, window: WindowId) {
        if self.paused {
            return;
        }
        self.untrack(window);
    }

    pub fn on_window_parent_changed(&mut self, window: WindowId) {
        if self.paused {
            return;
        }
        if self.desktop.is_application_window(window) {
            self.registry.track(&self.desktop, window);
        } else if self.registry.contains(window) {
            self.untrack(window);
        }
    }

    pub fn on_window_moved(&mut self, window: WindowId) {
        if self.paused || !self.registry.contains(window) {
            return;
        }
        match placement::capture(&self.desktop, window) {
            Ok(placement) => {
                self.pending.enqueue(window, placement);
                if !self.scheduler.is_armed(Timer::Commit) {
                    trace!("scheduling placement commit");
                    self.arm(Timer::Commit, self.commit_interval);
                }
            }
            Err(err) => trace!(%window, %err, "dropping move"),
        }
    }

    pub fn on_display_changed(&mut self) {
        let current = MonitorLayout::capture(&self.desktop);
        if !self.paused && current.is_identical(&self.baseline) {
            // Some systems replug a monitor without any visible layout change.
            info!("forced restore");
            self.pause();
            self.schedule_resume();
        } else if current.matches_desired_sizes(&self.baseline) {
            // Positions may have moved; compare against them from now on.
            self.baseline = current;
            self.schedule_resume();
        } else {
            self.pause();
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn fire_due_timers(&mut self) {
        let now = self.clock.now();
        for timer in self.scheduler.take_due(now) {
            match timer {
                Timer::Commit => self.commit_pending(),
                Timer::Resume => self.poll_resume(),
            }
        }
    }

    fn arm(&mut self, timer: Timer, delay: Duration) {
        let now = self.clock.now();
        self.scheduler.arm(timer, now, delay);
    }

    fn untrack(&mut self, window: WindowId) {
        if self.registry.untrack(window).is_some() {
            if let Some(title) = self.desktop.title(window) {
                debug!(%window, %title, "removing window");
            }
        }
        self.pending.remove(window);
    }

    fn commit_pending(&mut self) {
        let written = self.pending.commit_into(&mut self.registry);
        if written > 0 {
            debug!(written, "committed window placements");
        }
        if self.pending.has_due() {
            self.arm(Timer::Commit, self.commit_interval);
        }
    }

    fn pause(&mut self) {
        if self.paused {
            return;
        }
        info!("pausing window tracking");
        self.pending.clear();
        self.scheduler.cancel(Timer::Commit);
        self.paused = true;
    }

    fn schedule_resume(&mut self) {
        self.arm(Timer::Resume, self.resume_delay);
    }

    fn poll_resume(&mut self) {
        if !self.paused {
            return;
        }
        let current = MonitorLayout::capture(&self.desktop);
        if !current.matches_desired_sizes(&self.baseline) {
            trace!(monitors = current.monitors().len(), "desired layout not back yet");
            self.schedule_resume();
            return;
        }
        info!("resuming window tracking");
        self.paused = false;
        let summary = restore::restore_all(&mut self.desktop, &self.registry);
        // Destroy notifications are dropped while paused.
        for window in &summary.vanished {
            debug!(%window, "forgetting vanished window");
            self.untrack(*window);
        }
        info!(
            restored = summary.restored,
            vanished = summary.vanished.len(),
            "restored window placements"
        );
    }
}
