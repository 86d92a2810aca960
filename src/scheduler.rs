use std::time::{Duration, Instant};

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// The two logical timers, one outstanding deadline each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Flushes the pending-update buffer into the registry.
    Commit,
    /// Polls the monitor layout while tracking is paused.
    Resume,
}

/// One-shot deadlines for [`Timer`]s. Re-arming moves the deadline; cancelling
/// is idempotent. Nothing fires by itself: the dispatch loop sleeps until
/// [`Scheduler::next_deadline`] and then collects [`Scheduler::take_due`].
#[derive(Debug, Default)]
pub struct Scheduler {
    commit: Option<Instant>,
    resume: Option<Instant>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, timer: Timer) -> &mut Option<Instant> {
        match timer {
            Timer::Commit => &mut self.commit,
            Timer::Resume => &mut self.resume,
        }
    }

    pub fn arm(&mut self, timer: Timer, now: Instant, delay: Duration) {
        *self.slot(timer) = Some(now + delay);
    }

    pub fn cancel(&mut self, timer: Timer) {
        *self.slot(timer) = None;
    }

    pub fn due_at(&self, timer: Timer) -> Option<Instant> {
        match timer {
            Timer::Commit => self.commit,
            Timer::Resume => self.resume,
        }
    }

    pub fn is_armed(&self, timer: Timer) -> bool {
        self.due_at(timer).is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.commit, self.resume) {
            (Some(commit), Some(resume)) => Some(commit.min(resume)),
            (commit, resume) => commit.or(resume),
        }
    }

    /// Disarms and returns every timer whose deadline has passed, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<Timer> {
        let mut due = [Timer::Commit, Timer::Resume]
            .into_iter()
            .filter_map(|timer| {
                let at = self.due_at(timer)?;
                (at <= now).then_some((at, timer))
            })
            .collect::<Vec<_>>();
        due.sort_by_key(|(at, _)| *at);
        for (_, timer) in &due {
            self.cancel(*timer);
        }
        due.into_iter().map(|(_, timer)| timer).collect()
    }
}
