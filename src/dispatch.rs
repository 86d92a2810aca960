use std::sync::OnceLock;

use flume::{Receiver, RecvTimeoutError, Sender};
use tracing::{info, warn};

use crate::{
    desktop::Desktop,
    event::TrackerEvent,
    scheduler::Clock,
    tracker::Tracker,
};

pub static TRACKER_CHANNEL: OnceLock<(Sender<TrackerEvent>, Receiver<TrackerEvent>)> =
    OnceLock::new();

fn event_channel() -> &'static (Sender<TrackerEvent>, Receiver<TrackerEvent>) {
    TRACKER_CHANNEL.get_or_init(flume::unbounded)
}

pub fn channel_receiver() -> Receiver<TrackerEvent> {
    event_channel().1.clone()
}

/// Queues an event for the dispatch thread. Called from OS callbacks, so it
/// never blocks.
pub fn channel_send(event: TrackerEvent) {
    if let Err(err) = event_channel().0.send(event) {
        warn!("failed to send event {event:?}: {err}");
    }
}

/// Runs the tracker until every sender is gone. Events are handled strictly in
/// arrival order; between events the loop sleeps until the next timer is due.
pub fn run<D: Desktop, C: Clock>(tracker: &mut Tracker<D, C>, events: &Receiver<TrackerEvent>) {
    loop {
        let received = match tracker.next_deadline() {
            Some(deadline) => events.recv_deadline(deadline),
            None => events.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(event) => tracker.handle(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                info!("event source closed");
                break;
            }
        }
        tracker.fire_due_timers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        desktop::WindowId,
        geometry::Rect,
        monitor::MonitorLayout,
        placement::ShowState,
        scheduler::{SystemClock, Timer},
        testing::FakeDesktop,
    };
    use std::time::Duration;

    #[test]
    fn drains_queue_in_order_then_stops() {
        let monitor = Rect::new(0, 0, 1920, 1080);
        let mut desktop = FakeDesktop::new(vec![monitor]);
        let window = desktop.add_window(1, Rect::new(0, 0, 100, 100), ShowState::Normal);
        let mut tracker = Tracker::new(desktop, SystemClock, &Config::default());
        tracker.initialize(MonitorLayout::new(vec![monitor]));

        let (tx, rx) = flume::unbounded();
        tx.send(TrackerEvent::Hidden(window)).unwrap();
        tx.send(TrackerEvent::Shown(window)).unwrap();
        tx.send(TrackerEvent::Destroyed(WindowId(2))).unwrap();
        drop(tx);

        run(&mut tracker, &rx);
        assert!(tracker.registry().contains(window));
        assert!(!tracker.is_paused());
    }

    #[test]
    fn fires_timers_while_waiting() {
        let monitor = Rect::new(0, 0, 1920, 1080);
        let mut desktop = FakeDesktop::new(vec![monitor]);
        let window = desktop.add_window(1, Rect::new(100, 100, 800, 600), ShowState::Normal);
        let config = Config {
            resume_delay: Duration::from_millis(10),
            ..Config::default()
        };
        let mut tracker = Tracker::new(desktop, SystemClock, &config);
        tracker.initialize(MonitorLayout::new(vec![monitor]));

        let (tx, rx) = flume::unbounded();
        tx.send(TrackerEvent::DisplayChanged).unwrap();
        let sender = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(200));
            drop(tx);
        });

        tracker.desktop_mut().move_window(window, Rect::new(0, 0, 700, 500));
        run(&mut tracker, &rx);
        sender.join().unwrap();

        assert!(!tracker.is_paused());
        assert!(!tracker.scheduler().is_armed(Timer::Resume));
        assert_eq!(tracker.desktop_mut().take_calls().len(), 1);
    }
}
