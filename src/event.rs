use crate::desktop::WindowId;

/// Notifications delivered by the event router, already filtered down to what
/// the tracker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerEvent {
    Created(WindowId),
    Shown(WindowId),
    Destroyed(WindowId),
    Hidden(WindowId),
    ParentChanged(WindowId),
    Moved(WindowId),
    DisplayChanged,
}
