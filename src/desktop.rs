use std::fmt;

use crate::{
    error::CaptureError,
    geometry::Rect,
    placement::{ShowCommand, WindowPlacement},
};

/// Opaque OS window handle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub isize);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Full rectangle and work area (minus taskbar) of the monitor a window is on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MonitorAreas {
    pub monitor: Rect,
    pub work: Rect,
}

impl MonitorAreas {
    pub fn new(monitor: Rect, work: Rect) -> Self {
        Self { monitor, work }
    }

    /// Shift between the monitor origin and the work area origin. Non-zero when a
    /// taskbar or appbar is docked on the left or top edge.
    pub fn work_offset(&self) -> (i32, i32) {
        (
            self.monitor.left - self.work.left,
            self.monitor.top - self.work.top,
        )
    }
}

/// Everything the tracker needs from the windowing system.
///
/// Reads may fail and report a [`CaptureError`]. Writes are asynchronous requests
/// whose outcome is never observed.
pub trait Desktop {
    /// Full rectangles of every display, in enumeration order.
    fn monitors(&self) -> Vec<Rect>;
    /// Every top-level window currently known to the OS.
    fn windows(&self) -> Vec<WindowId>;
    /// Visible and without a parent window.
    fn is_application_window(&self, window: WindowId) -> bool;
    fn title(&self, window: WindowId) -> Option<String>;

    /// The placement record exactly as the OS reports it.
    fn placement(&self, window: WindowId) -> Result<WindowPlacement, CaptureError>;
    /// The window's true on-screen rectangle.
    fn window_rect(&self, window: WindowId) -> Result<Rect, CaptureError>;
    fn is_tool_window(&self, window: WindowId) -> bool;
    fn monitor_areas(&self, window: WindowId) -> Result<MonitorAreas, CaptureError>;

    fn set_placement(&mut self, window: WindowId, placement: &WindowPlacement, command: ShowCommand);
    fn show_async(&mut self, window: WindowId, command: ShowCommand);
}
