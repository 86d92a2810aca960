use thiserror::Error;

use crate::desktop::WindowId;

/// Reasons a window's placement could not be read. Callers treat every variant
/// the same way: the window is simply not tracked or restored this time.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    #[error("window {0} no longer exists")]
    Gone(WindowId),
    #[error("placement of window {0} is unavailable")]
    PlacementUnavailable(WindowId),
    #[error("screen rect of window {0} is unavailable")]
    RectUnavailable(WindowId),
    #[error("monitor of window {0} is unavailable")]
    MonitorUnavailable(WindowId),
}
