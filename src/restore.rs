use tracing::{debug, trace};

use crate::{
    desktop::{Desktop, WindowId},
    error::CaptureError,
    placement::{self, ShowCommand, ShowState, WindowPlacement},
    registry::PlacementRegistry,
};

/// What a restore pass did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestoreSummary {
    /// Windows that were sent placement requests.
    pub restored: usize,
    /// Tracked windows that no longer exist.
    pub vanished: Vec<WindowId>,
}

/// Re-applies every remembered placement that drifted.
pub fn restore_all<D: Desktop + ?Sized>(
    desktop: &mut D,
    registry: &PlacementRegistry,
) -> RestoreSummary {
    let mut summary = RestoreSummary::default();
    for (window, stored) in registry.iter() {
        match restore_window(&mut *desktop, window, stored) {
            Ok(true) => summary.restored += 1,
            Ok(false) => {}
            Err(CaptureError::Gone(window)) => summary.vanished.push(window),
            Err(err) => trace!(%window, %err, "skipping restore"),
        }
    }
    summary
}

/// Requests are fire-and-forget and never activate the window. Returns whether
/// any were sent.
pub fn restore_window<D: Desktop + ?Sized>(
    desktop: &mut D,
    window: WindowId,
    stored: &WindowPlacement,
) -> Result<bool, CaptureError> {
    // Maximized/minimized transitions don't produce movement notifications, so
    // the live state has to be read again.
    let current = placement::capture(&*desktop, window)?;
    if current == *stored {
        return Ok(false);
    }

    if let Some(title) = desktop.title(window) {
        debug!(%window, %title, from = %current, to = %stored, "restoring window");
    }

    let request = stored.async_request();
    match current.show {
        ShowState::Minimized => {
            desktop.set_placement(window, &request, ShowCommand::MinimizedNoActivate);
        }
        ShowState::Maximized => {
            // Maximizing is relative to the monitor the window is on: restore it,
            // move it to its normal rect on the right monitor, then maximize.
            desktop.show_async(window, ShowCommand::NormalNoActivate);
            desktop.set_placement(window, &request, ShowCommand::NormalNoActivate);
            desktop.show_async(window, ShowCommand::Maximized);
        }
        ShowState::Normal => {
            desktop.set_placement(window, &request, ShowCommand::NormalNoActivate);
        }
    }
    Ok(true)
}
