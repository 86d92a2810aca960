use std::fmt;

use bitflags::bitflags;

use crate::{
    desktop::{Desktop, WindowId},
    error::CaptureError,
    geometry::{Point, Rect},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// Show commands issued while restoring. None of them activates the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowCommand {
    NormalNoActivate,
    MinimizedNoActivate,
    Maximized,
}

bitflags! {
    /// Mirrors the `WPF_*` placement flags.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PlacementFlags: u32 {
        const SET_MIN_POSITION = 0x0001;
        const RESTORE_TO_MAXIMIZED = 0x0002;
        const ASYNC_WINDOW_PLACEMENT = 0x0004;
    }
}

/// A window's remembered placement.
///
/// `normal_rect` is always the un-docked, normal geometry of the window, see
/// [`capture`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowPlacement {
    pub flags: PlacementFlags,
    pub show: ShowState,
    pub min_position: Point,
    pub max_position: Point,
    pub normal_rect: Rect,
}

impl WindowPlacement {
    pub fn new(normal_rect: Rect, show: ShowState) -> Self {
        Self {
            normal_rect,
            show,
            ..Default::default()
        }
    }

    /// Copy of this placement flagged for asynchronous application.
    pub fn async_request(&self) -> Self {
        Self {
            flags: self.flags | PlacementFlags::ASYNC_WINDOW_PLACEMENT,
            ..*self
        }
    }
}

impl fmt::Display for WindowPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.show {
            ShowState::Normal => write!(f, "{}", self.normal_rect),
            ShowState::Minimized => write!(f, "{} minimized", self.normal_rect),
            ShowState::Maximized => write!(f, "{} maximized", self.normal_rect),
        }
    }
}

/// Reads a window's placement in its canonical form.
///
/// For a window in the normal state the reported normal position is stale when
/// the window is docked or snapped, so the real screen rectangle replaces it.
/// Normal positions of standard windows are in work-area coordinates while tool
/// windows use screen coordinates, so for standard windows the screen rectangle
/// is shifted by the monitor/work-area offset.
pub fn capture<D: Desktop + ?Sized>(
    desktop: &D,
    window: WindowId,
) -> Result<WindowPlacement, CaptureError> {
    let mut placement = desktop.placement(window)?;
    if placement.show == ShowState::Normal {
        let mut rect = desktop.window_rect(window)?;
        if !desktop.is_tool_window(window) {
            let (dx, dy) = desktop.monitor_areas(window)?.work_offset();
            rect = rect.offset(dx, dy);
        }
        placement.normal_rect = rect;
    }
    Ok(placement)
}
