//! In-memory desktop and virtual clock used by the unit tests.

use std::{
    cell::Cell,
    collections::BTreeMap,
    rc::Rc,
    time::{Duration, Instant},
};

use crate::{
    desktop::{Desktop, MonitorAreas, WindowId},
    error::CaptureError,
    geometry::Rect,
    placement::{ShowCommand, ShowState, WindowPlacement},
    scheduler::Clock,
};

/// An apply request the code under test sent to the desktop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetPlacement(WindowId, WindowPlacement, ShowCommand),
    ShowAsync(WindowId, ShowCommand),
}

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub placement: WindowPlacement,
    pub screen_rect: Rect,
    pub visible: bool,
    pub has_parent: bool,
    pub tool: bool,
    pub title: Option<String>,
}

#[derive(Debug, Default)]
pub struct FakeDesktop {
    pub monitors: Vec<Rect>,
    pub areas: MonitorAreas,
    pub windows: BTreeMap<WindowId, FakeWindow>,
    pub calls: Vec<Call>,
}

fn show_state_for(command: ShowCommand) -> ShowState {
    match command {
        ShowCommand::NormalNoActivate => ShowState::Normal,
        ShowCommand::MinimizedNoActivate => ShowState::Minimized,
        ShowCommand::Maximized => ShowState::Maximized,
    }
}

impl FakeDesktop {
    pub fn new(monitors: Vec<Rect>) -> Self {
        let primary = monitors.first().copied().unwrap_or_default();
        Self {
            monitors,
            areas: MonitorAreas::new(primary, primary),
            ..Default::default()
        }
    }

    /// Adds a visible top-level window whose normal position is `rect`.
    pub fn add_window(&mut self, id: isize, rect: Rect, show: ShowState) -> WindowId {
        let window = WindowId(id);
        let screen_rect = self.to_screen(rect, false);
        self.windows.insert(
            window,
            FakeWindow {
                placement: WindowPlacement::new(rect, show),
                screen_rect,
                visible: true,
                has_parent: false,
                tool: false,
                title: Some(format!("window {id}")),
            },
        );
        window
    }

    pub fn window_mut(&mut self, window: WindowId) -> &mut FakeWindow {
        self.windows.get_mut(&window).expect("unknown fake window")
    }

    /// Simulates the user moving a normal window.
    pub fn move_window(&mut self, window: WindowId, rect: Rect) {
        let tool = self.window_mut(window).tool;
        let screen_rect = self.to_screen(rect, tool);
        let win = self.window_mut(window);
        win.placement.normal_rect = rect;
        win.screen_rect = screen_rect;
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    fn to_screen(&self, rect: Rect, tool: bool) -> Rect {
        if tool {
            return rect;
        }
        let (dx, dy) = self.areas.work_offset();
        rect.offset(-dx, -dy)
    }
}

impl Desktop for FakeDesktop {
    fn monitors(&self) -> Vec<Rect> {
        self.monitors.clone()
    }

    fn windows(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    fn is_application_window(&self, window: WindowId) -> bool {
        self.windows
            .get(&window)
            .is_some_and(|win| win.visible && !win.has_parent)
    }

    fn title(&self, window: WindowId) -> Option<String> {
        self.windows.get(&window)?.title.clone()
    }

    fn placement(&self, window: WindowId) -> Result<WindowPlacement, CaptureError> {
        self.windows
            .get(&window)
            .map(|win| win.placement)
            .ok_or(CaptureError::Gone(window))
    }

    fn window_rect(&self, window: WindowId) -> Result<Rect, CaptureError> {
        self.windows
            .get(&window)
            .map(|win| win.screen_rect)
            .ok_or(CaptureError::RectUnavailable(window))
    }

    fn is_tool_window(&self, window: WindowId) -> bool {
        self.windows.get(&window).is_some_and(|win| win.tool)
    }

    fn monitor_areas(&self, window: WindowId) -> Result<MonitorAreas, CaptureError> {
        if self.windows.contains_key(&window) {
            Ok(self.areas)
        } else {
            Err(CaptureError::MonitorUnavailable(window))
        }
    }

    fn set_placement(&mut self, window: WindowId, placement: &WindowPlacement, command: ShowCommand) {
        self.calls
            .push(Call::SetPlacement(window, *placement, command));
        let Some(tool) = self.windows.get(&window).map(|win| win.tool) else {
            return;
        };
        let screen_rect = self.to_screen(placement.normal_rect, tool);
        let win = self.window_mut(window);
        win.placement.normal_rect = placement.normal_rect;
        win.placement.min_position = placement.min_position;
        win.placement.max_position = placement.max_position;
        win.placement.show = show_state_for(command);
        win.screen_rect = screen_rect;
    }

    fn show_async(&mut self, window: WindowId, command: ShowCommand) {
        self.calls.push(Call::ShowAsync(window, command));
        if let Some(win) = self.windows.get_mut(&window) {
            win.placement.show = show_state_for(command);
        }
    }
}

/// Virtual clock; clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
