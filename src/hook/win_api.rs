use std::{ffi::OsString, os::windows::ffi::OsStringExt, thread::JoinHandle, time::Duration};

use tracing::{debug, error, warn};
use windows::{
    Win32::{
        Foundation::{FALSE, HWND, LPARAM, POINT, RECT, TRUE},
        Graphics::Gdi::{
            EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITOR_DEFAULTTONEAREST,
            MONITORINFO, MonitorFromWindow,
        },
        UI::{
            Accessibility::{HWINEVENTHOOK, SetWinEventHook, UnhookWinEvent},
            WindowsAndMessaging::{
                DispatchMessageW, EVENT_MAX, EVENT_MIN, EnumWindows, GWL_EXSTYLE, GetMessageW,
                GetParent, GetWindowLongW, GetWindowPlacement, GetWindowRect,
                GetWindowTextLengthW, GetWindowTextW, IsWindow, IsWindowVisible, MSG,
                SHOW_WINDOW_CMD, SW_SHOWMAXIMIZED, SW_SHOWMINIMIZED, SW_SHOWMINNOACTIVE,
                SW_SHOWNOACTIVATE, SetWindowPlacement, ShowWindowAsync, TranslateMessage,
                WINDOW_EX_STYLE, WINDOWPLACEMENT, WINDOWPLACEMENT_FLAGS, WINEVENT_OUTOFCONTEXT,
                WS_EX_TOOLWINDOW,
            },
        },
    },
    core::BOOL,
};

use crate::{
    desktop::{Desktop, MonitorAreas, WindowId},
    dispatch,
    error::CaptureError,
    geometry::{Point, Rect},
    hook::{detect, win_event},
    hwnd,
    placement::{PlacementFlags, ShowCommand, ShowState, WindowPlacement},
};

impl From<HWND> for WindowId {
    fn from(value: HWND) -> Self {
        Self(value.0 as isize)
    }
}

impl From<RECT> for Rect {
    fn from(rect: RECT) -> Self {
        Rect::new(rect.left, rect.top, rect.right, rect.bottom)
    }
}

impl From<Rect> for RECT {
    fn from(rect: Rect) -> Self {
        RECT {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        }
    }
}

fn show_window_cmd(command: ShowCommand) -> SHOW_WINDOW_CMD {
    match command {
        ShowCommand::NormalNoActivate => SW_SHOWNOACTIVATE,
        ShowCommand::MinimizedNoActivate => SW_SHOWMINNOACTIVE,
        ShowCommand::Maximized => SW_SHOWMAXIMIZED,
    }
}

fn from_raw_placement(raw: &WINDOWPLACEMENT) -> WindowPlacement {
    let show = match raw.showCmd {
        cmd if cmd == SW_SHOWMINIMIZED.0 as u32 => ShowState::Minimized,
        cmd if cmd == SW_SHOWMAXIMIZED.0 as u32 => ShowState::Maximized,
        _ => ShowState::Normal,
    };
    WindowPlacement {
        flags: PlacementFlags::from_bits_truncate(raw.flags.0),
        show,
        min_position: Point::new(raw.ptMinPosition.x, raw.ptMinPosition.y),
        max_position: Point::new(raw.ptMaxPosition.x, raw.ptMaxPosition.y),
        normal_rect: raw.rcNormalPosition.into(),
    }
}

fn to_raw_placement(placement: &WindowPlacement, command: ShowCommand) -> WINDOWPLACEMENT {
    WINDOWPLACEMENT {
        length: std::mem::size_of::<WINDOWPLACEMENT>() as u32,
        flags: WINDOWPLACEMENT_FLAGS(placement.flags.bits()),
        showCmd: show_window_cmd(command).0 as u32,
        ptMinPosition: POINT {
            x: placement.min_position.x,
            y: placement.min_position.y,
        },
        ptMaxPosition: POINT {
            x: placement.max_position.x,
            y: placement.max_position.y,
        },
        rcNormalPosition: placement.normal_rect.into(),
    }
}

fn is_window(window: WindowId) -> bool {
    unsafe { IsWindow(Some(hwnd!(window))) } != FALSE
}

fn monitor_info(hmonitor: HMONITOR) -> Option<MONITORINFO> {
    let mut mi = MONITORINFO {
        cbSize: std::mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };
    unsafe { GetMonitorInfoW(hmonitor, &mut mi) }
        .as_bool()
        .then_some(mi)
}

/// The live Win32 desktop.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Desktop;

impl Desktop for Win32Desktop {
    fn monitors(&self) -> Vec<Rect> {
        get_all_monitors()
    }

    fn windows(&self) -> Vec<WindowId> {
        let mut handles: Vec<WindowId> = Vec::new();
        if let Err(err) = unsafe {
            EnumWindows(
                Some(collect_windows),
                LPARAM(&mut handles as *mut _ as isize),
            )
        } {
            warn!("error listing windows {err}");
        }
        handles
    }

    fn is_application_window(&self, window: WindowId) -> bool {
        let hwnd = hwnd!(window);
        unsafe { IsWindowVisible(hwnd).as_bool() && GetParent(hwnd).is_err() }
    }

    fn title(&self, window: WindowId) -> Option<String> {
        let hwnd = hwnd!(window);
        unsafe {
            let length = GetWindowTextLengthW(hwnd);
            if length == 0 {
                return None;
            }
            let mut buffer: Vec<u16> = vec![0; (length + 1) as usize];
            let copied = GetWindowTextW(hwnd, &mut buffer);
            if copied > 0 {
                buffer.truncate(copied as usize);
                Some(OsString::from_wide(&buffer).to_string_lossy().into_owned())
            } else {
                None
            }
        }
    }

    fn placement(&self, window: WindowId) -> Result<WindowPlacement, CaptureError> {
        if !is_window(window) {
            return Err(CaptureError::Gone(window));
        }
        let mut raw = WINDOWPLACEMENT {
            length: std::mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };
        unsafe { GetWindowPlacement(hwnd!(window), &mut raw) }
            .map_err(|_| CaptureError::PlacementUnavailable(window))?;
        Ok(from_raw_placement(&raw))
    }

    fn window_rect(&self, window: WindowId) -> Result<Rect, CaptureError> {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(hwnd!(window), &mut rect) }
            .map_err(|_| CaptureError::RectUnavailable(window))?;
        Ok(rect.into())
    }

    fn is_tool_window(&self, window: WindowId) -> bool {
        let ex_style = WINDOW_EX_STYLE(unsafe { GetWindowLongW(hwnd!(window), GWL_EXSTYLE) } as u32);
        ex_style.contains(WS_EX_TOOLWINDOW)
    }

    fn monitor_areas(&self, window: WindowId) -> Result<MonitorAreas, CaptureError> {
        let hmonitor = unsafe { MonitorFromWindow(hwnd!(window), MONITOR_DEFAULTTONEAREST) };
        let mi = monitor_info(hmonitor).ok_or(CaptureError::MonitorUnavailable(window))?;
        Ok(MonitorAreas::new(mi.rcMonitor.into(), mi.rcWork.into()))
    }

    fn set_placement(&mut self, window: WindowId, placement: &WindowPlacement, command: ShowCommand) {
        if !is_window(window) {
            return;
        }
        let raw = to_raw_placement(placement, command);
        _ = unsafe { SetWindowPlacement(hwnd!(window), &raw) };
    }

    fn show_async(&mut self, window: WindowId, command: ShowCommand) {
        if !is_window(window) {
            return;
        }
        _ = unsafe { ShowWindowAsync(hwnd!(window), show_window_cmd(command)) };
    }
}

// ---------------------------------------------------------------------------
// Enumeration callbacks
// ---------------------------------------------------------------------------

pub fn get_all_monitors() -> Vec<Rect> {
    let mut monitors: Vec<Rect> = Vec::new();
    unsafe {
        _ = EnumDisplayMonitors(
            None,
            None,
            Some(monitor_enum_proc),
            LPARAM(&mut monitors as *mut _ as isize),
        );
    }
    monitors
}

unsafe extern "system" fn monitor_enum_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    lprc_monitor: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let monitors = unsafe { &mut *(lparam.0 as *mut Vec<Rect>) };
    // Every enumerated monitor must land in the snapshot, or the count
    // comparison reports a layout change that never happened.
    match unsafe { lprc_monitor.as_ref() } {
        Some(rect) => monitors.push((*rect).into()),
        None => match monitor_info(hmonitor) {
            Some(mi) => monitors.push(mi.rcMonitor.into()),
            None => warn!("monitor {hmonitor:?} has no rectangle"),
        },
    }
    TRUE
}

extern "system" fn collect_windows(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<WindowId>) };
    handles.push(WindowId::from(hwnd));
    TRUE
}

// ---------------------------------------------------------------------------
// Event router
// ---------------------------------------------------------------------------

extern "system" fn win_event_hook(
    _win_event_hook: HWINEVENTHOOK,
    event: u32,
    hwnd: HWND,
    id_object: i32,
    _id_child: i32,
    _id_event_thread: u32,
    _dwms_event_time: u32,
) {
    if let Some(event) = win_event::route(event, WindowId::from(hwnd), id_object) {
        dispatch::channel_send(event);
    }
}

/// Installs the WinEvent hook and the display-change window on a dedicated
/// thread and pumps its messages. Notifications are forwarded to the dispatch
/// channel.
pub fn spawn_event_router() -> JoinHandle<()> {
    std::thread::spawn(|| {
        let hook = unsafe {
            SetWinEventHook(
                EVENT_MIN,
                EVENT_MAX,
                None,
                Some(win_event_hook),
                0,
                0,
                WINEVENT_OUTOFCONTEXT,
            )
        };
        if hook.is_invalid() {
            error!("failed to install window event hook");
        }
        let _detection = match detect::create_detection_window() {
            Ok(hwnd) => Some(hwnd),
            Err(err) => {
                error!("display changes will go unnoticed: {err:#}");
                None
            }
        };

        let mut msg: MSG = MSG::default();
        loop {
            unsafe {
                if !GetMessageW(&mut msg, None, 0, 0).as_bool() {
                    break;
                }
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
            std::thread::sleep(Duration::ZERO);
        }

        debug!("event router message loop ended");
        if !hook.is_invalid() {
            _ = unsafe { UnhookWinEvent(hook) };
        }
    })
}
