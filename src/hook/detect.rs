use anyhow::{Context, Result, bail};
use windows::{
    Win32::{
        Foundation::{GetLastError, HWND, LPARAM, LRESULT, WPARAM},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            CreateWindowExW, DefWindowProcW, RegisterClassW, WINDOW_EX_STYLE, WM_DISPLAYCHANGE,
            WNDCLASSW, WS_DISABLED, WS_OVERLAPPEDWINDOW,
        },
    },
    core::{PCWSTR, w},
};

use crate::{dispatch, event::TrackerEvent};

const CLASS_NAME: PCWSTR = w!("RestoreWindows detection window class");
const WINDOW_NAME: PCWSTR = w!("RestoreWindows detection window");

/// Creates the hidden top-level window that receives `WM_DISPLAYCHANGE`
/// broadcasts. Must be called on the thread that pumps messages.
pub fn create_detection_window() -> Result<HWND> {
    unsafe {
        let instance = GetModuleHandleW(None).context("no module handle")?;
        let class = WNDCLASSW {
            lpfnWndProc: Some(detection_proc),
            hInstance: instance.into(),
            lpszClassName: CLASS_NAME,
            ..Default::default()
        };
        if RegisterClassW(&class) == 0 {
            bail!("failed to register detection window class ({:?})", GetLastError());
        }
        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            CLASS_NAME,
            WINDOW_NAME,
            WS_OVERLAPPEDWINDOW | WS_DISABLED,
            0,
            0,
            0,
            0,
            None,
            None,
            Some(instance.into()),
            None,
        )
        .context("failed to create detection window")?;
        Ok(hwnd)
    }
}

unsafe extern "system" fn detection_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if msg == WM_DISPLAYCHANGE {
        dispatch::channel_send(TrackerEvent::DisplayChanged);
    }
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}
