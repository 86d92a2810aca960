use anyhow::{Context, Result};
use windows::{
    Win32::{
        Foundation::{CloseHandle, ERROR_ALREADY_EXISTS, GetLastError, HANDLE},
        System::Threading::CreateMutexW,
    },
    core::w,
};

/// Named mutex held for the lifetime of the process so only one tracker runs
/// per session.
pub struct InstanceGuard(HANDLE);

impl InstanceGuard {
    /// `None` when another instance already owns the mutex.
    pub fn acquire() -> Result<Option<Self>> {
        unsafe {
            let handle = CreateMutexW(None, true, w!("RestoreWindowsMutex"))
                .context("failed to create instance mutex")?;
            if GetLastError() == ERROR_ALREADY_EXISTS {
                _ = CloseHandle(handle);
                return Ok(None);
            }
            Ok(Some(Self(handle)))
        }
    }
}

impl Drop for InstanceGuard {
    fn drop(&mut self) {
        unsafe {
            _ = CloseHandle(self.0);
        }
    }
}
