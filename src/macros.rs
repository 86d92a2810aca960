#[macro_export]
macro_rules! hwnd {
    ($window:expr) => {
        windows::Win32::Foundation::HWND($window.0 as *mut std::ffi::c_void)
    };
}
