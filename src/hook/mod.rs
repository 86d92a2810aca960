pub mod win_event;

#[cfg(windows)]
pub mod detect;
#[cfg(windows)]
pub mod instance;
#[cfg(windows)]
pub mod win_api;
