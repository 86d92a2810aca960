mod macros;

pub mod config;
pub mod desktop;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod geometry;
pub mod hook;
pub mod logging;
pub mod monitor;
pub mod pending;
pub mod placement;
pub mod registry;
pub mod restore;
pub mod scheduler;
pub mod tracker;

#[cfg(test)]
mod testing;
