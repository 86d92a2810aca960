use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    desktop::{Desktop, WindowId},
    placement::{self, WindowPlacement},
};

/// Last known placement of every tracked top-level window.
#[derive(Debug, Default)]
pub struct PlacementRegistry {
    placements: HashMap<WindowId, WindowPlacement>,
}

impl PlacementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures `window` and stores it, overwriting any previous entry. A window
    /// whose placement can't be read is left untracked.
    pub fn track<D: Desktop + ?Sized>(&mut self, desktop: &D, window: WindowId) -> bool {
        match placement::capture(desktop, window) {
            Ok(placement) => {
                if let Some(title) = desktop.title(window) {
                    debug!(%window, %title, at = %placement, "adding window");
                }
                self.placements.insert(window, placement);
                true
            }
            Err(err) => {
                trace!(%window, %err, "not tracking window");
                false
            }
        }
    }

    pub fn untrack(&mut self, window: WindowId) -> Option<WindowPlacement> {
        self.placements.remove(&window)
    }

    pub fn insert(&mut self, window: WindowId, placement: WindowPlacement) {
        self.placements.insert(window, placement);
    }

    pub fn contains(&self, window: WindowId) -> bool {
        self.placements.contains_key(&window)
    }

    pub fn get(&self, window: WindowId) -> Option<&WindowPlacement> {
        self.placements.get(&window)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WindowId, &WindowPlacement)> {
        self.placements.iter().map(|(window, placement)| (*window, placement))
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
