use std::{collections::HashMap, mem};

use crate::{desktop::WindowId, placement::WindowPlacement, registry::PlacementRegistry};

/// Two-generation buffer that coalesces movement notifications.
///
/// Writes always land in `next`. A commit flushes `current` into the registry
/// and rotates `next` into its place, so a committed value is at least one full
/// interval old and a window moved many times in one interval is written once.
#[derive(Debug, Default)]
pub struct PendingUpdates {
    current: HashMap<WindowId, WindowPlacement>,
    next: HashMap<WindowId, WindowPlacement>,
}

impl PendingUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, window: WindowId, placement: WindowPlacement) {
        self.next.insert(window, placement);
    }

    /// Flushes `current` into `registry` and rotates generations. Returns how
    /// many registry writes were made.
    pub fn commit_into(&mut self, registry: &mut PlacementRegistry) -> usize {
        let written = self.current.len();
        for (window, placement) in self.current.drain() {
            registry.insert(window, placement);
        }
        mem::swap(&mut self.current, &mut self.next);
        written
    }

    /// Whether the generation due at the next commit holds anything.
    pub fn has_due(&self) -> bool {
        !self.current.is_empty()
    }

    pub fn remove(&mut self, window: WindowId) {
        self.current.remove(&window);
        self.next.remove(&window);
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.next.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.next.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, window: WindowId) -> bool {
        self.current.contains_key(&window) || self.next.contains_key(&window)
    }
}
