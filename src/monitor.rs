use crate::{desktop::Desktop, geometry::Rect};

/// Snapshot of the display rectangles in OS enumeration order.
///
/// Both comparisons correlate monitors by index. Enumeration order is assumed
/// to be stable within a session; no geometric matching is attempted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MonitorLayout {
    monitors: Vec<Rect>,
}

impl MonitorLayout {
    pub fn new(monitors: Vec<Rect>) -> Self {
        Self { monitors }
    }

    pub fn capture<D: Desktop + ?Sized>(desktop: &D) -> Self {
        Self::new(desktop.monitors())
    }

    pub fn monitors(&self) -> &[Rect] {
        &self.monitors
    }

    /// Same monitor count and every monitor has the baseline's size. Positions
    /// are ignored.
    pub fn matches_desired_sizes(&self, baseline: &MonitorLayout) -> bool {
        self.monitors.len() == baseline.monitors.len()
            && self
                .monitors
                .iter()
                .zip(&baseline.monitors)
                .all(|(current, desired)| current.same_size(desired))
    }

    /// Nothing changed at all, positions included.
    pub fn is_identical(&self, baseline: &MonitorLayout) -> bool {
        self.monitors == baseline.monitors
    }
}
