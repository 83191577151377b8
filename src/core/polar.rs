use crate::core::{Indicator, Point};

/// Read-only view of the polar coordinate component shared by radar series.
///
/// Axis layout and tick math live behind this trait. Every lookup is keyed by
/// polar index and answers `None` when that instance (or axis) is not configured.
pub trait PolarCoordinateSystem {
    /// Maps `value` on axis `axis_index` to a pixel point.
    fn vector(&self, polar_index: usize, axis_index: usize, value: f64) -> Option<Point>;

    fn center(&self, polar_index: usize) -> Option<Point>;

    fn indicators(&self, polar_index: usize) -> Vec<Indicator>;

    /// Outline of the interactive drop area around one polar instance.
    fn drop_box(&self, polar_index: usize) -> Option<Vec<Point>>;

    fn axis_count(&self, polar_index: usize) -> usize {
        self.indicators(polar_index).len()
    }
}
