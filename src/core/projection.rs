use smallvec::SmallVec;

use crate::core::{Point, PolarCoordinateSystem};

/// Point list for one radar polygon. Most radars have few spokes.
pub type PointList = SmallVec<[Point; 8]>;

/// Projects a per-axis value vector into pixel points.
///
/// Axes the polar system cannot resolve are skipped, so the result keeps
/// ascending axis order but may be shorter than `values`. The polygon is left
/// open; closing it is up to the renderer.
pub fn project_point_list(
    polar: &dyn PolarCoordinateSystem,
    polar_index: usize,
    values: &[f64],
) -> PointList {
    values
        .iter()
        .enumerate()
        .filter_map(|(axis_index, value)| polar.vector(polar_index, axis_index, *value))
        .collect()
}
