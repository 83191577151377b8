use crate::error::ChartResult;
use crate::interaction::{DragSession, DragStatus};
use crate::render::ShapeRecord;

use super::{RadarOption, SeriesType};

/// Lifecycle shared by every series component: rebuild shapes from an option.
pub trait BaseSeriesComponent {
    fn series_type(&self) -> SeriesType;

    /// Replaces the option when given, then clears and rebuilds all shapes.
    fn refresh(&mut self, option: Option<RadarOption>);

    fn clear(&mut self);

    fn shapes(&self) -> &[ShapeRecord];
}

/// Drag-based editing for components whose data can be moved between charts.
pub trait CalculableSeriesComponent {
    /// A shape of this component was dropped outside of it.
    fn on_drag_end(
        &mut self,
        target: Option<&ShapeRecord>,
        session: &mut DragSession,
        status: &mut DragStatus,
    ) -> ChartResult<()>;

    /// A shape was dropped on `target`, one of this component's shapes.
    fn on_drop(
        &mut self,
        target: Option<&ShapeRecord>,
        dragged: Option<&ShapeRecord>,
        session: &mut DragSession,
        status: &mut DragStatus,
    ) -> ChartResult<()>;
}
