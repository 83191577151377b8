use crate::core::PolarCoordinateSystem;
use crate::render::{BrushType, Color, ShapeRecord};

use super::{AnimationTask, Easing, SeriesOption};

/// Legend component as seen by radar series.
///
/// Names are shared between series and data items: a hidden series name hides
/// the whole series, a hidden item name hides that polygon.
pub trait Legend {
    fn is_selected(&self, name: &str) -> bool;

    /// Color assigned to `name`; a legend may allocate one on first use.
    fn color(&mut self, name: &str) -> Color;

    /// Switches the legend icon for `name` between filled and outlined.
    fn set_item_brush(&mut self, name: &str, brush: BrushType);

    fn add(&mut self, name: &str, color: Color);

    fn remove(&mut self, name: &str);
}

/// Builds mark-point / mark-line decorations for one series.
pub trait MarkBuilder {
    fn build_marks(
        &self,
        series: &SeriesOption,
        series_index: usize,
        polar: &dyn PolarCoordinateSystem,
    ) -> Vec<ShapeRecord>;

    fn plan_animation(
        &self,
        _shapes: &[ShapeRecord],
        _duration_ms: u32,
        _easing: Easing,
    ) -> Vec<AnimationTask> {
        Vec::new()
    }
}

/// Components a build pass talks to. Only the polar system is mandatory.
pub struct Collaborators<'a> {
    pub legend: Option<&'a mut dyn Legend>,
    pub polar: &'a dyn PolarCoordinateSystem,
    pub marks: &'a dyn MarkBuilder,
}

impl<'a> Collaborators<'a> {
    #[must_use]
    pub fn new(polar: &'a dyn PolarCoordinateSystem, marks: &'a dyn MarkBuilder) -> Self {
        Self {
            legend: None,
            polar,
            marks,
        }
    }

    #[must_use]
    pub fn with_legend(mut self, legend: &'a mut dyn Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Legend selection for `name`; everything is visible without a legend.
    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.legend
            .as_deref()
            .is_none_or(|legend| legend.is_selected(name))
    }
}

/// Mark builder for charts without mark points or mark lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMarks;

impl MarkBuilder for NoMarks {
    fn build_marks(
        &self,
        _series: &SeriesOption,
        _series_index: usize,
        _polar: &dyn PolarCoordinateSystem,
    ) -> Vec<ShapeRecord> {
        Vec::new()
    }
}
