use tracing::debug;

use crate::core::PolarCoordinateSystem;
use crate::error::ChartResult;
use crate::interaction::{DragSession, DragStatus};
use crate::render::{RenderFrame, Renderer, ShapeRecord};

use super::animation::plan_entrance_animation;
use super::drag::{handle_drag_in, handle_drag_out};
use super::{
    AnimationTask, BaseSeriesComponent, CalculableSeriesComponent, Collaborators, Legend,
    MarkBuilder, NoMarks, RadarOption, RadarSeriesBuilder, SelectionMap, SeriesType,
};

/// Radar chart component: owns the option, its collaborators and the last
/// built shape list.
///
/// Shapes are rebuilt from scratch by `refresh`; drag handlers mutate the
/// option and report through `DragStatus` whether a refresh is due.
pub struct RadarChart<R: Renderer> {
    renderer: R,
    option: RadarOption,
    polar: Box<dyn PolarCoordinateSystem>,
    marks: Box<dyn MarkBuilder>,
    legend: Option<Box<dyn Legend>>,
    builder: RadarSeriesBuilder,
    shapes: Vec<ShapeRecord>,
    selection: SelectionMap,
}

impl<R: Renderer> RadarChart<R> {
    /// Creates the chart and runs the first build pass.
    pub fn new(
        renderer: R,
        option: RadarOption,
        polar: impl PolarCoordinateSystem + 'static,
    ) -> Self {
        let mut chart = Self {
            renderer,
            option,
            polar: Box::new(polar),
            marks: Box::new(NoMarks),
            legend: None,
            builder: RadarSeriesBuilder::new(),
            shapes: Vec::new(),
            selection: SelectionMap::new(),
        };
        chart.rebuild();
        chart
    }

    #[must_use]
    pub fn with_legend(mut self, legend: impl Legend + 'static) -> Self {
        self.legend = Some(Box::new(legend));
        self.rebuild();
        self
    }

    #[must_use]
    pub fn with_mark_builder(mut self, marks: impl MarkBuilder + 'static) -> Self {
        self.marks = Box::new(marks);
        self.rebuild();
        self
    }

    #[must_use]
    pub fn option(&self) -> &RadarOption {
        &self.option
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    #[must_use]
    pub fn legend(&self) -> Option<&dyn Legend> {
        self.legend.as_deref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Rebuilds when a drag handler asked for it. Returns whether it did.
    pub fn refresh_if_needed(&mut self, status: DragStatus) -> bool {
        if status.need_refresh {
            self.rebuild();
        }
        status.need_refresh
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = RenderFrame::new(self.shapes.clone());
        self.renderer.render(&frame)
    }

    /// Entrance animation for the current shapes, followed by mark animations.
    #[must_use]
    pub fn animation_plan(&self) -> Vec<AnimationTask> {
        let mut tasks = plan_entrance_animation(&self.shapes, &self.option, self.polar.as_ref());
        if self.option.animation {
            tasks.extend(self.marks.plan_animation(
                &self.shapes,
                self.option.animation_duration,
                self.option.animation_easing,
            ));
        }
        tasks
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn rebuild(&mut self) {
        self.shapes.clear();
        self.selection.clear();
        let legend = self
            .legend
            .as_deref_mut()
            .map(|legend| legend as &mut dyn Legend);
        let mut collaborators = Collaborators {
            legend,
            polar: self.polar.as_ref(),
            marks: self.marks.as_ref(),
        };
        let output = self.builder.build(&self.option, &mut collaborators);
        debug!(shape_count = output.shapes.len(), "radar chart rebuilt");
        self.shapes = output.shapes;
        self.selection = output.selection;
    }
}

impl<R: Renderer> BaseSeriesComponent for RadarChart<R> {
    fn series_type(&self) -> SeriesType {
        SeriesType::Radar
    }

    fn refresh(&mut self, option: Option<RadarOption>) {
        if let Some(option) = option {
            self.option = option;
        }
        self.rebuild();
    }

    fn clear(&mut self) {
        self.shapes.clear();
        self.selection.clear();
    }

    fn shapes(&self) -> &[ShapeRecord] {
        &self.shapes
    }
}

impl<R: Renderer> CalculableSeriesComponent for RadarChart<R> {
    fn on_drag_end(
        &mut self,
        target: Option<&ShapeRecord>,
        session: &mut DragSession,
        status: &mut DragStatus,
    ) -> ChartResult<()> {
        let legend = self
            .legend
            .as_deref_mut()
            .map(|legend| legend as &mut dyn Legend);
        handle_drag_out(&mut self.option.series, legend, target, session, status)
    }

    fn on_drop(
        &mut self,
        target: Option<&ShapeRecord>,
        dragged: Option<&ShapeRecord>,
        session: &mut DragSession,
        status: &mut DragStatus,
    ) -> ChartResult<()> {
        let legend = self
            .legend
            .as_deref_mut()
            .map(|legend| legend as &mut dyn Legend);
        handle_drag_in(&mut self.option, legend, target, dragged, session, status)
    }
}
