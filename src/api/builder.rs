use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{Indicator, project_point_list};
use crate::render::{BrushType, PolygonShape, ShapeGeometry, ShapeRecord};

use super::style::{item_area_fill_enabled, resolve_item_style};
use super::symbols::{ItemContext, place_symbols};
use super::{Collaborators, DropBoxEntry, DropTargetRegistry, RadarOption, SeriesOption};

/// Legend visibility per series or item name, as observed during a build.
pub type SelectionMap = IndexMap<String, bool>;

/// Everything one build pass produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildOutput {
    /// Shapes in construction order: drop boxes, markers, polygons and marks interleaved.
    pub shapes: Vec<ShapeRecord>,
    pub selection: SelectionMap,
}

/// Mutable state scoped to a single pass; never outlives `build`.
#[derive(Debug, Default)]
struct BuildPass {
    output: BuildOutput,
    drop_boxes: DropTargetRegistry,
    /// Advances once per rendered item across all series.
    symbol_counter: usize,
}

/// Turns radar series options into renderable shapes.
///
/// The builder holds no state between calls, so every `build` starts from
/// scratch and shape metadata always indexes the option it was built from.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadarSeriesBuilder;

impl RadarSeriesBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn build(
        &self,
        option: &RadarOption,
        collaborators: &mut Collaborators<'_>,
    ) -> BuildOutput {
        let mut pass = BuildPass::default();

        for (series_index, raw_series) in option.series.iter().enumerate() {
            if !raw_series.is_radar() {
                continue;
            }
            let series = raw_series.resolved(&option.series_defaults);
            let series_name = series.name_or_empty().to_owned();
            let visible = collaborators.is_selected(&series_name);
            pass.output.selection.insert(series_name.clone(), visible);
            if !visible {
                trace!(
                    series_index,
                    name = series_name.as_str(),
                    "series hidden by legend"
                );
                continue;
            }

            let calculable = option.series_calculable(&series);
            if calculable {
                let polar_index = series
                    .polar_index
                    .unwrap_or(option.series_defaults.polar_index);
                let entry = pass.drop_boxes.ensure(
                    polar_index,
                    series_index,
                    &series_name,
                    series.z_level.unwrap_or_default(),
                    collaborators.polar,
                );
                if let Some(DropBoxEntry::Created(shape)) = entry {
                    pass.output.shapes.push(shape.clone());
                }
            }

            self.build_single_series(
                &mut pass,
                option,
                series_index,
                &series,
                calculable,
                collaborators,
            );

            let marks = collaborators
                .marks
                .build_marks(&series, series_index, collaborators.polar);
            pass.output.shapes.extend(marks);
        }

        debug!(
            shape_count = pass.output.shapes.len(),
            drop_boxes = pass.drop_boxes.len(),
            rendered_items = pass.symbol_counter,
            "radar build pass complete"
        );
        pass.output
    }

    fn build_single_series(
        &self,
        pass: &mut BuildPass,
        option: &RadarOption,
        series_index: usize,
        series: &SeriesOption,
        calculable: bool,
        collaborators: &mut Collaborators<'_>,
    ) {
        let polar_index = series
            .polar_index
            .unwrap_or(option.series_defaults.polar_index);
        let indicators: Vec<Indicator> = collaborators.polar.indicators(polar_index);
        let z_level = series.z_level.unwrap_or_default();

        for (data_index, item) in series.data.iter().enumerate() {
            let name = item.name_or_empty();
            let visible = collaborators.is_selected(name);
            pass.output.selection.insert(name.to_owned(), visible);
            if !visible {
                continue;
            }

            let fallback = match collaborators.legend.as_deref_mut() {
                Some(legend) => {
                    // `color` registers unknown names, so it must run before the brush update.
                    let color = legend.color(name);
                    let brush = BrushType::for_area_fill(item_area_fill_enabled(item, series));
                    legend.set_item_brush(name, brush);
                    color
                }
                None => option.palette_color(data_index),
            };

            let points = project_point_list(collaborators.polar, polar_index, &item.value);
            let context = ItemContext {
                series_index,
                series,
                data_index,
                item,
            };
            let style = resolve_item_style(item, series, fallback);

            pass.output.shapes.extend(place_symbols(
                &points,
                style.normal.stroke,
                &context,
                &option.symbol_list,
                pass.symbol_counter,
            ));

            let mut meta = context.meta();
            meta.indicators = indicators.clone();
            pass.output.shapes.push(ShapeRecord {
                geometry: ShapeGeometry::Polygon(PolygonShape {
                    points: points.to_vec(),
                    normal: style.normal.polygon_style(),
                    emphasis: style.emphasis.polygon_style(),
                }),
                z_level,
                draggable: calculable,
                calculable,
                meta,
            });

            trace!(
                series_index,
                data_index,
                vertices = points.len(),
                symbol_counter = pass.symbol_counter,
                "built radar polygon"
            );
            pass.symbol_counter += 1;
        }
    }
}
