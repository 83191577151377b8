use tracing::{debug, warn};

use crate::core::{DataIndex, decimal_safe_add_vectors};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{DragSession, DragStatus};
use crate::render::ShapeRecord;

use super::{DataItem, Legend, RadarOption, SeriesOption};

/// Removes the item behind `target` after it was dragged out of the chart.
///
/// No-op unless the session has a pending drag end and a target is given.
/// The pending flag is cleared on every path, including errors. `status` is
/// only touched when an item was removed.
pub fn handle_drag_out(
    series: &mut [SeriesOption],
    legend: Option<&mut dyn Legend>,
    target: Option<&ShapeRecord>,
    session: &mut DragSession,
    status: &mut DragStatus,
) -> ChartResult<()> {
    if !session.take_drag_end() {
        return Ok(());
    }
    let Some(target) = target else {
        return Ok(());
    };
    let DataIndex::Item(data_index) = target.meta.data_index else {
        debug!(
            series_index = target.meta.series_index,
            "drag out of drop box ignored"
        );
        return Ok(());
    };

    let data = series_data_mut(series, target)?;
    if data_index >= data.len() {
        return Err(stale(target));
    }

    let removed = data.remove(data_index);
    if let Some(legend) = legend {
        legend.remove(removed.name_or_empty());
    }
    debug!(
        series_index = target.meta.series_index,
        data_index,
        name = removed.name_or_empty(),
        "data item dragged out"
    );

    status.drag_out = true;
    status.need_refresh = true;
    Ok(())
}

/// Applies a shape dropped onto this chart.
///
/// Dropped on a drop box, the dragged item is appended to the box's series.
/// Dropped on an existing polygon, the two items merge: names are joined with
/// the option's `name_connector` and values are summed per axis in decimal
/// space. A value-length mismatch fails with `DataShapeMismatch` before
/// anything is modified.
pub fn handle_drag_in(
    option: &mut RadarOption,
    legend: Option<&mut dyn Legend>,
    target: Option<&ShapeRecord>,
    dragged: Option<&ShapeRecord>,
    session: &mut DragSession,
    status: &mut DragStatus,
) -> ChartResult<()> {
    if !session.take_drop() {
        return Ok(());
    }
    let Some(target) = target else {
        return Ok(());
    };
    let Some(dragged) = dragged else {
        warn!(
            series_index = target.meta.series_index,
            "drop without dragged shape ignored"
        );
        return Ok(());
    };

    let connector = option.name_connector.clone();
    let data = series_data_mut(&mut option.series, target)?;
    let legend_color = dragged.legend_color();

    match target.meta.data_index {
        DataIndex::Sentinel => {
            let item = DataItem::new(dragged.meta.data_name.clone(), dragged.meta.value.clone());
            if let Some(legend) = legend {
                legend.add(item.name_or_empty(), legend_color);
            }
            debug!(
                series_index = target.meta.series_index,
                name = item.name_or_empty(),
                "data item dropped into series"
            );
            data.push(item);
        }
        DataIndex::Item(data_index) => {
            let Some(existing) = data.get_mut(data_index) else {
                return Err(stale(target));
            };
            let merged_value = decimal_safe_add_vectors(&existing.value, &dragged.meta.value)?;
            let merged_name = format!(
                "{}{}{}",
                existing.name_or_empty(),
                connector,
                dragged.meta.data_name
            );

            if let Some(legend) = legend {
                legend.remove(existing.name_or_empty());
                legend.add(&merged_name, legend_color);
            }
            debug!(
                series_index = target.meta.series_index,
                data_index,
                name = merged_name.as_str(),
                "data items merged"
            );
            existing.name = Some(merged_name);
            existing.value = merged_value;
        }
    }

    status.drag_in = true;
    status.need_refresh = true;
    Ok(())
}

fn series_data_mut<'a>(
    series: &'a mut [SeriesOption],
    target: &ShapeRecord,
) -> ChartResult<&'a mut Vec<DataItem>> {
    series
        .get_mut(target.meta.series_index)
        .map(|series| &mut series.data)
        .ok_or_else(|| stale(target))
}

fn stale(target: &ShapeRecord) -> ChartError {
    ChartError::StaleShape {
        series_index: target.meta.series_index,
        data_index: target.meta.data_index.raw(),
    }
}
