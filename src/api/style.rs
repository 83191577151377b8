use crate::core::{first_defined, is_defined};
use crate::render::{BrushType, Color, LineStrokeStyle, PolygonStyle};

use super::{DataItem, RadarSeriesDefaults, SeriesOption, StyleLayer};

/// Alpha applied to the fallback color when nothing sets a fill.
pub const DEFAULT_FILL_ALPHA: f64 = 0.5;

/// Paint for one interaction state after the item > series cascade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStateStyle {
    /// Explicitly configured color, if any layer set one.
    pub color: Option<Color>,
    pub area_color: Option<Color>,
    pub area_fill_enabled: bool,
    pub line_width: f64,
    pub line_type: LineStrokeStyle,
    pub fill: Color,
    pub stroke: Color,
}

impl ResolvedStateStyle {
    #[must_use]
    pub fn brush(&self) -> BrushType {
        BrushType::for_area_fill(self.area_fill_enabled)
    }

    #[must_use]
    pub fn polygon_style(&self) -> PolygonStyle {
        PolygonStyle {
            brush: self.brush(),
            fill: self.fill,
            stroke: self.stroke,
            line_width: self.line_width,
            line_type: self.line_type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedItemStyle {
    pub normal: ResolvedStateStyle,
    pub emphasis: ResolvedStateStyle,
}

/// Resolves polygon paint for `item` inside `series`.
///
/// Each field is looked up on the item first, then the series. Emphasis
/// fields fall back to the resolved normal value. `fallback` is the legend or
/// palette color; fills derived from it are drawn at `DEFAULT_FILL_ALPHA`.
#[must_use]
pub fn resolve_item_style(
    item: &DataItem,
    series: &SeriesOption,
    fallback: Color,
) -> ResolvedItemStyle {
    let layers: [&dyn StyleLayer; 2] = [item, series];
    let defaults = RadarSeriesDefaults::default();
    let translucent_fallback = fallback.with_alpha(DEFAULT_FILL_ALPHA);

    let color = first_defined(&layers, |l| l.item_style().normal.color);
    let line_width = first_defined(&layers, |l| l.item_style().normal.line_style.width)
        .unwrap_or(defaults.line_width);
    let line_type = first_defined(&layers, |l| l.item_style().normal.line_style.line_type)
        .unwrap_or(defaults.line_type);
    let area_color = first_defined(&layers, |l| {
        l.item_style().normal.area_style.and_then(|area| area.color)
    });
    let area_fill_enabled = is_defined(&layers, |l| l.item_style().normal.area_style);

    let normal = ResolvedStateStyle {
        color,
        area_color,
        area_fill_enabled,
        line_width,
        line_type,
        fill: area_color.or(color).unwrap_or(translucent_fallback),
        stroke: color.unwrap_or(fallback),
    };

    let emphasis_color = first_defined(&layers, |l| l.item_style().emphasis.color);
    let emphasis_area_color = first_defined(&layers, |l| {
        l.item_style().emphasis.area_style.and_then(|area| area.color)
    });
    let emphasis_area_fill = is_defined(&layers, |l| l.item_style().emphasis.area_style);

    let emphasis = ResolvedStateStyle {
        color: emphasis_color.or(color),
        area_color: emphasis_area_color.or(area_color),
        area_fill_enabled: emphasis_area_fill || area_fill_enabled,
        line_width: first_defined(&layers, |l| l.item_style().emphasis.line_style.width)
            .unwrap_or(line_width),
        line_type: first_defined(&layers, |l| l.item_style().emphasis.line_style.line_type)
            .unwrap_or(line_type),
        // The emphasis fill ignores the emphasis color; only area colors override it.
        fill: emphasis_area_color.unwrap_or(normal.fill),
        stroke: emphasis_color.unwrap_or(normal.stroke),
    };

    ResolvedItemStyle { normal, emphasis }
}

/// Whether the legend icon for `item` should be drawn filled.
#[must_use]
pub fn item_area_fill_enabled(item: &DataItem, series: &SeriesOption) -> bool {
    let layers: [&dyn StyleLayer; 2] = [item, series];
    is_defined(&layers, |l| l.item_style().normal.area_style)
}
