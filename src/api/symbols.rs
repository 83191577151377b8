use crate::core::{DataIndex, Point, first_defined};
use crate::render::{
    BrushType, Color, ShapeGeometry, ShapeMeta, ShapeRecord, SymbolKind, SymbolShape,
};

use super::{DataItem, RadarSeriesDefaults, SeriesOption, StyleLayer};

/// Data item being rendered, with its position in the option tree.
#[derive(Debug, Clone, Copy)]
pub struct ItemContext<'a> {
    pub series_index: usize,
    pub series: &'a SeriesOption,
    pub data_index: usize,
    pub item: &'a DataItem,
}

impl ItemContext<'_> {
    #[must_use]
    pub fn meta(&self) -> ShapeMeta {
        ShapeMeta {
            series_index: self.series_index,
            data_index: DataIndex::Item(self.data_index),
            series_name: self.series.name_or_empty().to_owned(),
            data_name: self.item.name_or_empty().to_owned(),
            value: self.item.value.clone(),
            indicators: Vec::new(),
            vertex: None,
        }
    }

    fn layers(&self) -> [&dyn StyleLayer; 2] {
        [self.item, self.series]
    }
}

/// Picks the marker glyph for the `symbol_counter`-th rendered item of a pass.
///
/// An item or series `symbol` wins over the rotating `symbol_list`.
#[must_use]
pub fn select_symbol(
    context: &ItemContext<'_>,
    symbol_list: &[SymbolKind],
    symbol_counter: usize,
) -> SymbolKind {
    first_defined(&context.layers(), |l| l.symbol()).unwrap_or_else(|| {
        if symbol_list.is_empty() {
            SymbolKind::Circle
        } else {
            symbol_list[symbol_counter % symbol_list.len()]
        }
    })
}

/// Builds one vertex marker per projected point.
///
/// `symbol_counter` is shared by the whole build pass, so the glyph depends on
/// how many items were rendered before this one, not on `data_index`.
#[must_use]
pub fn place_symbols(
    points: &[Point],
    color: Color,
    context: &ItemContext<'_>,
    symbol_list: &[SymbolKind],
    symbol_counter: usize,
) -> Vec<ShapeRecord> {
    let symbol = select_symbol(context, symbol_list, symbol_counter);
    if symbol == SymbolKind::None {
        return Vec::new();
    }

    let layers = context.layers();
    let size = first_defined(&layers, |l| l.symbol_size())
        .unwrap_or(RadarSeriesDefaults::default().symbol_size);
    let rotate = first_defined(&layers, |l| l.symbol_rotate()).unwrap_or(0.0);
    let (brush, fill) = if symbol.is_empty() {
        (BrushType::Both, Color::WHITE)
    } else {
        (BrushType::Fill, color)
    };
    let z_level = context.series.z_level.unwrap_or_default() + 1;

    points
        .iter()
        .enumerate()
        .map(|(vertex, point)| ShapeRecord {
            geometry: ShapeGeometry::Symbol(SymbolShape {
                symbol,
                x: point.x,
                y: point.y,
                size,
                rotate,
                brush,
                fill,
                stroke: color,
            }),
            z_level,
            draggable: false,
            calculable: false,
            meta: ShapeMeta {
                vertex: Some(vertex),
                ..context.meta()
            },
        })
        .collect()
}
