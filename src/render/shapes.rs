use serde::{Deserialize, Serialize};

use crate::core::{DataIndex, Indicator, Point};
use crate::error::{ChartError, ChartResult};
use crate::render::{BrushType, Color, LineStrokeStyle};

/// Marker glyph drawn at polygon vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolKind {
    Circle,
    Rectangle,
    Triangle,
    Diamond,
    EmptyCircle,
    EmptyRectangle,
    EmptyTriangle,
    EmptyDiamond,
    /// Suppresses vertex markers.
    None,
}

impl SymbolKind {
    /// Hollow glyphs are filled with the background color and stroked with the item color.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(
            self,
            Self::EmptyCircle | Self::EmptyRectangle | Self::EmptyTriangle | Self::EmptyDiamond
        )
    }
}

/// Fully resolved paint for one interaction state of a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    pub brush: BrushType,
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f64,
    pub line_type: LineStrokeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonShape {
    pub points: Vec<Point>,
    pub normal: PolygonStyle,
    pub emphasis: PolygonStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolShape {
    pub symbol: SymbolKind,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub rotate: f64,
    pub brush: BrushType,
    pub fill: Color,
    pub stroke: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropBoxShape {
    pub points: Vec<Point>,
    pub fill: Color,
    pub stroke: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapeGeometry {
    Polygon(PolygonShape),
    Symbol(SymbolShape),
    DropBox(DropBoxShape),
}

/// Back-reference from a shape to the data it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeMeta {
    pub series_index: usize,
    pub data_index: DataIndex,
    pub series_name: String,
    pub data_name: String,
    pub value: Vec<f64>,
    pub indicators: Vec<Indicator>,
    /// Vertex ordinal for markers.
    pub vertex: Option<usize>,
}

impl ShapeMeta {
    #[must_use]
    pub fn drop_box(series_index: usize, series_name: impl Into<String>) -> Self {
        Self {
            series_index,
            data_index: DataIndex::Sentinel,
            series_name: series_name.into(),
            data_name: String::new(),
            value: Vec::new(),
            indicators: Vec::new(),
            vertex: None,
        }
    }
}

/// One renderable shape plus the metadata the interaction layer reads back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub geometry: ShapeGeometry,
    pub z_level: u32,
    pub draggable: bool,
    pub calculable: bool,
    pub meta: ShapeMeta,
}

impl ShapeRecord {
    #[must_use]
    pub fn is_polygon(&self) -> bool {
        matches!(self.geometry, ShapeGeometry::Polygon(_))
    }

    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self.geometry, ShapeGeometry::Symbol(_))
    }

    #[must_use]
    pub fn is_drop_box(&self) -> bool {
        matches!(self.geometry, ShapeGeometry::DropBox(_))
    }

    /// Color a legend should show for this shape: fill first, then stroke.
    #[must_use]
    pub fn legend_color(&self) -> Color {
        match &self.geometry {
            ShapeGeometry::Polygon(polygon) => {
                if polygon.normal.brush.fills() {
                    polygon.normal.fill
                } else {
                    polygon.normal.stroke
                }
            }
            ShapeGeometry::Symbol(symbol) => {
                if symbol.symbol.is_empty() {
                    symbol.stroke
                } else {
                    symbol.fill
                }
            }
            ShapeGeometry::DropBox(drop_box) => drop_box.fill,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match &self.geometry {
            ShapeGeometry::Polygon(polygon) => {
                if polygon.points.iter().any(|point| !point.is_finite()) {
                    return Err(ChartError::InvalidData(
                        "polygon points must be finite".to_owned(),
                    ));
                }
                for style in [polygon.normal, polygon.emphasis] {
                    if !style.line_width.is_finite() || style.line_width < 0.0 {
                        return Err(ChartError::InvalidData(
                            "polygon line width must be finite and >= 0".to_owned(),
                        ));
                    }
                    style.fill.validate()?;
                    style.stroke.validate()?;
                }
                Ok(())
            }
            ShapeGeometry::Symbol(symbol) => {
                if !symbol.x.is_finite() || !symbol.y.is_finite() {
                    return Err(ChartError::InvalidData(
                        "symbol coordinates must be finite".to_owned(),
                    ));
                }
                if !symbol.size.is_finite() || symbol.size <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "symbol size must be finite and > 0".to_owned(),
                    ));
                }
                symbol.fill.validate()?;
                symbol.stroke.validate()
            }
            ShapeGeometry::DropBox(drop_box) => {
                if drop_box.points.iter().any(|point| !point.is_finite()) {
                    return Err(ChartError::InvalidData(
                        "drop box points must be finite".to_owned(),
                    ));
                }
                drop_box.fill.validate()?;
                drop_box.stroke.validate()
            }
        }
    }
}
