use serde::{Deserialize, Serialize};

use crate::render::{Color, LineStrokeStyle, SymbolKind};

use super::Easing;

/// Which chart kind renders a series. Non-radar entries are skipped by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    #[default]
    Radar,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyleOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub line_type: Option<LineStrokeStyle>,
}

/// Presence alone enables area fill, even with no color set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStyleOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Style overrides for one interaction state (`normal` or `emphasis`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateStyleOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default)]
    pub line_style: LineStyleOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyleOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyleOption {
    #[serde(default)]
    pub normal: StateStyleOption,
    #[serde(default)]
    pub emphasis: StateStyleOption,
}

/// One radar polygon: a named value per indicator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Vec<f64>,
    #[serde(default)]
    pub item_style: ItemStyleOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_rotate: Option<f64>,
}

impl DataItem {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Vec<f64>) -> Self {
        Self {
            name: Some(name.into()),
            value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_item_style(mut self, item_style: ItemStyleOption) -> Self {
        self.item_style = item_style;
        self
    }

    /// Display name; unnamed items share the empty name.
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOption {
    #[serde(default, rename = "type")]
    pub series_type: SeriesType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polar_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculable: Option<bool>,
    #[serde(default)]
    pub data: Vec<DataItem>,
    #[serde(default)]
    pub item_style: ItemStyleOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_rotate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_easing: Option<Easing>,
}

impl SeriesOption {
    #[must_use]
    pub fn radar(name: impl Into<String>, polar_index: usize) -> Self {
        Self {
            name: Some(name.into()),
            polar_index: Some(polar_index),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<DataItem>) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_calculable(mut self, calculable: bool) -> Self {
        self.calculable = Some(calculable);
        self
    }

    #[must_use]
    pub fn with_item_style(mut self, item_style: ItemStyleOption) -> Self {
        self.item_style = item_style;
        self
    }

    #[must_use]
    pub fn is_radar(&self) -> bool {
        self.series_type == SeriesType::Radar
    }

    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Fills every unset field the template covers, leaving explicit values intact.
    #[must_use]
    pub fn resolved(&self, defaults: &RadarSeriesDefaults) -> Self {
        let mut series = self.clone();
        series.polar_index.get_or_insert(defaults.polar_index);
        series.z_level.get_or_insert(defaults.z_level);
        series.symbol_size.get_or_insert(defaults.symbol_size);
        let line_style = &mut series.item_style.normal.line_style;
        line_style.width.get_or_insert(defaults.line_width);
        line_style.line_type.get_or_insert(defaults.line_type);
        series
    }
}

/// Partial configuration shared by data items and series for cascading lookups.
pub trait StyleLayer {
    fn item_style(&self) -> &ItemStyleOption;
    fn symbol(&self) -> Option<SymbolKind>;
    fn symbol_size(&self) -> Option<f64>;
    fn symbol_rotate(&self) -> Option<f64>;
}

impl StyleLayer for DataItem {
    fn item_style(&self) -> &ItemStyleOption {
        &self.item_style
    }

    fn symbol(&self) -> Option<SymbolKind> {
        self.symbol
    }

    fn symbol_size(&self) -> Option<f64> {
        self.symbol_size
    }

    fn symbol_rotate(&self) -> Option<f64> {
        self.symbol_rotate
    }
}

impl StyleLayer for SeriesOption {
    fn item_style(&self) -> &ItemStyleOption {
        &self.item_style
    }

    fn symbol(&self) -> Option<SymbolKind> {
        self.symbol
    }

    fn symbol_size(&self) -> Option<f64> {
        self.symbol_size
    }

    fn symbol_rotate(&self) -> Option<f64> {
        self.symbol_rotate
    }
}

/// Template every radar series inherits from before it is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarSeriesDefaults {
    #[serde(default)]
    pub polar_index: usize,
    #[serde(default)]
    pub z_level: u32,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default)]
    pub line_type: LineStrokeStyle,
    #[serde(default = "default_symbol_size")]
    pub symbol_size: f64,
}

impl Default for RadarSeriesDefaults {
    fn default() -> Self {
        Self {
            polar_index: 0,
            z_level: 0,
            line_width: default_line_width(),
            line_type: LineStrokeStyle::Solid,
            symbol_size: default_symbol_size(),
        }
    }
}

/// Chart-level option for all radar series sharing the polar component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarOption {
    #[serde(default)]
    pub series: Vec<SeriesOption>,
    #[serde(default = "default_name_connector")]
    pub name_connector: String,
    #[serde(default)]
    pub calculable: bool,
    #[serde(default = "default_animation")]
    pub animation: bool,
    #[serde(default = "default_animation_duration")]
    pub animation_duration: u32,
    #[serde(default)]
    pub animation_easing: Easing,
    #[serde(default = "default_palette")]
    pub color: Vec<Color>,
    #[serde(default = "default_symbol_list")]
    pub symbol_list: Vec<SymbolKind>,
    #[serde(default)]
    pub series_defaults: RadarSeriesDefaults,
}

impl Default for RadarOption {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RadarOption {
    #[must_use]
    pub fn new(series: Vec<SeriesOption>) -> Self {
        Self {
            series,
            name_connector: default_name_connector(),
            calculable: false,
            animation: default_animation(),
            animation_duration: default_animation_duration(),
            animation_easing: Easing::default(),
            color: default_palette(),
            symbol_list: default_symbol_list(),
            series_defaults: RadarSeriesDefaults::default(),
        }
    }

    #[must_use]
    pub fn with_calculable(mut self, calculable: bool) -> Self {
        self.calculable = calculable;
        self
    }

    #[must_use]
    pub fn with_name_connector(mut self, connector: impl Into<String>) -> Self {
        self.name_connector = connector.into();
        self
    }

    #[must_use]
    pub fn with_animation(mut self, duration_ms: u32, easing: Easing) -> Self {
        self.animation_duration = duration_ms;
        self.animation_easing = easing;
        self
    }

    #[must_use]
    pub fn with_symbol_list(mut self, symbols: Vec<SymbolKind>) -> Self {
        self.symbol_list = symbols;
        self
    }

    /// Palette color for `index`, cycling through the configured list.
    #[must_use]
    pub fn palette_color(&self, index: usize) -> Color {
        if self.color.is_empty() {
            return PALETTE_RGB[index % PALETTE_RGB.len()].into_color();
        }
        self.color[index % self.color.len()]
    }

    /// Series-level `calculable` if set, else the global flag.
    #[must_use]
    pub fn series_calculable(&self, series: &SeriesOption) -> bool {
        series.calculable.unwrap_or(self.calculable)
    }
}

#[derive(Debug, Clone, Copy)]
struct Rgb8(u8, u8, u8);

impl Rgb8 {
    fn into_color(self) -> Color {
        Color::from_rgb8(self.0, self.1, self.2)
    }
}

const PALETTE_RGB: [Rgb8; 20] = [
    Rgb8(0xff, 0x7f, 0x50),
    Rgb8(0x87, 0xce, 0xfa),
    Rgb8(0xda, 0x70, 0xd6),
    Rgb8(0x32, 0xcd, 0x32),
    Rgb8(0x64, 0x95, 0xed),
    Rgb8(0xff, 0x69, 0xb4),
    Rgb8(0xba, 0x55, 0xd3),
    Rgb8(0xcd, 0x5c, 0x5c),
    Rgb8(0xff, 0xa5, 0x00),
    Rgb8(0x40, 0xe0, 0xd0),
    Rgb8(0x1e, 0x90, 0xff),
    Rgb8(0xff, 0x63, 0x47),
    Rgb8(0x7b, 0x68, 0xee),
    Rgb8(0x00, 0xfa, 0x9a),
    Rgb8(0xff, 0xd7, 0x00),
    Rgb8(0x66, 0x99, 0xff),
    Rgb8(0xff, 0x66, 0x66),
    Rgb8(0x3c, 0xb3, 0x71),
    Rgb8(0xb8, 0x86, 0x0b),
    Rgb8(0x30, 0xe0, 0xe0),
];

fn default_palette() -> Vec<Color> {
    PALETTE_RGB.iter().map(|rgb| rgb.into_color()).collect()
}

fn default_symbol_list() -> Vec<SymbolKind> {
    vec![
        SymbolKind::Circle,
        SymbolKind::Rectangle,
        SymbolKind::Triangle,
        SymbolKind::Diamond,
        SymbolKind::EmptyCircle,
        SymbolKind::EmptyRectangle,
        SymbolKind::EmptyTriangle,
        SymbolKind::EmptyDiamond,
    ]
}

fn default_name_connector() -> String {
    " & ".to_owned()
}

fn default_animation() -> bool {
    true
}

fn default_animation_duration() -> u32 {
    2000
}

fn default_line_width() -> f64 {
    2.0
}

fn default_symbol_size() -> f64 {
    2.0
}
