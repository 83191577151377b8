use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::api::{Legend, RadarOption};
use crate::render::{BrushType, Color};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: Color,
    pub selected: bool,
    pub brush: BrushType,
}

/// In-memory legend keeping entries in insertion order.
///
/// Unknown names count as selected. Asking for the color of an unknown name
/// registers it with the next palette color, like an interactive legend would.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticLegend {
    entries: IndexMap<String, LegendEntry>,
    palette: Vec<Color>,
    next_color: usize,
}

impl Default for StaticLegend {
    fn default() -> Self {
        Self::with_palette(RadarOption::default().color)
    }
}

impl StaticLegend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_palette(palette: Vec<Color>) -> Self {
        Self {
            entries: IndexMap::new(),
            palette,
            next_color: 0,
        }
    }

    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, color: Color) -> Self {
        self.add(&name.into(), color);
        self
    }

    pub fn set_selected(&mut self, name: &str, selected: bool) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.selected = selected;
            return;
        }
        let color = self.allocate_color();
        self.entries.insert(
            name.to_owned(),
            LegendEntry {
                color,
                selected,
                brush: BrushType::Fill,
            },
        );
    }

    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&LegendEntry> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn allocate_color(&mut self) -> Color {
        let color = if self.palette.is_empty() {
            Color::rgb(0.0, 0.0, 0.0)
        } else {
            self.palette[self.next_color % self.palette.len()]
        };
        self.next_color += 1;
        color
    }
}

impl Legend for StaticLegend {
    fn is_selected(&self, name: &str) -> bool {
        self.entries.get(name).is_none_or(|entry| entry.selected)
    }

    fn color(&mut self, name: &str) -> Color {
        if let Some(entry) = self.entries.get(name) {
            return entry.color;
        }
        let color = self.allocate_color();
        self.add(name, color);
        color
    }

    fn set_item_brush(&mut self, name: &str, brush: BrushType) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.brush = brush;
        }
    }

    fn add(&mut self, name: &str, color: Color) {
        trace!(name, "legend entry added");
        let entry = self.entries.entry(name.to_owned()).or_insert(LegendEntry {
            color,
            selected: true,
            brush: BrushType::Fill,
        });
        entry.color = color;
    }

    fn remove(&mut self, name: &str) {
        trace!(name, "legend entry removed");
        self.entries.shift_remove(name);
    }
}
