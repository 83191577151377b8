use indexmap::IndexMap;
use tracing::debug;

use crate::core::PolarCoordinateSystem;
use crate::render::{Color, DropBoxShape, ShapeGeometry, ShapeMeta, ShapeRecord};

/// Result of asking the registry for a polar instance's drop box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropBoxEntry<'a> {
    /// Created by this call; the caller must emit it.
    Created(&'a ShapeRecord),
    /// Already registered earlier in the pass.
    Existing(&'a ShapeRecord),
}

impl<'a> DropBoxEntry<'a> {
    #[must_use]
    pub fn shape(self) -> &'a ShapeRecord {
        match self {
            Self::Created(shape) | Self::Existing(shape) => shape,
        }
    }

    #[must_use]
    pub fn is_created(self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// At most one drop box per polar index for a single build pass.
///
/// The first calculable series on a polar instance claims the box; later
/// series on the same instance reuse it.
#[derive(Debug, Default)]
pub struct DropTargetRegistry {
    boxes: IndexMap<usize, ShapeRecord>,
}

impl DropTargetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registered drop box for `polar_index`, creating it on first use.
    ///
    /// Returns `None` when the polar system has no drop area for that index;
    /// nothing is recorded in that case.
    pub fn ensure(
        &mut self,
        polar_index: usize,
        series_index: usize,
        series_name: &str,
        z_level: u32,
        polar: &dyn PolarCoordinateSystem,
    ) -> Option<DropBoxEntry<'_>> {
        if self.boxes.contains_key(&polar_index) {
            return self.boxes.get(&polar_index).map(DropBoxEntry::Existing);
        }

        let points = polar.drop_box(polar_index)?;
        debug!(polar_index, series_index, "registering drop box");
        let shape = ShapeRecord {
            geometry: ShapeGeometry::DropBox(DropBoxShape {
                points,
                fill: Color::TRANSPARENT,
                stroke: Color::TRANSPARENT,
            }),
            z_level,
            draggable: false,
            calculable: true,
            meta: ShapeMeta::drop_box(series_index, series_name),
        };
        let (index, _) = self.boxes.insert_full(polar_index, shape);
        self.boxes.get_index(index).map(|(_, shape)| DropBoxEntry::Created(shape))
    }

    #[must_use]
    pub fn contains(&self, polar_index: usize) -> bool {
        self.boxes.contains_key(&polar_index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
