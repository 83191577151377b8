use crate::error::ChartResult;
use crate::render::ShapeRecord;

/// Backend-agnostic scene for one radar draw pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderFrame {
    pub shapes: Vec<ShapeRecord>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(shapes: Vec<ShapeRecord>) -> Self {
        Self { shapes }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for shape in &self.shapes {
            shape.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.shapes.iter().filter(|shape| shape.is_polygon()).count()
    }

    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.shapes.iter().filter(|shape| shape.is_symbol()).count()
    }
}
