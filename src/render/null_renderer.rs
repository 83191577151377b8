use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content so tests catch invalid geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_shape_count: usize,
    pub last_polygon_count: usize,
    pub last_symbol_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_shape_count = frame.shapes.len();
        self.last_polygon_count = frame.polygon_count();
        self.last_symbol_count = frame.symbol_count();
        self.frames_rendered += 1;
        Ok(())
    }
}
