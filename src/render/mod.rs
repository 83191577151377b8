mod frame;
mod null_renderer;
mod primitives;
mod shapes;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{BrushType, Color, LineStrokeStyle};
pub use shapes::{
    DropBoxShape, PolygonShape, PolygonStyle, ShapeGeometry, ShapeMeta, ShapeRecord, SymbolKind,
    SymbolShape,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive the fully built shape list so drawing code stays isolated
/// from option resolution and drag handling.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
