mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::{LayerFrame, RenderFrame};
pub use layer_stack::ChartLayer;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from data reduction and layout heuristics.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
