mod frame;
mod null_renderer;

pub use frame::{RenderFrame, SeriesPath};
pub use null_renderer::NullRenderer;

use crate::error::StripResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from window maintenance and scheduling.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> StripResult<()>;
}
