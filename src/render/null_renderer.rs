use crate::error::StripResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless scheduling.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_series_count: usize,
    pub last_polyline_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> StripResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_series_count = frame.series.len();
        self.last_polyline_count = frame.series.iter().map(|p| p.polylines.len()).sum();
        Ok(())
    }
}
