use crate::core::{Bounds, ScaleDomains, Viewport};
use crate::error::{StripError, StripResult};

/// Gap-split geometry for one series, in pixel coordinates.
///
/// No-data samples break the series into separate polylines; a backend draws
/// each run as one stroke and leaves the gaps open.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPath {
    pub name: String,
    pub polylines: Vec<Vec<(f64, f64)>>,
}

impl SeriesPath {
    pub fn validate(&self) -> StripResult<()> {
        for polyline in &self.polylines {
            for (x, y) in polyline {
                if !x.is_finite() || !y.is_finite() {
                    return Err(StripError::InvalidData(format!(
                        "series \"{}\" produced a non-finite vertex",
                        self.name
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one redraw cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    /// Raw bounds exactly as the recalculator produced them.
    pub domains: ScaleDomains,
    /// Value bounds rounded outward for axis ticks, when any value exists.
    pub niced_value: Option<Bounds>,
    pub series: Vec<SeriesPath>,
    /// Series names in render order.
    pub legend: Vec<String>,
}

impl RenderFrame {
    pub fn validate(&self) -> StripResult<()> {
        if !self.viewport.is_valid() {
            return Err(StripError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for path in &self.series {
            path.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|path| path.polylines.is_empty())
    }
}
