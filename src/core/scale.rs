use crate::core::{Bounds, Margins, Viewport};
use crate::error::{StripError, StripResult};

const MIN_TIME_SPAN: f64 = 1.0;
const MIN_VALUE_SPAN: f64 = 1.0;

/// Linear mapping between a data domain and a pixel range.
///
/// The pixel range already accounts for the configured margins, so callers
/// never re-apply padding. Ranges may be descending (the value axis is, since
/// pixel y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> StripResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(StripError::InvalidData(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(StripError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Horizontal time scale: domain maps left-to-right inside the margins.
    pub fn time(domain: Bounds, viewport: Viewport, margins: Margins) -> StripResult<Self> {
        if !viewport.is_valid() {
            return Err(StripError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Self::new(
            normalize_domain(domain, MIN_TIME_SPAN),
            (margins.left, f64::from(viewport.width) - margins.right),
        )
    }

    /// Vertical value scale: larger values map to smaller pixel y.
    pub fn value(domain: Bounds, viewport: Viewport, margins: Margins) -> StripResult<Self> {
        if !viewport.is_valid() {
            return Err(StripError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Self::new(
            normalize_domain(domain, MIN_VALUE_SPAN),
            (f64::from(viewport.height) - margins.bottom, margins.top),
        )
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn to_pixel(self, value: f64) -> StripResult<f64> {
        if !value.is_finite() {
            return Err(StripError::InvalidData("value must be finite".to_owned()));
        }
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn to_domain(self, pixel: f64) -> StripResult<f64> {
        if !pixel.is_finite() {
            return Err(StripError::InvalidData("pixel must be finite".to_owned()));
        }
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

fn normalize_domain(bounds: Bounds, min_span: f64) -> (f64, f64) {
    if bounds.min == bounds.max {
        let half = min_span / 2.0;
        return (bounds.min - half, bounds.max + half);
    }
    (bounds.min.min(bounds.max), bounds.min.max(bounds.max))
}

/// Extends bounds outward to the nearest multiples of a clean tick step.
///
/// Step granularity follows the 1/2/5 decade progression for roughly
/// `tick_count` ticks across the span. The recalculator never calls this;
/// it belongs to the rendering side of the contract.
#[must_use]
pub fn nice_bounds(bounds: Bounds, tick_count: usize) -> Bounds {
    let span = bounds.max - bounds.min;
    if !span.is_finite() || span <= 0.0 || tick_count == 0 {
        return bounds;
    }
    let step = tick_step(span, tick_count);
    Bounds {
        min: (bounds.min / step).floor() * step,
        max: (bounds.max / step).ceil() * step,
    }
}

fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual >= 5.0 {
        10.0
    } else if residual >= 2.0 {
        5.0
    } else if residual >= 1.0 {
        2.0
    } else {
        1.0
    };
    magnitude * factor
}

#[cfg(test)]
mod tests {
    use super::nice_bounds;
    use crate::core::Bounds;

    #[test]
    fn nice_bounds_rounds_outward_to_clean_steps() {
        let niced = nice_bounds(
            Bounds {
                min: 0.3,
                max: 9.7,
            },
            10,
        );
        assert!((niced.min - 0.0).abs() <= 1e-12);
        assert!((niced.max - 10.0).abs() <= 1e-12);
    }

    #[test]
    fn nice_bounds_leaves_degenerate_input_unchanged() {
        let bounds = Bounds { min: 4.0, max: 4.0 };
        assert_eq!(nice_bounds(bounds, 10), bounds);
    }
}
