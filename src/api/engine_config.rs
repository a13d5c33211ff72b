use serde::{Deserialize, Serialize};

use crate::core::{Margins, Viewport};
use crate::error::{StripError, StripResult};

/// Public engine bootstrap configuration.
///
/// Padding, window length, and refresh cadence all live here rather than as
/// per-chart constants. The type is serializable so host applications can
/// persist/load chart setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripChartConfig {
    pub viewport: Viewport,
    /// Upper bound on the number of samples kept per series window.
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Cadence the host timer should drive `tick()` at.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default)]
    pub margins: Margins,
}

impl StripChartConfig {
    /// Creates a config with default window length, cadence, and margins.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            window_size: default_window_size(),
            tick_interval_ms: default_tick_interval_ms(),
            margins: Margins::default(),
        }
    }

    /// Sets the per-series window length bound.
    #[must_use]
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Sets the refresh cadence in milliseconds.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Sets the pixel margins around the plot body.
    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub(crate) fn validate(self) -> StripResult<Self> {
        if !self.viewport.is_valid() {
            return Err(StripError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.window_size < 2 {
            return Err(StripError::InvalidData(
                "window size must be at least 2".to_owned(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(StripError::InvalidData(
                "tick interval must be > 0 ms".to_owned(),
            ));
        }
        self.margins.validate(self.viewport)?;
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> StripResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| StripError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> StripResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| StripError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_window_size() -> usize {
    60
}

fn default_tick_interval_ms() -> u64 {
    1_000
}
