use std::time::Duration;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{Sample, ScaleDomains, Series, domains_for, nearest_point};
use crate::error::{StripError, StripResult};
use crate::render::Renderer;

use super::{CyclePhase, DataSource, StripChartConfig};

/// Pointer annotation for one series: the sample nearest the queried time.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSnap {
    pub series: String,
    pub sample: Sample,
    pub x_px: f64,
    /// Absent for no-data samples and when no value scale exists this tick.
    pub y_px: Option<f64>,
}

/// Live strip chart: owns the per-series windows, drives the
/// merge/recalculate/render cycle, and answers pointer queries.
///
/// All state lives here; there are no shared globals. Pointer queries take
/// `&self` and can never observe a window mid-merge.
#[derive(Debug)]
pub struct StripChart<S, R> {
    pub(super) source: S,
    pub(super) renderer: R,
    pub(super) config: StripChartConfig,
    pub(super) series: IndexMap<String, Series>,
    pub(super) phase: CyclePhase,
    pub(super) torn_down: bool,
}

impl<S: DataSource, R: Renderer> StripChart<S, R> {
    pub fn new(source: S, renderer: R, config: StripChartConfig) -> StripResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            source,
            renderer,
            config,
            series: IndexMap::new(),
            phase: CyclePhase::Idle,
            torn_down: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> StripChartConfig {
        self.config
    }

    #[must_use]
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Cadence the host timer should drive `tick()` at.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.tick_interval_ms)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    #[must_use]
    pub fn series(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }

    /// Read-only view of one series' current window.
    #[must_use]
    pub fn points_for_display(&self, name: &str) -> Option<Vec<Sample>> {
        self.series
            .get(name)
            .map(|s| s.points_for_display().collect())
    }

    /// Raw display bounds for the current windows.
    ///
    /// Derived on demand and never cached; domains exist only per tick.
    #[must_use]
    pub fn current_domains(&self) -> Option<ScaleDomains> {
        domains_for(self.series.values())
    }

    /// Nearest sample in one series, with the documented right-hand
    /// tie-break. Unknown or empty series signal no-data explicitly.
    pub fn nearest_point(&self, series: &str, t: f64) -> StripResult<Sample> {
        self.series
            .get(series)
            .and_then(|s| nearest_point(s.window(), t))
            .ok_or_else(|| StripError::NoData {
                series: series.to_owned(),
            })
    }

    /// Per-series annotations for a pointer at pixel `x`.
    ///
    /// The pixel is inverted through the current time scale before the
    /// per-series nearest-point lookup runs.
    pub fn snaps_at_pixel(&self, pointer_x: f64) -> StripResult<Vec<SeriesSnap>> {
        let Some(domains) = self.current_domains() else {
            return Ok(Vec::new());
        };
        let (time_scale, value_scale) = self.scales_for(&domains)?;
        let t = time_scale.to_domain(pointer_x)?;

        let mut snaps = Vec::with_capacity(self.series.len());
        for series in self.series.values() {
            let Some(sample) = nearest_point(series.window(), t) else {
                continue;
            };
            let y_px = match (sample.value, value_scale) {
                (Some(v), Some(scale)) => Some(scale.to_pixel(v)?),
                _ => None,
            };
            snaps.push(SeriesSnap {
                series: series.name().to_owned(),
                sample,
                x_px: time_scale.to_pixel(sample.time)?,
                y_px,
            });
        }
        Ok(snaps)
    }

    /// Single closest annotation across all series (crosshair-magnet style).
    pub fn nearest_snap_at_pixel(&self, pointer_x: f64) -> StripResult<Option<SeriesSnap>> {
        let candidates: SmallVec<[(OrderedFloat<f64>, SeriesSnap); 4]> = self
            .snaps_at_pixel(pointer_x)?
            .into_iter()
            .map(|snap| (OrderedFloat((snap.x_px - pointer_x).abs()), snap))
            .collect();

        Ok(candidates
            .into_iter()
            .min_by_key(|item| item.0)
            .map(|(_, snap)| snap))
    }
}
