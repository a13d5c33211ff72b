use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{Series, SeriesBatch, domains_for};
use crate::error::StripResult;
use crate::render::Renderer;

use super::{DataSource, StripChart};

/// Scheduler cycle states; cyclic while the chart is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CyclePhase {
    #[default]
    Idle,
    Fetching,
    Merging,
    Transitioning,
}

/// Result of one scheduler cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Batches merged and a frame handed to the renderer; retirement now
    /// waits on `complete_transition`.
    Rendered { series_merged: usize },
    /// The source failed; windows and domains keep their previous values.
    TransportFailed,
    /// Nothing eligible to display after the merge.
    NothingToRender,
    /// The renderer rejected the frame; the merged windows are kept intact
    /// but no retirement is scheduled for this cycle.
    RenderFailed,
    /// The chart is torn down; the cycle was discarded without touching
    /// any window.
    Discarded,
}

impl<S: DataSource, R: Renderer> StripChart<S, R> {
    /// Runs one pull cycle: fetch, merge per series, recompute domains,
    /// render.
    pub fn tick(&mut self) -> StripResult<TickOutcome> {
        if self.torn_down {
            trace!("tick discarded after teardown");
            return Ok(TickOutcome::Discarded);
        }
        self.coalesce_pending_retirement();

        self.phase = CyclePhase::Fetching;
        let batches = match self.source.fetch() {
            Ok(batches) => batches,
            Err(err) => {
                warn!(error = %err, "transport failure, skipping this cycle's merge");
                self.phase = CyclePhase::Idle;
                return Ok(TickOutcome::TransportFailed);
            }
        };
        self.apply_batches(batches)
    }

    /// Push-based variant of [`Self::tick`]: merges externally supplied
    /// batches under the same serialization policy.
    pub fn ingest(&mut self, batches: Vec<SeriesBatch>) -> StripResult<TickOutcome> {
        if self.torn_down {
            trace!("ingest discarded after teardown");
            return Ok(TickOutcome::Discarded);
        }
        self.coalesce_pending_retirement();
        self.apply_batches(batches)
    }

    /// Host signal that the visual transition finished: dequeues the oldest
    /// point of every window and returns to idle. Returns `false` when no
    /// transition was pending.
    pub fn complete_transition(&mut self) -> bool {
        if self.torn_down || self.phase != CyclePhase::Transitioning {
            return false;
        }
        self.apply_retirement();
        trace!("transition complete, retired oldest point per series");
        true
    }

    /// Marks the chart as torn down. Every later cycle, in-flight fetch
    /// result, or transition signal becomes a discarding no-op; no window is
    /// mutated again.
    pub fn tear_down(&mut self) {
        self.torn_down = true;
        self.phase = CyclePhase::Idle;
        debug!("chart torn down");
    }

    fn apply_batches(&mut self, batches: Vec<SeriesBatch>) -> StripResult<TickOutcome> {
        self.phase = CyclePhase::Merging;
        let window_size = self.config.window_size;
        let mut merged = 0_usize;
        for batch in batches {
            let series = self
                .series
                .entry(batch.name().to_owned())
                .or_insert_with(|| Series::new(batch.name().to_owned(), window_size));
            let outcome = series.merge(batch.samples());
            trace!(
                series = batch.name(),
                retained = outcome.retained_lead_in,
                superseded = outcome.superseded,
                appended = outcome.appended,
                "merged batch"
            );
            merged += 1;
        }

        let Some(domains) = domains_for(self.series.values()) else {
            self.phase = CyclePhase::Idle;
            return Ok(TickOutcome::NothingToRender);
        };

        let frame = self.build_frame(&domains)?;
        if let Err(err) = self.renderer.render(&frame) {
            warn!(error = %err, "renderer rejected frame, keeping merged windows without retirement");
            self.phase = CyclePhase::Idle;
            return Ok(TickOutcome::RenderFailed);
        }

        self.phase = CyclePhase::Transitioning;
        debug!(series_merged = merged, "cycle rendered, retirement pending");
        Ok(TickOutcome::Rendered {
            series_merged: merged,
        })
    }

    fn coalesce_pending_retirement(&mut self) {
        if self.phase != CyclePhase::Transitioning {
            return;
        }
        // New data arrived before the previous transition finished: apply the
        // pending retirement first so this merge runs against the window as
        // it will be after the slide, never double-counting a point.
        debug!("coalescing pending retirement before next merge");
        self.apply_retirement();
    }

    fn apply_retirement(&mut self) {
        for series in self.series.values_mut() {
            series.retire_oldest();
        }
        self.phase = CyclePhase::Idle;
    }
}
