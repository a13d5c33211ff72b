use std::cmp::Ordering;
use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::core::Sample;

/// Newly arrived samples for one named series.
///
/// Construction canonicalizes the raw input: samples with a non-finite
/// timestamp are dropped, non-finite values are normalized to the no-data
/// marker, ordering is restored, and duplicate timestamps collapse with the
/// later entry winning.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBatch {
    name: String,
    samples: Vec<Sample>,
}

impl SeriesBatch {
    #[must_use]
    pub fn new(name: impl Into<String>, samples: Vec<Sample>) -> Self {
        let name = name.into();
        let samples = canonicalize_samples(&name, samples);
        Self { name, samples }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Counts reported by one window/batch splice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOutcome {
    /// Window points kept as historical lead-in ahead of the batch.
    pub retained_lead_in: usize,
    /// Window points dropped because the batch covers their timestamps.
    pub superseded: usize,
    /// Batch points appended to the window.
    pub appended: usize,
    /// Head points dropped to honor the window-size bound.
    pub trimmed: usize,
}

/// A named series and its owned display window.
///
/// The window is a queue: merges splice at the tail, retirement dequeues the
/// head. Points stay strictly ascending by timestamp with no duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    window: VecDeque<Sample>,
    max_len: usize,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, max_len: usize) -> Self {
        Self {
            name: name.into(),
            window: VecDeque::new(),
            max_len,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Read-only ordered view used by rendering, domain recalculation, and
    /// the nearest-point locator.
    pub fn points_for_display(&self) -> impl Iterator<Item = Sample> + '_ {
        self.window.iter().copied()
    }

    pub(crate) fn window(&self) -> &VecDeque<Sample> {
        &self.window
    }

    /// Splices a batch into the window.
    ///
    /// Window points timestamped at or after the batch's first sample are
    /// superseded; the batch is authoritative for any timestamp it covers.
    /// A batch starting before the window's first point degenerates to a
    /// full-window replacement (stale window dropped rather than spliced
    /// out of order). An empty batch is a no-op.
    pub fn merge(&mut self, batch: &[Sample]) -> MergeOutcome {
        let Some(first) = batch.first() else {
            return MergeOutcome {
                retained_lead_in: self.window.len(),
                ..MergeOutcome::default()
            };
        };

        let retained = self.window.partition_point(|s| s.time < first.time);
        if retained == 0 && !self.window.is_empty() {
            debug!(
                series = %self.name,
                window_first = self.window[0].time,
                batch_first = first.time,
                "batch predates window, dropping entire stale window"
            );
        }
        let superseded = self.window.len() - retained;
        self.window.truncate(retained);
        self.window.extend(batch.iter().copied());

        let mut trimmed = 0;
        while self.window.len() > self.max_len {
            self.window.pop_front();
            trimmed += 1;
        }

        trace!(
            series = %self.name,
            retained,
            superseded,
            appended = batch.len(),
            trimmed,
            "merged batch into window"
        );
        MergeOutcome {
            retained_lead_in: retained,
            superseded,
            appended: batch.len(),
            trimmed,
        }
    }

    /// Dequeues the oldest point after a completed visual transition.
    pub fn retire_oldest(&mut self) -> Option<Sample> {
        self.window.pop_front()
    }
}

fn canonicalize_samples(name: &str, mut samples: Vec<Sample>) -> Vec<Sample> {
    let original_len = samples.len();
    samples.retain(|s| s.time.is_finite());
    for sample in &mut samples {
        if matches!(sample.value, Some(v) if !v.is_finite()) {
            sample.value = None;
        }
    }
    samples.sort_by(|a, b| a.time.total_cmp(&b.time));

    let mut deduped: Vec<Sample> = Vec::with_capacity(samples.len());
    let mut duplicate_count = 0_usize;
    for sample in samples {
        if let Some(last) = deduped.last_mut() {
            if sample.time.total_cmp(&last.time) == Ordering::Equal {
                *last = sample;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(sample);
    }

    let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
    if filtered_count > 0 || duplicate_count > 0 {
        warn!(
            series = %name,
            filtered_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized incoming batch"
        );
    }
    deduped
}
