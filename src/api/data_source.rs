use std::f64::consts::TAU;

use crate::core::{Sample, SeriesBatch};
use crate::error::StripResult;

/// Pull-based batch provider polled once per scheduler cycle.
///
/// Implementations surface transport problems as `StripError::Transport`;
/// the scheduler recovers by skipping that cycle's merge, leaving windows
/// and domains at their previous values.
pub trait DataSource {
    fn fetch(&mut self) -> StripResult<Vec<SeriesBatch>>;
}

/// Shape of one deterministically synthesized series.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticWave {
    pub name: String,
    pub base: f64,
    pub amplitude: f64,
    pub period_s: f64,
}

/// Deterministic waveform source for demos and headless scheduler runs.
///
/// Each fetch advances one step and returns, per wave, a batch of the most
/// recent `batch_len` samples, so consecutive batches overlap the window
/// tail the way a polled metrics backend does.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    waves: Vec<SyntheticWave>,
    step_s: f64,
    batch_len: usize,
    cursor: usize,
}

impl SyntheticSource {
    #[must_use]
    pub fn new(waves: Vec<SyntheticWave>, step_s: f64, batch_len: usize) -> Self {
        Self {
            waves,
            step_s,
            batch_len: batch_len.max(1),
            cursor: 0,
        }
    }

    fn sample_at(&self, wave: &SyntheticWave, index: usize) -> Sample {
        let time = index as f64 * self.step_s;
        let value = wave.base + wave.amplitude * (TAU * time / wave.period_s).sin();
        Sample::new(time, value)
    }
}

impl DataSource for SyntheticSource {
    fn fetch(&mut self) -> StripResult<Vec<SeriesBatch>> {
        // First fetch fills a whole batch; later fetches slide it by one.
        let newest = if self.cursor == 0 {
            self.batch_len - 1
        } else {
            self.batch_len - 1 + self.cursor
        };
        self.cursor += 1;

        let oldest = newest + 1 - self.batch_len;
        let batches = self
            .waves
            .iter()
            .map(|wave| {
                let samples = (oldest..=newest)
                    .map(|index| self.sample_at(wave, index))
                    .collect();
                SeriesBatch::new(wave.name.clone(), samples)
            })
            .collect();
        Ok(batches)
    }
}
