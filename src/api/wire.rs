use serde::Deserialize;

use crate::core::{Sample, SeriesBatch};
use crate::error::{StripError, StripResult};

/// One series as shipped by the metrics backend.
///
/// Wire pairs are value-first (`[value-or-null, unixSeconds]`), reversed
/// versus the in-memory sample layout; the flip happens here on ingress and
/// nowhere else.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WireSeries {
    pub target: String,
    pub datapoints: Vec<(Option<f64>, f64)>,
}

impl WireSeries {
    /// Converts wire pairs into a canonical batch.
    #[must_use]
    pub fn into_batch(self) -> SeriesBatch {
        let samples = self
            .datapoints
            .into_iter()
            .map(|(value, time)| Sample { time, value })
            .collect();
        SeriesBatch::new(self.target, samples)
    }
}

/// Parses one refresh payload into per-series batches.
///
/// A malformed payload is a transport failure: the caller skips the cycle
/// and keeps the previous windows.
pub fn parse_wire_payload(input: &str) -> StripResult<Vec<SeriesBatch>> {
    let wires: Vec<WireSeries> = serde_json::from_str(input)
        .map_err(|e| StripError::Transport(format!("malformed payload: {e}")))?;
    Ok(wires.into_iter().map(WireSeries::into_batch).collect())
}
