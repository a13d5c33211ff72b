use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Converts wall-clock time to the unix-seconds axis used across the crate.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// One timestamped observation.
///
/// `value: None` is the explicit no-data marker: such samples keep their time
/// slot for alignment but contribute neither line geometry nor value bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub value: Option<f64>,
}

impl Sample {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self {
            time,
            value: Some(value),
        }
    }

    #[must_use]
    pub fn gap(time: f64) -> Self {
        Self { time, value: None }
    }

    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, value: Option<f64>) -> Self {
        Self {
            time: datetime_to_unix_seconds(time),
            value,
        }
    }

    /// True when the sample carries a drawable value.
    #[must_use]
    pub fn is_defined(self) -> bool {
        self.value.is_some()
    }
}
