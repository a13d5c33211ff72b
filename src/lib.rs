//! stripchart: incremental sliding-window engine for live time-series charts.
//!
//! The crate maintains a bounded, time-ordered window of samples per series,
//! merges newly arrived batches into those windows without a full rebuild,
//! recomputes display domains under the moving window, and answers
//! nearest-point queries for pointer annotation. Actual mark drawing is left
//! to a pluggable [`render::Renderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{StripChart, StripChartConfig};
pub use error::{StripError, StripResult};
