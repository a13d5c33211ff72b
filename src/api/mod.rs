mod data_source;
mod engine;
mod engine_config;
mod frame_builder;
mod scheduler;
mod wire;

pub use data_source::{DataSource, SyntheticSource, SyntheticWave};
pub use engine::{SeriesSnap, StripChart};
pub use engine_config::StripChartConfig;
pub use scheduler::{CyclePhase, TickOutcome};
pub use wire::{WireSeries, parse_wire_payload};
