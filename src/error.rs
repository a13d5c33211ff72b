use thiserror::Error;

pub type StripResult<T> = Result<T, StripError>;

#[derive(Debug, Error)]
pub enum StripError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("no data available for series \"{series}\"")]
    NoData { series: String },

    #[error("transport failure: {0}")]
    Transport(String),
}
