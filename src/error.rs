use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("invalid chart dimensions: x={x}, y={y}, z={z}")]
    InvalidDimensions { x: f64, y: f64, z: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("key \"{0}\" is not part of the scale domain")]
    UnknownKey(String),
}
