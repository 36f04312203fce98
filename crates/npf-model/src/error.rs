use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NpfError {
    #[error("unknown field: {0} (expected one of sensorSize, pixelWidth, focalLength, fNumber, trailType)")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, NpfError>;
