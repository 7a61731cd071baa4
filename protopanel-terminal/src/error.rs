/// Errors raised by the output sinks
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("GIF encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type SinkResult<T> = Result<T, SinkError>;
