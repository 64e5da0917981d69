use std::fmt;

use thiserror::Error;

/// Which input a decode failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Destination => f.write_str("destination"),
        }
    }
}

/// Failure of a complete mashup call, tagged with the stage that failed.
#[derive(Debug, Error)]
pub enum MashupError {
    #[error("could not decode {side} image: {source}")]
    Decode { side: Side, source: CodecError },

    #[error("could not encode image: {0}")]
    Encode(#[source] CodecError),
}

impl MashupError {
    /// The input that failed to decode, if this is a decode error.
    pub fn side(&self) -> Option<Side> {
        match self {
            MashupError::Decode { side, .. } => Some(*side),
            MashupError::Encode(_) => None,
        }
    }
}

/// Errors raised by decode and encode routines.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("JPEG error: {0}")]
    Jpeg(#[from] image::ImageError),

    #[error("Invalid pixel data: {0}")]
    Buffer(#[from] color_mashup::BufferError),

    #[error("Unsupported pixel layout: {0}")]
    Unsupported(String),

    #[error("{format} codec error: {message}")]
    Custom { format: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
