//! Error type for buffer construction.

use std::fmt;

/// Error returned when raw pixel data does not match the declared dimensions.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferError {
    /// Byte length is not `width * height * 4`
    LengthMismatch {
        /// Expected number of bytes
        expected: usize,
        /// Number of bytes supplied
        actual: usize,
    },
    /// `width * height * 4` does not fit in memory
    TooLarge {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel data length mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
            BufferError::TooLarge { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
        }
    }
}

impl std::error::Error for BufferError {}
