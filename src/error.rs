//! Error types for decoding operations.

use std::fmt;

/// Error returned when decoding fails
///
/// A failed read leaves the decoder in an unspecified state; callers must
/// stop reading. The decoder does not attempt resynchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The byte range could not supply the requested bits (truncated or
    /// too-short input)
    Truncated,
    /// A width transition pushed the field width above 32 (corrupted input)
    WidthOverflow { width: u32 },
    /// A zero-run exponent exceeded 31 (corrupted input)
    ZeroRunOverflow,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => write!(f, "bit stream is truncated"),
            Self::WidthOverflow { width } => {
                write!(f, "field width {width} exceeds the 32-bit maximum")
            }
            Self::ZeroRunOverflow => write!(f, "zero-run exponent exceeds 31"),
        }
    }
}

impl std::error::Error for DecodeError {}
