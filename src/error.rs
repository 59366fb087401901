//! Error types for zlatlong decoding and encoder restore.

use std::fmt;

/// Error returned when decoding fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte outside the 64-symbol alphabet
    InvalidSymbol { byte: u8, position: usize },
    /// Input ended inside a digit group. Only reported by `decode_strict`;
    /// `decode` drops the unfinished group instead.
    TruncatedInput { position: usize },
}

impl DecodeError {
    /// Byte offset in the input the error refers to
    #[must_use]
    pub const fn position(&self) -> usize {
        match *self {
            Self::InvalidSymbol { position, .. } | Self::TruncatedInput { position } => position,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { byte, position } => {
                write!(f, "invalid symbol {:?} at position {position}", char::from(*byte))
            }
            Self::TruncatedInput { position } => {
                write!(f, "input ends inside the digit group starting at position {position}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Error returned when a deserialized `Encoder` state is not one an encoder could have produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreError {
    /// The buffer does not decode cleanly (bad symbol or unfinished group)
    Corrupt(DecodeError),
    /// The last point does not match the sum of the buffer's deltas
    LastPointMismatch {
        last_lat: i64,
        last_lon: i64,
        decoded_lat: i64,
        decoded_lon: i64,
    },
    /// Fewer points counted than the buffer holds
    CountTooSmall { count: usize, encoded: usize },
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupt(e) => write!(f, "corrupt encoder buffer: {e}"),
            Self::LastPointMismatch {
                last_lat,
                last_lon,
                decoded_lat,
                decoded_lon,
            } => {
                write!(
                    f,
                    "last point ({last_lat}, {last_lon}) does not match buffer end ({decoded_lat}, {decoded_lon})"
                )
            }
            Self::CountTooSmall { count, encoded } => {
                write!(f, "point count {count} is less than the {encoded} points in the buffer")
            }
        }
    }
}

impl std::error::Error for RestoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Corrupt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DecodeError> for RestoreError {
    fn from(e: DecodeError) -> Self {
        Self::Corrupt(e)
    }
}
