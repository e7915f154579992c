use super::Reader;
use crate::{ChunkError, ParseError, TrackError};
use thiserror::Error;

/// A decoding failure and the byte offset at which it was detected.
///
/// Decoding stops at the first error; no partially decoded value is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    kind: ReaderErrorKind,
}

/// Why decoding failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReaderErrorKind {
    /// The bytes were present but did not form a valid file
    #[error("Parsing {0}")]
    ParseError(#[from] ParseError),
    /// The input ended before a read could complete
    #[error("Read out of bounds!")]
    OutOfBounds,
}

impl From<ChunkError> for ReaderErrorKind {
    fn from(value: ChunkError) -> Self {
        Self::ParseError(value.into())
    }
}

impl From<TrackError> for ReaderErrorKind {
    fn from(value: TrackError) -> Self {
        Self::ParseError(value.into())
    }
}

impl ReaderError {
    /// Pair a kind with the offset it occurred at
    pub fn new(position: usize, kind: impl Into<ReaderErrorKind>) -> Self {
        Self {
            position,
            kind: kind.into(),
        }
    }

    /// The input was cut short at `position`
    pub const fn out_of_bounds(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::OutOfBounds,
        }
    }

    /// True if the input ended early, whether mid-header, mid-length or mid-event
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::OutOfBounds)
    }

    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }

    /// The malformed-data reason, or None for a truncated input
    pub fn parse_error_kind(&self) -> Option<&ParseError> {
        match &self.kind {
            ReaderErrorKind::ParseError(e) => Some(e),
            ReaderErrorKind::OutOfBounds => None,
        }
    }

    /// Byte offset into the input
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Result of any decoding step
pub type ReadResult<T> = Result<T, ReaderError>;

/// Malformed data at the reader's current position
pub(crate) fn invalid_at(reader: &Reader<'_>, v: impl Into<ParseError>) -> ReaderError {
    ReaderError::new(reader.buffer_position(), v.into())
}
