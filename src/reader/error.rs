use crate::{ChunkError, HeaderError, StreamError, TempoError};
use thiserror::Error;

#[doc = r#"
A set of errors that can occur while decoding a MIDI byte stream
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReaderErrorKind {
    /// Bad magic, length or truncation in the header chunk
    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] HeaderError),
    /// Bad magic or truncation in a track chunk
    #[error("Invalid chunk: {0}")]
    InvalidChunk(#[from] ChunkError),
    /// Undecodable track event data
    #[error("Malformed stream: {0}")]
    MalformedStream(#[from] StreamError),
    /// Unusable Set Tempo value
    #[error("Invalid tempo: {0}")]
    InvalidTempo(#[from] TempoError),
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub fn new(position: usize, kind: impl Into<ReaderErrorKind>) -> Self {
        Self {
            position,
            kind: kind.into(),
        }
    }
    /// True if the stream ended before a read could complete
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(
            self.kind,
            ReaderErrorKind::MalformedStream(StreamError::OutOfBounds)
        )
    }
    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }
    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Create a new out of bounds error
    pub const fn oob(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::MalformedStream(StreamError::OutOfBounds),
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;
