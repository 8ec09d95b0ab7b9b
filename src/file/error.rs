use thiserror::Error;

use crate::reader::{ReaderError, ReaderErrorKind};

#[doc = r#"
Why a file could not be loaded.

Every variant but [`LoadError::Io`] locates the failure: which track (if
any) and the absolute byte offset in the file.
"#]
#[derive(Debug, Error)]
pub enum LoadError {
    /// The `MThd` chunk was unusable
    #[error("Header at byte {}: {}", .0.position(), .0.error_kind())]
    Header(#[source] ReaderError),
    /// A track chunk or its event data was unusable
    #[error("Track {track} at byte {}: {}", .offset + .source.position(), .source.error_kind())]
    Track {
        /// Index of the track chunk, from zero
        track: usize,
        /// File offset that `source`'s position is relative to
        offset: usize,
        /// The failure
        source: ReaderError,
    },
    /// The byte source could not be read
    #[cfg(feature = "std")]
    #[error("Reading source: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// The failing track, if the failure was inside one
    pub fn track(&self) -> Option<usize> {
        match self {
            Self::Track { track, .. } => Some(*track),
            _ => None,
        }
    }

    /// Absolute byte offset of the failure in the file
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Header(e) => Some(e.position()),
            Self::Track { offset, source, .. } => Some(offset + source.position()),
            #[cfg(feature = "std")]
            Self::Io(_) => None,
        }
    }

    /// The decoding error kind, if this was not an I/O failure
    pub fn kind(&self) -> Option<&ReaderErrorKind> {
        match self {
            Self::Header(e) | Self::Track { source: e, .. } => Some(e.error_kind()),
            #[cfg(feature = "std")]
            Self::Io(_) => None,
        }
    }
}

/// A track skipped under [`TrackErrorPolicy::Skip`](super::TrackErrorPolicy::Skip)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackFailure {
    /// Index of the track chunk, from zero
    pub track: usize,
    /// File offset of the track's event data
    pub offset: usize,
    /// The decode failure. Its position is relative to `offset`.
    pub error: ReaderError,
}

impl TrackFailure {
    /// Absolute byte offset of the failure in the file
    pub fn file_offset(&self) -> usize {
        self.offset + self.error.position()
    }
}
