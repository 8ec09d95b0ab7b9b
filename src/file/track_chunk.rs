use alloc::vec::Vec;

use crate::{
    ChunkError,
    reader::{ReadResult, Reader, ReaderError},
};

/// The chunk id of a track chunk
pub const TRACK_MAGIC: [u8; 4] = *b"MTrk";

#[doc = r#"
The undecoded payload of one `MTrk` chunk.

Owned so the source stream can move on while the track is decoded.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrackChunk {
    data: Vec<u8>,
}

impl RawTrackChunk {
    /// Wrap an event data payload
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
    /// The event data
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// True if the chunk carries no events
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Returns the payload
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

/// Reads one `MTrk` chunk at the reader's position.
///
/// # Errors
/// [`ChunkError::Magic`] if the id is not `MTrk`,
/// [`ChunkError::Eof`] or [`ChunkError::Truncated`] if the stream ends early.
pub fn read_track_chunk(reader: &mut Reader<'_>) -> ReadResult<RawTrackChunk> {
    let start = reader.buffer_position();
    let eof = |_| ReaderError::new(start, ChunkError::Eof);

    let magic: [u8; 4] = reader.read_exact_size().map_err(eof)?;
    if magic != TRACK_MAGIC {
        return Err(ReaderError::new(start, ChunkError::Magic(magic)));
    }
    let length = reader.read_u32().map_err(eof)?;

    let available = reader.remaining();
    let data = reader.read_slice(length as usize).map_err(|_| {
        ReaderError::new(
            start,
            ChunkError::Truncated {
                declared: length,
                available,
            },
        )
    })?;

    Ok(RawTrackChunk::new(data.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ReaderErrorKind;
    use alloc::vec;

    #[test]
    fn reads_exactly_the_declared_payload() {
        let bytes = [b'M', b'T', b'r', b'k', 0, 0, 0, 3, 0x00, 0x90, 0x3C, 0xFF];
        let mut reader = Reader::from_byte_slice(&bytes);
        let chunk = read_track_chunk(&mut reader).unwrap();
        assert_eq!(chunk.data(), &[0x00, 0x90, 0x3C]);
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn empty_track() {
        let bytes = [b'M', b'T', b'r', b'k', 0, 0, 0, 0];
        let chunk = read_track_chunk(&mut Reader::from_byte_slice(&bytes)).unwrap();
        assert!(chunk.is_empty());
        assert_eq!(chunk.into_inner(), vec![]);
    }

    #[test]
    fn rejects_other_chunks() {
        let bytes = [b'M', b'T', b'h', b'd', 0, 0, 0, 0];
        let err = read_track_chunk(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::InvalidChunk(ChunkError::Magic(*b"MThd"))
        );
    }

    #[test]
    fn short_payload_is_truncated() {
        let bytes = [0, 0, b'M', b'T', b'r', b'k', 0, 0, 0x01, 0x00, 0x00, 0x90];
        let mut reader = Reader::from_byte_slice(&bytes);
        reader.skip(2).unwrap();
        let err = read_track_chunk(&mut reader).unwrap_err();
        assert_eq!(err.position(), 2);
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::InvalidChunk(ChunkError::Truncated {
                declared: 256,
                available: 2
            })
        );
    }

    #[test]
    fn missing_preamble_is_eof() {
        let bytes = [b'M', b'T'];
        let err = read_track_chunk(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::InvalidChunk(ChunkError::Eof)
        );
    }
}
