use num_enum::TryFromPrimitive;

use crate::{
    HeaderError,
    reader::{ReadResult, Reader, ReaderError},
};

/// The chunk id of the header chunk
pub const HEADER_MAGIC: [u8; 4] = *b"MThd";

/// Bytes of header data this decoder understands
pub const HEADER_LENGTH: u32 = 6;

#[doc = r#"
The contents of the `MThd` chunk.

All fields are in host byte order.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// The SMF format, usually 0, 1 or 2. See [`FormatType`].
    pub format: u16,
    /// The number of `MTrk` chunks that follow
    pub track_count: u16,
    /// Ticks per quarter note
    pub division: u16,
}

impl Header {
    /// Create a new header
    pub const fn new(format: u16, track_count: u16, division: u16) -> Self {
        Self {
            format,
            track_count,
            division,
        }
    }

    /// Returns the format as a known [`FormatType`], if it is one
    pub fn format_type(&self) -> Option<FormatType> {
        FormatType::try_from_primitive(self.format).ok()
    }
}

#[doc = r#"
The three formats a Standard MIDI File can declare.

Tracks of every format are decoded and appended in file order; the format
only documents how the tracks were meant to relate.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u16)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatType {
    /// Format 0: one track holding every channel
    SingleMultiChannel = 0,
    /// Format 1: tracks played at the same time
    Simultaneous = 1,
    /// Format 2: independent patterns
    SequentiallyIndependent = 2,
}

/// Reads the `MThd` chunk at the reader's position.
///
/// Header data beyond the six known bytes is skipped.
///
/// # Errors
/// [`HeaderError`] for a wrong id, a short or truncated header, and for a
/// division that does not count ticks per quarter note.
pub fn read_header_chunk(reader: &mut Reader<'_>) -> ReadResult<Header> {
    let start = reader.buffer_position();
    let truncated = |_| ReaderError::new(start, HeaderError::Truncated);

    let magic: [u8; 4] = reader.read_exact_size().map_err(truncated)?;
    if magic != HEADER_MAGIC {
        return Err(ReaderError::new(start, HeaderError::Magic(magic)));
    }

    let length_position = reader.buffer_position();
    let length = reader.read_u32().map_err(truncated)?;
    if length < HEADER_LENGTH {
        return Err(ReaderError::new(length_position, HeaderError::Length(length)));
    }

    let format = reader.read_u16().map_err(truncated)?;
    let track_count = reader.read_u16().map_err(truncated)?;
    let division_position = reader.buffer_position();
    let division = reader.read_u16().map_err(truncated)?;

    if division == 0 {
        return Err(ReaderError::new(division_position, HeaderError::ZeroDivision));
    }
    if division & 0x8000 != 0 {
        return Err(ReaderError::new(
            division_position,
            HeaderError::SmpteDivision(division),
        ));
    }

    if length > HEADER_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::warn!("Header declares {length} bytes, skipping the extra {}", length - HEADER_LENGTH);
        reader
            .skip((length - HEADER_LENGTH) as usize)
            .map_err(truncated)?;
    }

    let header = Header::new(format, track_count, division);
    #[cfg(feature = "tracing")]
    tracing::debug!(?header, "Read header chunk");
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ReaderErrorKind;

    fn header_bytes(format: u16, tracks: u16, division: u16) -> alloc::vec::Vec<u8> {
        let mut bytes = alloc::vec::Vec::from(HEADER_MAGIC);
        bytes.extend_from_slice(&6u32.to_be_bytes());
        bytes.extend_from_slice(&format.to_be_bytes());
        bytes.extend_from_slice(&tracks.to_be_bytes());
        bytes.extend_from_slice(&division.to_be_bytes());
        bytes
    }

    fn kind(result: ReadResult<Header>) -> ReaderErrorKind {
        *result.unwrap_err().error_kind()
    }

    #[test]
    fn reads_fields_in_host_order() {
        for (format, tracks, division) in [(0, 1, 480), (1, 17, 96), (2, 0x0102, 0x7FFF)] {
            let bytes = header_bytes(format, tracks, division);
            let mut reader = Reader::from_byte_slice(&bytes);
            assert_eq!(
                read_header_chunk(&mut reader),
                Ok(Header::new(format, tracks, division))
            );
            assert!(reader.is_at_end());
        }
    }

    #[test]
    fn format_types() {
        assert_eq!(
            Header::new(1, 2, 480).format_type(),
            Some(FormatType::Simultaneous)
        );
        assert_eq!(Header::new(7, 2, 480).format_type(), None);
    }

    #[test]
    fn rejects_wrong_magic() {
        let mut bytes = header_bytes(0, 1, 480);
        bytes[..4].copy_from_slice(b"MTrk");
        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(
            kind(read_header_chunk(&mut reader)),
            ReaderErrorKind::InvalidHeader(HeaderError::Magic(*b"MTrk"))
        );
    }

    #[test]
    fn rejects_short_length() {
        let mut bytes = header_bytes(0, 1, 480);
        bytes[7] = 4;
        let mut reader = Reader::from_byte_slice(&bytes);
        let err = read_header_chunk(&mut reader).unwrap_err();
        assert_eq!(err.position(), 4);
        assert_eq!(
            err.error_kind(),
            &ReaderErrorKind::InvalidHeader(HeaderError::Length(4))
        );
    }

    #[test]
    fn skips_extended_header() {
        let mut bytes = header_bytes(0, 1, 480);
        bytes[7] = 8;
        bytes.extend_from_slice(&[0xAA, 0xBB, b'M']);
        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(read_header_chunk(&mut reader), Ok(Header::new(0, 1, 480)));
        assert_eq!(reader.read_next(), Ok(b'M'));
    }

    #[test]
    fn truncation_is_a_header_error() {
        let bytes = header_bytes(0, 1, 480);
        let mut reader = Reader::from_byte_slice(&bytes[..11]);
        assert_eq!(
            kind(read_header_chunk(&mut reader)),
            ReaderErrorKind::InvalidHeader(HeaderError::Truncated)
        );
    }

    #[test]
    fn rejects_untimed_divisions() {
        let bytes = header_bytes(0, 1, 0);
        assert_eq!(
            kind(read_header_chunk(&mut Reader::from_byte_slice(&bytes))),
            ReaderErrorKind::InvalidHeader(HeaderError::ZeroDivision)
        );

        let bytes = header_bytes(0, 1, 0xE728);
        assert_eq!(
            kind(read_header_chunk(&mut Reader::from_byte_slice(&bytes))),
            ReaderErrorKind::InvalidHeader(HeaderError::SmpteDivision(0xE728))
        );
    }
}
