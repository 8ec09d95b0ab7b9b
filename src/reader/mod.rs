#![doc = r#"
A sequential cursor over MIDI bytes

[`Reader`] never seeks backwards. Every failed read reports the offset at
which it was attempted, so callers can point at the broken byte.

All multi-byte fixed-width fields in a MIDI file are big-endian;
[`Reader::read_u16`] and [`Reader::read_u32`] return them in host order.
"#]

mod error;
pub use error::*;

pub mod vlq;

use alloc::borrow::Cow;

use crate::StreamError;

/// A forward-only cursor over a borrowed or owned byte buffer
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: Cow<'a, [u8]>,
    position: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader over owned or borrowed bytes
    pub fn from_bytes<B>(bytes: B) -> Self
    where
        B: Into<Cow<'a, [u8]>>,
    {
        Self {
            data: bytes.into(),
            position: 0,
        }
    }

    /// Create a reader over a byte slice
    pub const fn from_byte_slice(bytes: &'a [u8]) -> Self {
        Self {
            data: Cow::Borrowed(bytes),
            position: 0,
        }
    }

    /// The offset of the next byte to be read
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// Bytes left after the cursor
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// True once every byte has been consumed
    pub fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Returns the next byte without consuming it
    pub fn peek(&self) -> ReadResult<u8> {
        self.data
            .get(self.position)
            .copied()
            .ok_or(ReaderError::oob(self.position))
    }

    /// Consumes one byte
    pub fn read_next(&mut self) -> ReadResult<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Ok(byte)
    }

    /// Consumes exactly `N` bytes
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let slice = self.read_slice(N)?;
        let mut out = [0; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Consumes `len` bytes, returning them as a slice of the buffer
    pub fn read_slice(&mut self, len: usize) -> ReadResult<&[u8]> {
        let start = self.position;
        let end = start
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(ReaderError::oob(start))?;
        self.position = end;
        Ok(&self.data[start..end])
    }

    /// Advances past `len` bytes
    pub fn skip(&mut self, len: usize) -> ReadResult<()> {
        self.read_slice(len).map(|_| ())
    }

    /// Consumes a big-endian `u16`
    pub fn read_u16(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Consumes a big-endian `u32`
    pub fn read_u32(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Consumes a variable length quantity. See [`vlq::decode`].
    pub fn read_vlq(&mut self) -> ReadResult<u32> {
        let start = self.position;
        let (value, len) = vlq::decode(&self.data[start..])
            .map_err(|e| ReaderError::new(start, e))?;
        self.position += len;
        Ok(value)
    }

    /// Consumes one byte that must have its high bit clear
    pub fn read_data_byte(&mut self) -> ReadResult<u8> {
        let position = self.position;
        let byte = self.read_next()?;
        if byte & 0x80 != 0 {
            return Err(ReaderError::new(position, StreamError::DataByte(byte)));
        }
        Ok(byte)
    }
}
