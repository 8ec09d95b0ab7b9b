use thiserror::Error;

/// Problems with the `MThd` chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The first four bytes were not `MThd`
    #[error("Expected chunk id MThd, found {0:02X?}")]
    Magic([u8; 4]),
    /// The header declared fewer than the six bytes it needs
    #[error("Header length {0} is shorter than 6")]
    Length(u32),
    /// The stream ended inside the header
    #[error("Header chunk is truncated")]
    Truncated,
    /// A division of zero ticks per quarter note
    #[error("Division is zero")]
    ZeroDivision,
    /// SMPTE timing has no ticks per quarter note to derive tick lengths from
    #[error("SMPTE division {0:#06X} is not supported")]
    SmpteDivision(u16),
}

/// Problems with an `MTrk` chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// The chunk id was not `MTrk`
    #[error("Expected chunk id MTrk, found {0:02X?}")]
    Magic([u8; 4]),
    /// The stream ended before the eight byte chunk preamble
    #[error("Stream ended before the track chunk preamble")]
    Eof,
    /// The stream ended before the declared payload length
    #[error("Track declares {declared} bytes but only {available} remain")]
    Truncated {
        /// Length from the chunk header
        declared: u32,
        /// Bytes actually left in the stream
        available: usize,
    },
}

/// Problems inside a track's event data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StreamError {
    /// Attempted to read past the end of the buffer
    #[error("Read out of bounds")]
    OutOfBounds,
    /// A variable length quantity did not terminate within four bytes
    #[error("Variable length quantity does not terminate")]
    VlqOverflow,
    /// The status byte is not a channel, SysEx or meta status
    #[error("Unrecognized status byte {0:#04X}")]
    UnknownStatus(u8),
    /// A data byte had its high bit set
    #[error("Data byte {0:#04X} has its high bit set")]
    DataByte(u8),
}

/// Problems with a Set Tempo meta event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TempoError {
    /// Zero microseconds per quarter note
    #[error("Tempo of zero microseconds per quarter note")]
    Zero,
    /// Set Tempo always carries three bytes
    #[error("Set Tempo length {0} is not 3")]
    Length(u32),
}
