//! Status bytes and meta event types

use num_enum::TryFromPrimitive;

/// Start of a System Exclusive message
pub const SYSEX: u8 = 0xF0;
/// A SysEx continuation or escape packet
pub const SYSEX_ESCAPE: u8 = 0xF7;
/// Prefix of every meta event
pub const META: u8 = 0xFF;

#[doc = r#"
The upper nibble of a channel message status byte.

The lower nibble (the channel) plays no role in chart building.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum ChannelStatus {
    /// key, velocity
    NoteOff = 0x80,
    /// key, velocity
    NoteOn = 0x90,
    /// key, pressure
    PolyPressure = 0xA0,
    /// controller, value. Controllers `0x78..` are channel mode messages.
    ControlChange = 0xB0,
    /// program
    ProgramChange = 0xC0,
    /// pressure
    ChannelPressure = 0xD0,
    /// lsb, msb
    PitchBend = 0xE0,
}

impl ChannelStatus {
    /// Identify the message type of a status byte in `0x80..=0xEF`
    pub fn from_status(status: u8) -> Option<Self> {
        Self::try_from_primitive(status & 0xF0).ok()
    }

    /// Number of data bytes following the status
    pub const fn data_len(&self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }
}

/// First controller number that is a channel mode message rather than a control change
pub const CHANNEL_MODE_START: u8 = 0x78;

/// The meta event types a Standard MIDI File defines
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum MetaType {
    /// Sequence number
    SequenceNumber = 0x00,
    /// Any text
    Text = 0x01,
    /// Copyright notice
    Copyright = 0x02,
    /// Sequence or track name
    TrackName = 0x03,
    /// Instrument name
    InstrumentName = 0x04,
    /// Lyric
    Lyric = 0x05,
    /// Marker
    Marker = 0x06,
    /// Cue point
    CuePoint = 0x07,
    /// MIDI channel prefix
    ChannelPrefix = 0x20,
    /// MIDI port
    Port = 0x21,
    /// End of track
    EndOfTrack = 0x2F,
    /// Set tempo, microseconds per quarter note
    Tempo = 0x51,
    /// SMPTE offset
    SmpteOffset = 0x54,
    /// Time signature
    TimeSignature = 0x58,
    /// Key signature
    KeySignature = 0x59,
    /// Sequencer specific
    SequencerSpecific = 0x7F,
}
