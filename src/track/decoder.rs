use num_enum::TryFromPrimitive;

use super::{
    LongNoteFlags, TrackEvents,
    status::{CHANNEL_MODE_START, ChannelStatus, META, MetaType, SYSEX, SYSEX_ESCAPE},
};
use crate::{
    StreamError, Tempo, TempoError,
    chart::{NoteEvent, NoteKind, TempoEvent},
    reader::{ReadResult, Reader, ReaderError},
};

/// Velocity that turns a note on into the head of a long note
pub const LONG_NOTE_VELOCITY: u8 = 127;

enum Step {
    Continue,
    EndOfTrack,
}

#[doc = r#"
Walks the event data of one track chunk.

Delta times are accumulated into an absolute tick count, and every note
and tempo event is emitted with that tick as its time. Running status and
the per-lane [`LongNoteFlags`] live in the decoder, so each track gets its
own.

# Example
```rust
# use midichart::prelude::*;
let data = [
    0x00, 0x90, 60, 127, // long note head
    0x83, 0x60, 60, 0,   // running status, velocity 0 closes it
];
let mut events = TrackEvents::default();
TrackDecoder::new(&data, 480).decode(&mut events).unwrap();

assert_eq!(
    events.notes,
    [
        NoteEvent::new(0, 60, NoteKind::LongStart),
        NoteEvent::new(480, 60, NoteKind::LongEnd),
    ]
);
```
"#]
#[derive(Debug, Clone)]
pub struct TrackDecoder<'a> {
    reader: Reader<'a>,
    division: u16,
    current_tick: u64,
    running_status: u8,
    long_flags: LongNoteFlags,
    stop_at_end_of_track: bool,
}

impl<'a> TrackDecoder<'a> {
    /// Decode `data` with `division` ticks per quarter note
    pub fn new(data: &'a [u8], division: u16) -> Self {
        Self {
            reader: Reader::from_byte_slice(data),
            division,
            current_tick: 0,
            running_status: 0,
            long_flags: LongNoteFlags::new(),
            stop_at_end_of_track: false,
        }
    }

    /// Stop at the End of Track meta event instead of the end of the data
    pub fn stop_at_end_of_track(mut self, stop: bool) -> Self {
        self.stop_at_end_of_track = stop;
        self
    }

    /// Absolute tick of the last decoded event
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Offset into the track data of the next unread byte
    pub fn position(&self) -> usize {
        self.reader.buffer_position()
    }

    /// Lanes with a long note still open
    pub fn long_flags(&self) -> &LongNoteFlags {
        &self.long_flags
    }

    /// Decode events into `out` until the data is exhausted.
    ///
    /// On error, events decoded before the failure stay in `out`.
    ///
    /// # Errors
    /// [`StreamError`] for truncated or undecodable events and
    /// [`TempoError`] for an unusable Set Tempo event.
    pub fn decode(&mut self, out: &mut TrackEvents) -> ReadResult<()> {
        while !self.reader.is_at_end() {
            if let Step::EndOfTrack = self.step(out)? {
                if self.stop_at_end_of_track {
                    break;
                }
            }
        }

        #[cfg(feature = "tracing")]
        for lane in self.long_flags.open_lanes() {
            tracing::warn!(lane, "Long note never closed");
        }
        Ok(())
    }

    fn step(&mut self, out: &mut TrackEvents) -> ReadResult<Step> {
        let delta = self.reader.read_vlq()?;
        self.current_tick += u64::from(delta);

        let status_position = self.reader.buffer_position();
        if self.reader.peek()? & 0x80 != 0 {
            self.running_status = self.reader.read_next()?;
        }
        let status = self.running_status;

        if let Some(channel) = ChannelStatus::from_status(status) {
            self.channel(channel, out)?;
            return Ok(Step::Continue);
        }
        match status {
            SYSEX | SYSEX_ESCAPE => {
                let len = self.reader.read_vlq()?;
                self.reader.skip(len as usize)?;
                Ok(Step::Continue)
            }
            META => self.meta(status_position, out),
            _ => Err(ReaderError::new(
                status_position,
                StreamError::UnknownStatus(status),
            )),
        }
    }

    fn channel(&mut self, channel: ChannelStatus, out: &mut TrackEvents) -> ReadResult<()> {
        let time = self.current_tick as i64;
        match channel {
            ChannelStatus::NoteOff => {
                let key = self.reader.read_data_byte()?;
                let _velocity = self.reader.read_data_byte()?;
                if self.long_flags.close(key) {
                    out.notes.push(NoteEvent::new(time, key, NoteKind::LongEnd));
                }
            }
            ChannelStatus::NoteOn => {
                let key = self.reader.read_data_byte()?;
                let velocity = self.reader.read_data_byte()?;
                let kind = match velocity {
                    LONG_NOTE_VELOCITY => {
                        let _reopened = self.long_flags.open(key);
                        #[cfg(feature = "tracing")]
                        if _reopened {
                            tracing::warn!(lane = key, tick = time, "Long note opened twice");
                        }
                        NoteKind::LongStart
                    }
                    0 if self.long_flags.close(key) => NoteKind::LongEnd,
                    _ => NoteKind::Normal,
                };
                out.notes.push(NoteEvent::new(time, key, kind));
            }
            ChannelStatus::ControlChange => {
                let controller = self.reader.read_data_byte()?;
                let _value = self.reader.read_data_byte()?;
                #[cfg(feature = "tracing")]
                if controller >= CHANNEL_MODE_START {
                    tracing::trace!(controller, "Skipping channel mode message");
                }
                #[cfg(not(feature = "tracing"))]
                let _ = (controller, CHANNEL_MODE_START);
            }
            other => {
                for _ in 0..other.data_len() {
                    self.reader.read_data_byte()?;
                }
            }
        }
        Ok(())
    }

    fn meta(&mut self, position: usize, out: &mut TrackEvents) -> ReadResult<Step> {
        let meta_type = self.reader.read_next()?;
        let len = self.reader.read_vlq()?;

        match MetaType::try_from_primitive(meta_type) {
            Ok(MetaType::Tempo) => {
                if len != 3 {
                    return Err(ReaderError::new(position, TempoError::Length(len)));
                }
                let tempo = Tempo::new_from_bytes(self.reader.read_exact_size()?)
                    .map_err(|e| ReaderError::new(position, e))?;
                out.tempos.push(TempoEvent::new(
                    self.current_tick as i64,
                    tempo.bpm(),
                    tempo.tick_duration_ms(self.division),
                ));
                Ok(Step::Continue)
            }
            Ok(MetaType::EndOfTrack) => {
                self.reader.skip(len as usize)?;
                Ok(Step::EndOfTrack)
            }
            Ok(_other) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(meta = ?_other, len, "Skipping meta event");
                self.reader.skip(len as usize)?;
                Ok(Step::Continue)
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(meta_type, len, "Skipping unknown meta event");
                self.reader.skip(len as usize)?;
                Ok(Step::Continue)
            }
        }
    }
}

/// Decode one track's event data into `out`. See [`TrackDecoder`].
pub fn decode_track(data: &[u8], division: u16, out: &mut TrackEvents) -> ReadResult<()> {
    TrackDecoder::new(data, division).decode(out)
}
