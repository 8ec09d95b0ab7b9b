#![doc = r#"
Standard MIDI File decoding for rhythm-game charts.

A MIDI file stores its events in abstract ticks whose real duration changes
whenever a Set Tempo meta event occurs. `midichart` decodes the file into two
flat sequences, playable [`NoteEvent`]s (with long-note pairing) and
[`TempoEvent`]s, and then reinterprets every tick timestamp through the
piecewise tempo map so both sequences carry elapsed milliseconds.

# Overview
```text
bytes --> [file::read_header_chunk] --> Header
      --> [file::read_track_chunk] x track_count
              --> [track::decode_track] --> raw NoteEvent / TempoEvent (ticks)
      --> [chart::TempoMap::correct]    --> NoteEvent / TempoEvent (ms)
```

# Long notes
Long notes are not a MIDI concept. A note on with velocity `127` opens a long
note on its lane, and the next note off (or note on with velocity `0`) on that
lane closes it.

# Example
```rust
# use midichart::prelude::*;
let bytes: &[u8] = &[
    // MThd, length 6, format 0, 1 track, 480 ticks per quarter note
    0x4D, 0x54, 0x68, 0x64, 0, 0, 0, 6, 0, 0, 0, 1, 0x01, 0xE0,
    // MTrk, length 15
    0x4D, 0x54, 0x72, 0x6B, 0, 0, 0, 15,
    0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20, // 120 bpm
    0x00, 0x90, 60, 100,                      // note on
    0x00, 0xFF, 0x2F, 0x00,                   // end of track
];
let chart = Chart::parse(bytes).unwrap();

assert_eq!(chart.tempos()[0].bpm, 120.);
assert_eq!(chart.notes()[0], NoteEvent::new(0, 60, NoteKind::Normal));
```
"#]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod chart;
pub mod file;
pub mod reader;
pub mod track;

mod tempo;
pub use tempo::*;

mod error;
pub use error::*;

pub use chart::{Chart, NoteEvent, NoteKind, TempoEvent};
pub use file::{Header, LoadOptions, TrackErrorPolicy};

#[doc = r#"
Common re-exports when working with `midichart`
"#]
pub mod prelude {
    pub use crate::chart::*;
    pub use crate::file::*;
    pub use crate::reader::{ReadResult, Reader, ReaderError, ReaderErrorKind};
    pub use crate::track::{LongNoteFlags, TrackDecoder, TrackEvents, decode_track};
    pub use crate::{ChunkError, HeaderError, StreamError, Tempo, TempoError};
}
