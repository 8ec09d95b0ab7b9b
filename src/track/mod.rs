#![doc = r#"
Decoding of a single track's event data

A track is a sequence of `<delta-time> <event>` pairs:

```text
delta-time  VLQ ticks since the previous event
event       channel message   8n..En + 1 or 2 data bytes (status may be omitted)
            SysEx             F0 | F7, VLQ length, payload
            meta event        FF, type, VLQ length, payload
```

Only note on/off and Set Tempo produce output; every other event is
skipped by its length.
"#]

mod decoder;
pub use decoder::*;

mod long_flags;
pub use long_flags::*;

pub mod status;

use alloc::vec::Vec;

use crate::chart::{NoteEvent, TempoEvent};

/// Notes and tempo changes decoded from one track, timed in ticks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackEvents {
    /// Notes in decode order
    pub notes: Vec<NoteEvent>,
    /// Tempo changes in decode order
    pub tempos: Vec<TempoEvent>,
}

impl TrackEvents {
    /// True if nothing was decoded
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.tempos.is_empty()
    }

    /// Moves every event of `other` onto the end of `self`
    pub fn append(&mut self, other: &mut TrackEvents) {
        self.notes.append(&mut other.notes);
        self.tempos.append(&mut other.tempos);
    }
}
