/// What a [`NoteEvent`] means to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteKind {
    /// A single tap
    Normal,
    /// The head of a held note (note on at velocity 127)
    LongStart,
    /// The tail of a held note
    LongEnd,
}

#[doc = r#"
A playable note.

`time` is in ticks straight out of the decoder and in milliseconds after
the chart has been corrected through its tempo map.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteEvent {
    /// Ticks or milliseconds, see above
    pub time: i64,
    /// The MIDI key, 0-127
    pub lane: u8,
    /// Tap, hold head or hold tail
    pub kind: NoteKind,
}

impl NoteEvent {
    /// Create a new note
    pub const fn new(time: i64, lane: u8, kind: NoteKind) -> Self {
        Self { time, lane, kind }
    }
}

#[doc = r#"
A tempo change.

`time` is in ticks straight out of the decoder and in milliseconds after
correction. `tick_duration_ms` is always milliseconds per tick.
"#]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempoEvent {
    /// Ticks or milliseconds, see above
    pub time: i64,
    /// Beats per minute, truncated to one decimal place
    pub bpm: f64,
    /// Milliseconds represented by one tick at this tempo
    pub tick_duration_ms: f64,
}

impl TempoEvent {
    /// Create a new tempo change
    pub const fn new(time: i64, bpm: f64, tick_duration_ms: f64) -> Self {
        Self {
            time,
            bpm,
            tick_duration_ms,
        }
    }

    /// A tempo change at `bpm` whose tick duration is derived from `division`
    pub fn from_bpm(time: i64, bpm: f64, division: u16) -> Self {
        Self::new(time, bpm, crate::tick_duration_ms(bpm, division))
    }
}
