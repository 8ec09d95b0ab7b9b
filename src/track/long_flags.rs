/// Number of lanes, one per MIDI key
pub const LANE_COUNT: usize = 128;

#[doc = r#"
Which lanes currently have an open long note.

Scratch state for decoding a single track. A fresh set is created for every
track, so a long note can never be closed by a different track.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongNoteFlags([bool; LANE_COUNT]);

impl Default for LongNoteFlags {
    fn default() -> Self {
        Self([false; LANE_COUNT])
    }
}

impl LongNoteFlags {
    /// All lanes closed
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `lane` has an open long note
    pub fn is_open(&self, lane: u8) -> bool {
        self.0.get(lane as usize).copied().unwrap_or(false)
    }

    /// Opens a long note on `lane`. Returns true if one was already open.
    pub fn open(&mut self, lane: u8) -> bool {
        match self.0.get_mut(lane as usize) {
            Some(flag) => core::mem::replace(flag, true),
            None => false,
        }
    }

    /// Closes the long note on `lane`. Returns true if one was open.
    pub fn close(&mut self, lane: u8) -> bool {
        match self.0.get_mut(lane as usize) {
            Some(flag) => core::mem::replace(flag, false),
            None => false,
        }
    }

    /// Lanes that are still open
    pub fn open_lanes(&self) -> impl Iterator<Item = u8> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, open)| **open)
            .map(|(lane, _)| lane as u8)
    }

    /// Closes every lane
    pub fn reset(&mut self) {
        self.0 = [false; LANE_COUNT];
    }
}
