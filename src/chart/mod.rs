#![doc = r#"
The decoded chart: notes and tempo changes in milliseconds
"#]

mod event;
pub use event::*;

mod tempo_map;
pub use tempo_map::*;

use alloc::{borrow::Cow, vec::Vec};

use crate::file::{self, Header, LoadError, LoadOptions, TrackFailure};

#[doc = r#"
Every note and tempo change of a MIDI file, timed in milliseconds.

Events are in decode order: track by track, in the order each track lists
them. Tracks are not merged by time.
"#]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    pub(crate) header: Header,
    pub(crate) notes: Vec<NoteEvent>,
    pub(crate) tempos: Vec<TempoEvent>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) failures: Vec<TrackFailure>,
}

impl Chart {
    /// Decode a complete MIDI file with the default [`LoadOptions`]
    pub fn parse<'a, B>(bytes: B) -> Result<Self, LoadError>
    where
        B: Into<Cow<'a, [u8]>>,
    {
        Self::parse_with(bytes, &LoadOptions::default())
    }

    /// Decode a complete MIDI file
    pub fn parse_with<'a, B>(bytes: B, options: &LoadOptions) -> Result<Self, LoadError>
    where
        B: Into<Cow<'a, [u8]>>,
    {
        file::load(bytes, options)
    }

    /// Drain `source` and decode it with the default [`LoadOptions`]
    #[cfg(feature = "std")]
    pub fn from_reader<R: std::io::Read>(source: R) -> Result<Self, LoadError> {
        Self::from_reader_with(source, &LoadOptions::default())
    }

    /// Drain `source` and decode it
    #[cfg(feature = "std")]
    pub fn from_reader_with<R: std::io::Read>(
        mut source: R,
        options: &LoadOptions,
    ) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        Self::parse_with(bytes, options)
    }

    /// The file's header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Notes, in milliseconds
    pub fn notes(&self) -> &[NoteEvent] {
        &self.notes
    }

    /// Tempo changes, in milliseconds
    pub fn tempos(&self) -> &[TempoEvent] {
        &self.tempos
    }

    /// Tracks that failed to decode and were skipped.
    ///
    /// Always empty unless [`TrackErrorPolicy::Skip`](crate::TrackErrorPolicy::Skip) was set.
    pub fn failures(&self) -> &[TrackFailure] {
        &self.failures
    }

    /// Returns the notes and tempo changes
    pub fn into_parts(self) -> (Vec<NoteEvent>, Vec<TempoEvent>) {
        (self.notes, self.tempos)
    }
}
