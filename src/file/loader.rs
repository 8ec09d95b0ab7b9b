use alloc::{borrow::Cow, vec::Vec};

use super::{
    LoadError, LoadOptions, TrackErrorPolicy, TrackFailure, read_header_chunk, read_track_chunk,
};
use crate::{
    chart::{Chart, TempoMap},
    reader::Reader,
    tick_duration_ms,
    track::{TrackDecoder, TrackEvents},
};

/// Length of the `MTrk` id and length fields in front of each track's data
const TRACK_PREAMBLE: usize = 8;

/// Decode a complete MIDI file into a [`Chart`].
///
/// Reads the header, then exactly `track_count` track chunks. Each track is
/// decoded into its own buffer and appended in file order. Once every track
/// is in, note and tempo times are corrected from ticks to milliseconds.
///
/// # Errors
/// A [`LoadError::Header`] if the header chunk is unusable, a
/// [`LoadError::Track`] if a track chunk is missing or malformed, or if its
/// events fail to decode under [`TrackErrorPolicy::Abort`].
pub fn load<'a, B>(bytes: B, options: &LoadOptions) -> Result<Chart, LoadError>
where
    B: Into<Cow<'a, [u8]>>,
{
    let mut reader = Reader::from_bytes(bytes);
    let header = read_header_chunk(&mut reader).map_err(LoadError::Header)?;

    let mut events = TrackEvents::default();
    let mut failures = Vec::new();

    for track in 0..header.track_count as usize {
        let chunk_offset = reader.buffer_position();
        let chunk = read_track_chunk(&mut reader).map_err(|source| LoadError::Track {
            track,
            offset: 0,
            source,
        })?;
        let offset = chunk_offset + TRACK_PREAMBLE;

        let mut track_events = TrackEvents::default();
        let result = TrackDecoder::new(chunk.data(), header.division)
            .stop_at_end_of_track(options.stop_at_end_of_track)
            .decode(&mut track_events);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            track,
            bytes = chunk.len(),
            notes = track_events.notes.len(),
            tempos = track_events.tempos.len(),
            "Decoded track"
        );

        if let Err(error) = result {
            match options.track_errors {
                TrackErrorPolicy::Abort => {
                    return Err(LoadError::Track {
                        track,
                        offset,
                        source: error,
                    });
                }
                TrackErrorPolicy::Skip => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        track,
                        offset = offset + error.position(),
                        %error,
                        "Skipping rest of track"
                    );
                    failures.push(TrackFailure {
                        track,
                        offset,
                        error,
                    });
                }
            }
        }
        events.append(&mut track_events);
    }

    #[cfg(feature = "tracing")]
    if !reader.is_at_end() {
        tracing::debug!(bytes = reader.remaining(), "Ignoring data after the last track");
    }

    let TrackEvents {
        mut notes,
        mut tempos,
    } = events;
    let fallback = tick_duration_ms(options.fallback_bpm(), header.division);
    TempoMap::new(&tempos, fallback).apply(&mut tempos, &mut notes);

    Ok(Chart {
        header,
        notes,
        tempos,
        failures,
    })
}
