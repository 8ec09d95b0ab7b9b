/// What to do when a track's event data fails to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackErrorPolicy {
    /// Fail the whole load
    #[default]
    Abort,
    /// Keep the events decoded before the failure, record it and move on
    Skip,
}

/// The tempo assumed where a file has not set one yet
pub const DEFAULT_BPM: f64 = 120.;

#[doc = r#"
Settings for [`Chart::parse_with`](crate::Chart::parse_with).

# Example
```rust
# use midichart::prelude::*;
let options = LoadOptions::default()
    .track_errors(TrackErrorPolicy::Skip)
    .default_bpm(150.);
assert!(!options.stop_at_end_of_track);
```
"#]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadOptions {
    /// Abort or skip on a broken track. Broken chunk framing always aborts.
    pub track_errors: TrackErrorPolicy,
    /// Tempo for notes before the first tempo event
    pub default_bpm: f64,
    /// End each track at its End of Track event rather than at the end of its data
    pub stop_at_end_of_track: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            track_errors: TrackErrorPolicy::default(),
            default_bpm: DEFAULT_BPM,
            stop_at_end_of_track: false,
        }
    }
}

impl LoadOptions {
    /// Set the [`TrackErrorPolicy`]
    pub fn track_errors(mut self, policy: TrackErrorPolicy) -> Self {
        self.track_errors = policy;
        self
    }

    /// Set the fallback tempo. Non-positive or non-finite values are ignored.
    pub fn default_bpm(mut self, bpm: f64) -> Self {
        if bpm.is_finite() && bpm > 0. {
            self.default_bpm = bpm;
        }
        self
    }

    /// Set whether End of Track ends decoding
    pub fn stop_at_end_of_track(mut self, stop: bool) -> Self {
        self.stop_at_end_of_track = stop;
        self
    }

    /// The fallback tempo, or [`DEFAULT_BPM`] if the configured one is unusable
    pub(crate) fn fallback_bpm(&self) -> f64 {
        if self.default_bpm.is_finite() && self.default_bpm > 0. {
            self.default_bpm
        } else {
            DEFAULT_BPM
        }
    }
}
