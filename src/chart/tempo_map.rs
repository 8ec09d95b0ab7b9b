use alloc::vec::Vec;

use super::{NoteEvent, TempoEvent};

#[doc = r#"
A piecewise-linear map from ticks to milliseconds.

Each tempo event opens a segment at its raw tick. The segment's start in
milliseconds is the previous segment's start plus the ticks between them
at the previous segment's tick duration:

```text
ms[0] = tick[0]
ms[j] = ms[j-1] + (tick[j] - tick[j-1]) * tick_duration[j-1]
```

A tick `t` then maps through the last segment whose raw tick is `<= t`:
`(t - tick[j]) * tick_duration[j] + ms[j]`. Ticks before every segment use
the fallback tick duration from tick zero. Each product is truncated to a
whole millisecond before it is added.

The map keeps raw ticks and corrected times apart, so correcting an event
never changes what later lookups see.

# Example
```rust
# use midichart::prelude::*;
let tempos = [
    TempoEvent::new(0, 120., 1.0),
    TempoEvent::new(480, 240., 0.5),
];
let map = TempoMap::new(&tempos, 1.0);

assert_eq!(map.tick_to_ms(480), 480);
assert_eq!(map.tick_to_ms(720), 600);
```
"#]
#[derive(Debug, Clone, PartialEq)]
pub struct TempoMap {
    raw_ticks: Vec<i64>,
    segment_ms: Vec<i64>,
    tick_durations: Vec<f64>,
    fallback_tick_duration: f64,
}

impl TempoMap {
    /// Build the map from tempo events still timed in ticks.
    ///
    /// `fallback_tick_duration` (ms per tick) covers ticks before the first
    /// tempo event, or every tick if there is none.
    pub fn new(tempos: &[TempoEvent], fallback_tick_duration: f64) -> Self {
        let raw_ticks: Vec<i64> = tempos.iter().map(|t| t.time).collect();
        let tick_durations: Vec<f64> = tempos.iter().map(|t| t.tick_duration_ms).collect();

        let mut segment_ms = Vec::with_capacity(raw_ticks.len());
        for (j, &tick) in raw_ticks.iter().enumerate() {
            let ms = match j {
                0 => tick,
                _ => {
                    let elapsed = tick - raw_ticks[j - 1];
                    #[cfg(feature = "tracing")]
                    if elapsed < 0 {
                        tracing::warn!(
                            index = j,
                            tick,
                            previous = raw_ticks[j - 1],
                            "Tempo events are out of tick order"
                        );
                    }
                    segment_ms[j - 1] + scale(elapsed, tick_durations[j - 1])
                }
            };
            segment_ms.push(ms);
        }

        Self {
            raw_ticks,
            segment_ms,
            tick_durations,
            fallback_tick_duration,
        }
    }

    /// Number of tempo segments
    pub fn len(&self) -> usize {
        self.raw_ticks.len()
    }

    /// True if the map holds no tempo events and only the fallback applies
    pub fn is_empty(&self) -> bool {
        self.raw_ticks.is_empty()
    }

    /// Corrected start of every segment in milliseconds, in tempo event order
    pub fn segment_times(&self) -> &[i64] {
        &self.segment_ms
    }

    /// The millisecond time of raw tick `tick`
    pub fn tick_to_ms(&self, tick: i64) -> i64 {
        match self.raw_ticks.iter().rposition(|&start| start <= tick) {
            Some(j) => scale(tick - self.raw_ticks[j], self.tick_durations[j]) + self.segment_ms[j],
            None => scale(tick, self.fallback_tick_duration),
        }
    }

    /// Rewrite tick times as milliseconds in place.
    ///
    /// `tempos` must be the events the map was built from. Neither sequence
    /// is reordered.
    pub fn apply(&self, tempos: &mut [TempoEvent], notes: &mut [NoteEvent]) {
        for (tempo, &ms) in tempos.iter_mut().zip(&self.segment_ms) {
            tempo.time = ms;
        }

        #[cfg(feature = "tracing")]
        {
            let first = self.raw_ticks.first().copied();
            let early = notes
                .iter()
                .filter(|n| first.is_none_or(|first| n.time < first))
                .count();
            if early > 0 {
                tracing::warn!(
                    notes = early,
                    fallback_tick_duration = self.fallback_tick_duration,
                    "Notes before the first tempo event use the fallback tempo"
                );
            }
        }

        for note in notes.iter_mut() {
            note.time = self.tick_to_ms(note.time);
        }
    }
}

/// Converts tick-timed tempo and note sequences to milliseconds.
///
/// Shorthand for building a [`TempoMap`] from `tempos` and applying it.
pub fn correct(tempos: &mut [TempoEvent], notes: &mut [NoteEvent], fallback_tick_duration: f64) {
    TempoMap::new(tempos, fallback_tick_duration).apply(tempos, notes);
}

fn scale(ticks: i64, tick_duration: f64) -> i64 {
    (ticks as f64 * tick_duration) as i64
}
