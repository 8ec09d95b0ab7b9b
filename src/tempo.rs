use crate::TempoError;

#[doc = r#"
The payload of a Set Tempo (`FF 51 03 tt tt tt`) meta event.

The three bytes are a big-endian count of microseconds per quarter note.

# Example
```rust
# use midichart::Tempo;
let tempo = Tempo::new_from_bytes([0x07, 0xA1, 0x20]).unwrap();
assert_eq!(tempo.micros_per_quarter_note(), 500_000);
assert_eq!(tempo.bpm(), 120.);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tempo(u32);

impl Tempo {
    /// Create a tempo from microseconds per quarter note
    pub const fn new(micros_per_quarter_note: u32) -> Result<Self, TempoError> {
        if micros_per_quarter_note == 0 {
            return Err(TempoError::Zero);
        }
        Ok(Self(micros_per_quarter_note))
    }

    /// Create a tempo from the three big-endian bytes of the meta event
    pub const fn new_from_bytes(bytes: [u8; 3]) -> Result<Self, TempoError> {
        Self::new(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Beats per minute, truncated to one decimal place
    pub fn bpm(&self) -> f64 {
        let bpm = 60_000_000. / self.0 as f64;
        // positive, so truncation is floor
        ((bpm * 10.) as u64) as f64 / 10.
    }

    /// Milliseconds per tick at `division` ticks per quarter note.
    ///
    /// Derived from the truncated [`bpm`](Self::bpm), not the exact tempo.
    pub fn tick_duration_ms(&self, division: u16) -> f64 {
        tick_duration_ms(self.bpm(), division)
    }
}

/// Milliseconds represented by one tick at `bpm` and `division` ticks per quarter note
pub fn tick_duration_ms(bpm: f64, division: u16) -> f64 {
    60. / bpm / division as f64 * 1000.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(Tempo::new_from_bytes([0, 0, 0]), Err(TempoError::Zero));
    }

    #[test]
    fn bpm_truncates_to_one_decimal() {
        // 60_000_000 / 428_571 = 140.00014
        assert_eq!(Tempo::new(428_571).unwrap().bpm(), 140.);
        // 60_000_000 / 461_538 = 130.00013
        assert_eq!(Tempo::new(461_538).unwrap().bpm(), 130.);
        // 60_000_000 / 600_000 = 100
        assert_eq!(Tempo::new(600_000).unwrap().bpm(), 100.);
        // 60_000_000 / 333_334 = 179.99964, truncated rather than rounded
        assert_eq!(Tempo::new(333_334).unwrap().bpm(), 179.9);
    }

    #[test]
    fn tick_duration_follows_division() {
        let tempo = Tempo::new(500_000).unwrap();
        assert_eq!(tempo.tick_duration_ms(500), 1.);
        assert!((tempo.tick_duration_ms(480) - 1.041_666_666).abs() < 1e-6);
    }
}
