#![doc = r#"
MIDI variable length quantities

Delta times and meta/SysEx lengths are stored big-endian, seven bits per byte.
Every byte but the last has its high bit set:

```text
0x00000000 -> 00
0x00000080 -> 81 00
0x0FFFFFFF -> FF FF FF 7F
```
"#]

use crate::StreamError;

/// The longest quantity a Standard MIDI File may contain
pub const MAX_VLQ_LEN: usize = 4;

/// The largest value representable in [`MAX_VLQ_LEN`] bytes
pub const MAX_VLQ_VALUE: u32 = 0x0FFF_FFFF;

/// Decode the quantity at the start of `bytes`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
/// [`StreamError::OutOfBounds`] if `bytes` ends before a terminating byte,
/// [`StreamError::VlqOverflow`] if no terminator appears within [`MAX_VLQ_LEN`] bytes.
pub fn decode(bytes: &[u8]) -> Result<(u32, usize), StreamError> {
    let mut value: u32 = 0;
    for i in 0..MAX_VLQ_LEN {
        let byte = *bytes.get(i).ok_or(StreamError::OutOfBounds)?;
        value = (value << 7) | (byte & 0x7F) as u32;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(StreamError::VlqOverflow)
}

/// Encode `value` into `out`, returning the number of bytes written.
///
/// Values above [`MAX_VLQ_VALUE`] are clamped to it.
pub fn encode(value: u32, out: &mut [u8; MAX_VLQ_LEN]) -> usize {
    let value = value.min(MAX_VLQ_VALUE);
    let mut groups = [0u8; MAX_VLQ_LEN];
    let mut len = 0;
    let mut rest = value;
    loop {
        groups[len] = (rest & 0x7F) as u8;
        len += 1;
        rest >>= 7;
        if rest == 0 {
            break;
        }
    }
    for (i, slot) in out.iter_mut().take(len).enumerate() {
        let group = groups[len - 1 - i];
        *slot = if i + 1 < len { group | 0x80 } else { group };
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(value: u32) -> u32 {
        let mut buf = [0; MAX_VLQ_LEN];
        let len = encode(value, &mut buf);
        let (decoded, read) = decode(&buf[..len]).unwrap();
        assert_eq!(read, len);
        decoded
    }

    #[test]
    fn decodes_reference_values() {
        assert_eq!(decode(&[0x00]), Ok((0, 1)));
        assert_eq!(decode(&[0x7F]), Ok((0x7F, 1)));
        assert_eq!(decode(&[0x81, 0x00]), Ok((0x80, 2)));
        assert_eq!(decode(&[0xC0, 0x00]), Ok((0x2000, 2)));
        assert_eq!(decode(&[0xFF, 0x7F]), Ok((0x3FFF, 2)));
        assert_eq!(decode(&[0x81, 0x80, 0x00]), Ok((0x4000, 3)));
        assert_eq!(decode(&[0xFF, 0xFF, 0xFF, 0x7F]), Ok((MAX_VLQ_VALUE, 4)));
    }

    #[test]
    fn stops_at_terminator() {
        assert_eq!(decode(&[0x83, 0x60, 0x90, 0x3C]), Ok((480, 2)));
    }

    #[test]
    fn boundaries_survive_encoding() {
        for value in [0, 1, 0x7F, 0x80, 0x3FFF, 0x4000, 0x1F_FFFF, 0x20_0000, MAX_VLQ_VALUE] {
            assert_eq!(round_trip(value), value);
        }
    }

    #[test]
    fn encode_clamps_large_values() {
        assert_eq!(round_trip(u32::MAX), MAX_VLQ_VALUE);
    }

    #[test]
    fn unterminated_is_overflow() {
        assert_eq!(decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F]), Err(StreamError::VlqOverflow));
        assert_eq!(decode(&[0x80; 8]), Err(StreamError::VlqOverflow));
    }

    #[test]
    fn running_off_the_end_is_out_of_bounds() {
        assert_eq!(decode(&[]), Err(StreamError::OutOfBounds));
        assert_eq!(decode(&[0x81, 0x80]), Err(StreamError::OutOfBounds));
    }
}
