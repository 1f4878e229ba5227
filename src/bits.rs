//! Bit sequence helpers.
//!
//! Bit sequences are plain `Vec<bool>` values. Integers embedded in a
//! sequence are stored little-endian: index 0 holds the least significant
//! bit.

use crate::DeperiodError;

/// Encode `value` as exactly `width` little-endian bits.
///
/// Panics if `value` does not fit in `width` bits.
pub fn to_binary(value: usize, width: usize) -> Vec<bool> {
    assert!(
        width >= usize::BITS as usize || value >> width == 0,
        "value {value} does not fit in {width} bits"
    );
    (0..width)
        .map(|j| j < usize::BITS as usize && (value >> j) & 1 == 1)
        .collect()
}

/// Decode the first `width` bits of `bits` as a little-endian integer.
///
/// Bits at positions `>= usize::BITS` do not fit and are ignored; callers
/// that must reject them check with [`fits_usize`].
///
/// Panics if fewer than `width` bits are supplied.
pub fn from_binary(bits: &[bool], width: usize) -> usize {
    assert!(bits.len() >= width, "need {width} bits, got {}", bits.len());
    bits[..width]
        .iter()
        .take(usize::BITS as usize)
        .enumerate()
        .fold(0, |acc, (j, &b)| acc | ((b as usize) << j))
}

/// Whether the little-endian value in `bits` fits in a `usize`.
pub fn fits_usize(bits: &[bool]) -> bool {
    bits.iter().skip(usize::BITS as usize).all(|&b| !b)
}

/// `ceil(log2(n))`, with `ceil_log2(0) == ceil_log2(1) == 0`.
pub fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

/// Parse a textual bit string. Whitespace and `_` separators are skipped.
pub fn parse_bits(text: &str) -> Result<Vec<bool>, DeperiodError> {
    text.chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != '_')
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(DeperiodError::InvalidBit(other)),
        })
        .collect()
}

pub fn format_bits(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian_layout() {
        assert_eq!(to_binary(6, 4), vec![false, true, true, false]);
        assert_eq!(from_binary(&[true, false, true, true], 4), 13);
    }

    #[test]
    fn zero_width() {
        assert!(to_binary(0, 0).is_empty());
        assert_eq!(from_binary(&[], 0), 0);
    }

    #[test]
    fn from_binary_ignores_trailing_bits() {
        assert_eq!(from_binary(&[true, true, true], 2), 3);
    }

    #[test]
    fn wide_fields_beyond_usize() {
        let mut bits = to_binary(5, 100);
        assert_eq!(bits.len(), 100);
        assert!(fits_usize(&bits));
        assert_eq!(from_binary(&bits, 100), 5);
        bits[usize::BITS as usize + 3] = true;
        assert!(!fits_usize(&bits));
        assert_eq!(from_binary(&bits, 100), 5);
    }

    #[test]
    #[should_panic]
    fn to_binary_rejects_overflow() {
        to_binary(16, 4);
    }

    #[test]
    fn ceil_log2_values() {
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(16), 4);
        assert_eq!(ceil_log2(17), 5);
        assert_eq!(ceil_log2(20), 5);
    }

    #[test]
    fn parse_and_format() {
        let bits = parse_bits("10_1 1").unwrap();
        assert_eq!(bits, vec![true, false, true, true]);
        assert_eq!(format_bits(&bits), "1011");
        assert!(matches!(parse_bits("102"), Err(DeperiodError::InvalidBit('2'))));
    }
}
