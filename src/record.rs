//! Correction records stored at the tail of a working sequence.
//!
//! Every collapse appends one record; the decoder pops them back off in
//! reverse order. The tail layout of a record is
//!
//! ```text
//! [index (index_width bits, little-endian)][flag]
//! ```
//!
//! where a flag of `0` marks a pending correction. The encoder seeds the
//! sequence with a single trailing `1`, which terminates the stack: once the
//! decoder sees a `1` flag there are no records left.

use crate::bits::{fits_usize, from_binary, to_binary};
use crate::DeperiodError;

/// Flag bit of a pending correction.
pub const PENDING: bool = false;
/// Trailing bit that terminates the record stack.
pub const TERMINATOR: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CorrectionRecord {
    /// Start of the collapsed window.
    pub index: usize,
}

impl CorrectionRecord {
    /// Number of bits the record occupies for the given index width.
    pub fn bit_len(index_width: usize) -> usize {
        index_width + 1
    }

    /// Append this record to the tail of `bits`.
    pub fn push_onto(&self, bits: &mut Vec<bool>, index_width: usize) {
        bits.extend(to_binary(self.index, index_width));
        bits.push(PENDING);
    }

    /// Pop the topmost record from the tail of `bits`.
    ///
    /// Returns `Ok(None)` and removes the terminator when the stack is empty.
    pub fn pop_from(
        bits: &mut Vec<bool>,
        index_width: usize,
    ) -> Result<Option<Self>, DeperiodError> {
        match bits.last() {
            None => Err(DeperiodError::Decode("missing terminator bit".into())),
            Some(&TERMINATOR) => {
                bits.pop();
                Ok(None)
            }
            Some(_) => {
                if bits.len() < Self::bit_len(index_width) {
                    return Err(DeperiodError::Decode(format!(
                        "truncated correction record: {} bits left, need {}",
                        bits.len(),
                        Self::bit_len(index_width)
                    )));
                }
                bits.pop();
                let start = bits.len() - index_width;
                if !fits_usize(&bits[start..]) {
                    return Err(DeperiodError::Decode(
                        "correction record index does not fit in usize".into(),
                    ));
                }
                let index = from_binary(&bits[start..], index_width);
                bits.truncate(start);
                Ok(Some(Self { index }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_pop_in_reverse_order() {
        let mut bits = vec![true, false, true, TERMINATOR];
        CorrectionRecord { index: 3 }.push_onto(&mut bits, 4);
        CorrectionRecord { index: 9 }.push_onto(&mut bits, 4);
        assert_eq!(bits.len(), 4 + 2 * CorrectionRecord::bit_len(4));

        assert_eq!(
            CorrectionRecord::pop_from(&mut bits, 4).unwrap(),
            Some(CorrectionRecord { index: 9 })
        );
        assert_eq!(
            CorrectionRecord::pop_from(&mut bits, 4).unwrap(),
            Some(CorrectionRecord { index: 3 })
        );
        assert_eq!(CorrectionRecord::pop_from(&mut bits, 4).unwrap(), None);
        assert_eq!(bits, vec![true, false, true]);
    }

    #[test]
    fn index_bits_are_little_endian() {
        let mut bits = Vec::new();
        CorrectionRecord { index: 1 }.push_onto(&mut bits, 3);
        assert_eq!(bits, vec![true, false, false, PENDING]);
    }

    #[test]
    fn wide_index_field() {
        let mut bits = vec![TERMINATOR];
        CorrectionRecord { index: 77 }.push_onto(&mut bits, 90);
        assert_eq!(bits.len(), 92);
        assert_eq!(
            CorrectionRecord::pop_from(&mut bits, 90).unwrap(),
            Some(CorrectionRecord { index: 77 })
        );

        let mut bits = vec![TERMINATOR];
        bits.extend(std::iter::repeat(true).take(90));
        bits.push(PENDING);
        assert!(matches!(
            CorrectionRecord::pop_from(&mut bits, 90),
            Err(DeperiodError::Decode(_))
        ));
    }

    #[test]
    fn truncated_record_is_rejected() {
        let mut bits = vec![true, PENDING];
        assert!(CorrectionRecord::pop_from(&mut bits, 5).is_err());
        assert!(CorrectionRecord::pop_from(&mut Vec::new(), 5).is_err());
    }
}
