//! Encode-side repair of a single window whose minimal period is too short.

use crate::period::compute_min_period;
use crate::record::CorrectionRecord;
use crate::Config;

/// Minimal period of the window starting at `start`, if it is below `p`.
///
/// Returns `None` when the window satisfies the bound or does not fit.
pub fn violation_at(bits: &[bool], start: usize, l: usize, p: usize) -> Option<usize> {
    let window = bits.get(start..start + l)?;
    match compute_min_period(window) {
        Ok(period) if period < p => Some(period),
        _ => None,
    }
}

/// Collapse the window at `start`, which has minimal period `period < p`.
///
/// The tail `[start + p, start + l)` is implied by the period and is dropped.
/// The bit at `start + period` is forced to `1` and the bits up to
/// `start + p` to `0`, so the decoder recovers `period` as the offset of the
/// last set bit in `(start, start + p)`. A record for `start` is then pushed
/// onto the tail, which restores the original length.
pub fn correct_window(
    bits: &mut Vec<bool>,
    start: usize,
    period: usize,
    cfg: &Config,
) -> CorrectionRecord {
    debug_assert!(period >= 1 && period < cfg.p);
    let before = bits.len();

    bits.drain(start + cfg.p..start + cfg.l);
    bits[start + period] = true;
    for bit in &mut bits[start + period + 1..start + cfg.p] {
        *bit = false;
    }

    let record = CorrectionRecord { index: start };
    record.push_onto(bits, cfg.record_index_width());
    debug_assert_eq!(bits.len(), before);
    record
}
