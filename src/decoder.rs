//! Stream decoder.
//!
//! Correction records are popped from the tail in reverse order of creation.
//! Each one names the start of a collapsed window; the marker bit inside the
//! window gives its period, and the dropped tail is replayed from it.

use tracing::debug;

use crate::record::CorrectionRecord;
use crate::{Config, DeperiodError};

/// Invert [`encode`](crate::encode), returning the original `n` bits.
///
/// Words not produced by the encoder with the same configuration decode to
/// unspecified output or a [`DeperiodError::Decode`].
pub fn decode(encoded: &[bool], cfg: &Config) -> Result<Vec<bool>, DeperiodError> {
    cfg.validate()?;
    if encoded.len() != cfg.encoded_len() {
        return Err(DeperiodError::LengthMismatch {
            expected: cfg.encoded_len(),
            actual: encoded.len(),
        });
    }

    let width = cfg.record_index_width();
    let mut bits = encoded.to_vec();
    let mut unwinds = 0usize;

    while let Some(record) = CorrectionRecord::pop_from(&mut bits, width)? {
        if unwinds >= cfg.max_corrections {
            return Err(DeperiodError::Decode(format!(
                "more than {} correction records",
                cfg.max_corrections
            )));
        }
        unwinds += 1;
        expand_window(&mut bits, record.index, cfg)?;
        debug_assert_eq!(bits.len(), cfg.encoded_len());
    }

    debug_assert_eq!(bits.len(), cfg.n);
    Ok(bits)
}

/// Re-expand the window collapsed at `start`.
fn expand_window(bits: &mut Vec<bool>, start: usize, cfg: &Config) -> Result<(), DeperiodError> {
    let (l, p) = (cfg.l, cfg.p);
    if start.checked_add(p).filter(|&end| end <= bits.len()).is_none() {
        return Err(DeperiodError::Decode(format!(
            "window start {start} out of range for {} remaining bits",
            bits.len()
        )));
    }

    let marker = (start + 1..start + p)
        .rev()
        .find(|&j| bits[j])
        .ok_or_else(|| DeperiodError::Decode(format!("no period marker in window at {start}")))?;
    let period = marker - start;
    debug!(start, period, "expanding window");

    bits.splice(start + p..start + p, std::iter::repeat(false).take(l - p));
    for k in start + period..start + l {
        bits[k] = bits[k - period];
    }
    Ok(())
}
