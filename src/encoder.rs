//! Stream encoder.
//!
//! The encoder appends a terminator bit to the payload and then scans every
//! window start left to right, collapsing each window whose minimal period is
//! below `p`. Scans repeat until a full pass applies no correction. The
//! length of the working sequence is `n + 1` between corrections.

use tracing::{debug, trace};

use crate::corrector::{correct_window, violation_at};
use crate::record::{CorrectionRecord, TERMINATOR};
use crate::{Config, DeperiodError};

/// Counters collected while encoding one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct EncodeStats {
    /// Full scan passes, including the final clean one.
    pub passes: usize,
    /// Records in the order they were pushed. The decoder pops them in
    /// reverse.
    pub corrections: Vec<CorrectionRecord>,
}

/// Result of [`encode_with_stats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub bits: Vec<bool>,
    pub stats: EncodeStats,
}

/// Encode `input` into an `n + 1` bit word in which every length-`l` window
/// has minimal period at least `p`.
pub fn encode(input: &[bool], cfg: &Config) -> Result<Vec<bool>, DeperiodError> {
    encode_with_stats(input, cfg).map(|e| e.bits)
}

pub fn encode_with_stats(input: &[bool], cfg: &Config) -> Result<Encoded, DeperiodError> {
    cfg.validate()?;
    if input.len() != cfg.n {
        return Err(DeperiodError::LengthMismatch {
            expected: cfg.n,
            actual: input.len(),
        });
    }

    let mut out = Vec::with_capacity(cfg.encoded_len());
    out.extend_from_slice(input);
    out.push(TERMINATOR);

    let mut stats = EncodeStats::default();
    loop {
        if stats.passes >= cfg.max_passes {
            return Err(DeperiodError::NonConvergence {
                passes: stats.passes,
                corrections: stats.corrections.len(),
            });
        }
        stats.passes += 1;

        let mut found = false;
        for start in 0..cfg.window_count() {
            let Some(period) = violation_at(&out, start, cfg.l, cfg.p) else {
                continue;
            };
            if stats.corrections.len() >= cfg.max_corrections {
                return Err(DeperiodError::NonConvergence {
                    passes: stats.passes,
                    corrections: stats.corrections.len(),
                });
            }
            let record = correct_window(&mut out, start, period, cfg);
            debug!(pass = stats.passes, start, period, "collapsed window");
            stats.corrections.push(record);
            found = true;
        }
        trace!(pass = stats.passes, corrections = stats.corrections.len(), "scan finished");

        if !found {
            break;
        }
    }

    Ok(Encoded { bits: out, stats })
}
