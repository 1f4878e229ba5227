use serde::Serialize;

use crate::bits::ceil_log2;
use crate::DeperiodError;

/// Default cap on full encoder scan passes.
pub const DEFAULT_MAX_PASSES: usize = 4096;
/// Default cap on corrections applied by one encode, and on unwinds by one
/// decode. Decoding foreign words can cycle, so this also bounds decode time.
pub const DEFAULT_MAX_CORRECTIONS: usize = 4096;

/// Code parameters shared by the encoder and decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Payload length in bits. Encoded words are `n + 1` bits.
    pub n: usize,
    /// Window length.
    pub l: usize,
    /// Every length-`l` window of an encoded word has minimal period `>= p`.
    pub p: usize,
    /// Encoder gives up after this many full scan passes.
    pub max_passes: usize,
    /// Encoder gives up after this many corrections; the decoder after this
    /// many unwinds.
    pub max_corrections: usize,
}

impl Default for Config {
    /// The exhaustively checked configuration: `n = 20, l = 20, p = 14`.
    fn default() -> Self {
        Self::with_min_window(20, 14)
    }
}

impl Config {
    pub fn new(n: usize, l: usize, p: usize) -> Self {
        Self {
            n,
            l,
            p,
            max_passes: DEFAULT_MAX_PASSES,
            max_corrections: DEFAULT_MAX_CORRECTIONS,
        }
    }

    /// Configuration using the smallest admissible window,
    /// `l = ceil(log2 n) + p + 1`.
    pub fn with_min_window(n: usize, p: usize) -> Self {
        Self::new(n, min_window_len(n, p), p)
    }

    pub fn with_limits(mut self, max_passes: usize, max_corrections: usize) -> Self {
        self.max_passes = max_passes;
        self.max_corrections = max_corrections;
        self
    }

    /// Bits needed to address any window start, `ceil(log2 n)`.
    pub fn index_width(&self) -> usize {
        ceil_log2(self.n)
    }

    /// Width of the index field in a correction record. A collapse frees
    /// `l - p` bits; one goes to the flag and the rest hold the index.
    pub fn record_index_width(&self) -> usize {
        self.l - self.p - 1
    }

    /// Length of an encoded word.
    pub fn encoded_len(&self) -> usize {
        self.n + 1
    }

    /// Number of window starts in an encoded word.
    pub fn window_count(&self) -> usize {
        (self.encoded_len() + 1).saturating_sub(self.l)
    }

    pub fn validate(&self) -> Result<(), DeperiodError> {
        if self.n == 0 {
            return Err(DeperiodError::Config("n must be at least 1".into()));
        }
        if self.p == 0 {
            return Err(DeperiodError::Config("p must be at least 1".into()));
        }
        let min_l = self.index_width() + self.p + 1;
        if self.l < min_l {
            return Err(DeperiodError::Config(format!(
                "window length {} is below ceil(log2 {}) + {} + 1 = {}",
                self.l, self.n, self.p, min_l
            )));
        }
        Ok(())
    }
}

/// Smallest window length for which a collapse frees enough bits to store
/// its correction record.
pub fn min_window_len(n: usize, p: usize) -> usize {
    ceil_log2(n) + p + 1
}
