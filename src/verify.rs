//! Brute-force verification of the code for a given configuration.
//!
//! For each candidate input the verifier encodes, checks every window of the
//! encoded word against the period bound, decodes and compares with the
//! input. Inputs are enumerated as integers: bit `i` of the integer is bit
//! `i` of the input.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::Serialize;

use crate::bits::format_bits;
use crate::encoder::{encode_with_stats, EncodeStats};
use crate::period::compute_min_period;
use crate::{decode, Config, DeperiodError};

/// Check that every length-`l` window of `bits` has minimal period `>= p`.
pub fn check_period_bound(bits: &[bool], l: usize, p: usize) -> Result<(), DeperiodError> {
    if bits.len() < l {
        return Ok(());
    }
    for start in 0..=bits.len() - l {
        let period = compute_min_period(&bits[start..start + l])?;
        if period < p {
            return Err(DeperiodError::PeriodBound { start, period });
        }
    }
    Ok(())
}

/// Run the full check for one input.
pub fn verify_input(input: &[bool], cfg: &Config) -> Result<EncodeStats, DeperiodError> {
    let encoded = encode_with_stats(input, cfg)?;
    if encoded.bits.len() != cfg.encoded_len() {
        return Err(DeperiodError::LengthMismatch {
            expected: cfg.encoded_len(),
            actual: encoded.bits.len(),
        });
    }
    check_period_bound(&encoded.bits, cfg.l, cfg.p)?;
    let decoded = decode(&encoded.bits, cfg)?;
    if decoded != input {
        return Err(DeperiodError::RoundTrip {
            input: format_bits(input),
        });
    }
    Ok(encoded.stats)
}

/// Aggregate counters over a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub inputs: u64,
    pub corrected_inputs: u64,
    pub total_corrections: u64,
    pub max_corrections: usize,
    pub max_passes: usize,
    /// Number of inputs per correction count.
    pub histogram: BTreeMap<usize, u64>,
}

impl VerifyReport {
    pub fn record(&mut self, stats: &EncodeStats) {
        let corrections = stats.corrections.len();
        self.inputs += 1;
        if corrections > 0 {
            self.corrected_inputs += 1;
        }
        self.total_corrections += corrections as u64;
        self.max_corrections = self.max_corrections.max(corrections);
        self.max_passes = self.max_passes.max(stats.passes);
        *self.histogram.entry(corrections).or_default() += 1;
    }

    pub fn merge(&mut self, other: &VerifyReport) {
        self.inputs += other.inputs;
        self.corrected_inputs += other.corrected_inputs;
        self.total_corrections += other.total_corrections;
        self.max_corrections = self.max_corrections.max(other.max_corrections);
        self.max_passes = self.max_passes.max(other.max_passes);
        for (&k, &v) in &other.histogram {
            *self.histogram.entry(k).or_default() += v;
        }
    }

    /// Write the histogram as `corrections,inputs` rows.
    pub fn write_histogram_csv<W: std::io::Write>(&self, writer: W) -> Result<(), DeperiodError> {
        #[derive(Serialize)]
        struct Row {
            corrections: usize,
            inputs: u64,
        }
        let mut wtr = csv::Writer::from_writer(writer);
        for (&corrections, &inputs) in &self.histogram {
            wtr.serialize(Row { corrections, inputs })?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Input whose bits are the low `n` bits of `value`.
pub fn input_from_index(value: u64, n: usize) -> Vec<bool> {
    (0..n).map(|i| i < 64 && (value >> i) & 1 == 1).collect()
}

/// Verify every input whose integer form lies in `range`.
///
/// `progress` is called after each input with the number checked so far.
/// Stops at the first failing input.
pub fn verify_range<F>(
    cfg: &Config,
    range: Range<u64>,
    mut progress: F,
) -> Result<VerifyReport, DeperiodError>
where
    F: FnMut(u64),
{
    cfg.validate()?;
    let mut report = VerifyReport::default();
    for value in range {
        let input = input_from_index(value, cfg.n);
        let stats = verify_input(&input, cfg)?;
        report.record(&stats);
        progress(report.inputs);
    }
    Ok(report)
}

/// Verify all `2^n` inputs.
pub fn verify_exhaustive<F>(cfg: &Config, progress: F) -> Result<VerifyReport, DeperiodError>
where
    F: FnMut(u64),
{
    if cfg.n >= 64 {
        return Err(DeperiodError::Config(format!(
            "cannot enumerate 2^{} inputs",
            cfg.n
        )));
    }
    verify_range(cfg, 0..1u64 << cfg.n, progress)
}

/// Verify `count` inputs drawn from `rng`.
pub fn verify_samples<R, F>(
    cfg: &Config,
    count: u64,
    rng: &mut R,
    mut progress: F,
) -> Result<VerifyReport, DeperiodError>
where
    R: rand::Rng,
    F: FnMut(u64),
{
    cfg.validate()?;
    let mut report = VerifyReport::default();
    for _ in 0..count {
        let input: Vec<bool> = (0..cfg.n).map(|_| rng.gen()).collect();
        let stats = verify_input(&input, cfg)?;
        report.record(&stats);
        progress(report.inputs);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::parse_bits;

    #[test]
    fn bound_check_finds_first_violation() {
        let bits = parse_bits("0011101010").unwrap();
        assert!(check_period_bound(&bits, 4, 3).is_err());
        assert!(matches!(
            check_period_bound(&bits, 5, 3),
            Err(DeperiodError::PeriodBound { start: 4, period: 2 })
        ));
    }

    #[test]
    fn bound_check_on_short_sequence() {
        assert!(check_period_bound(&[true, true], 5, 3).is_ok());
    }

    #[test]
    fn input_enumeration_is_little_endian() {
        assert_eq!(input_from_index(0b110, 4), vec![false, true, true, false]);
    }

    #[test]
    fn exhaustive_small_configuration() {
        let cfg = Config::with_min_window(10, 3);
        let mut last = 0;
        let report = verify_exhaustive(&cfg, |done| last = done).unwrap();
        assert_eq!(report.inputs, 1024);
        assert_eq!(last, 1024);
        assert_eq!(report.histogram.values().sum::<u64>(), 1024);
        assert!(report.corrected_inputs > 0);
        assert_eq!(report.max_corrections, 3);
    }

    #[test]
    fn merge_combines_histograms() {
        let cfg = Config::with_min_window(8, 4);
        let mut a = verify_range(&cfg, 0..128, |_| {}).unwrap();
        let b = verify_range(&cfg, 128..256, |_| {}).unwrap();
        a.merge(&b);
        assert_eq!(a, verify_exhaustive(&cfg, |_| {}).unwrap());
    }

    #[test]
    fn histogram_csv() {
        let mut report = VerifyReport::default();
        report.record(&EncodeStats { passes: 1, corrections: vec![] });
        report.record(&EncodeStats { passes: 1, corrections: vec![] });
        let mut out = Vec::new();
        report.write_histogram_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "corrections,inputs\n0,2\n");
    }
}
