//! Period analysis over bit sequences.
//!
//! A sequence `s` of length `m` has period `p` (`1 <= p <= m`) when
//! `s[i] == s[i + p]` for every valid `i`, i.e. when it has a border of
//! length `m - p`. All routines run in `O(m)` using the Z-array.

use crate::DeperiodError;

/// Compute the Z-array of `s`.
///
/// `z[i]` is the length of the longest common prefix of `s` and `s[i..]`.
/// By convention `z[0] == s.len()`.
pub fn compute_z(s: &[bool]) -> Vec<usize> {
    let m = s.len();
    let mut z = vec![0; m];
    if m == 0 {
        return z;
    }
    z[0] = m;
    // [left, right) is the rightmost match box found so far.
    let (mut left, mut right) = (0usize, 0usize);
    for i in 1..m {
        if i < right {
            z[i] = (right - i).min(z[i - left]);
        }
        while i + z[i] < m && s[z[i]] == s[i + z[i]] {
            z[i] += 1;
        }
        if i + z[i] > right {
            left = i;
            right = i + z[i];
        }
    }
    z
}

/// Every period of `s`, ascending. Non-empty input always yields `s.len()`
/// as the last element.
pub fn compute_periods(s: &[bool]) -> Vec<usize> {
    let m = s.len();
    let z = compute_z(s);
    (1..=m)
        .filter(|&p| p == m || p + z[p] == m)
        .collect()
}

/// Smallest period of `s`.
pub fn compute_min_period(s: &[bool]) -> Result<usize, DeperiodError> {
    if s.is_empty() {
        return Err(DeperiodError::EmptySequence);
    }
    let m = s.len();
    let z = compute_z(s);
    Ok((1..m).find(|&p| p + z[p] == m).unwrap_or(m))
}

/// Check a single period directly against the definition.
pub fn has_period(s: &[bool], p: usize) -> bool {
    p >= 1 && p <= s.len() && s.iter().zip(&s[p..]).all(|(a, b)| a == b)
}
