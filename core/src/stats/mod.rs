//! Wait-time statistics.
//!
//! Operates on the collector's final sample, sorted ascending. Individual
//! statistic functions return a zero sentinel on an empty sample (no
//! division by zero, no out-of-bounds access); [`summarize`] is the
//! external contract and returns `None` instead, so callers can tell
//! "no data" apart from "data is all zero".
//!
//! Median and max require the sample pre-sorted; mean, mode, and standard
//! deviation are order-independent.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics of the wait-time distribution, in ticks.
///
/// # Example
/// ```
/// use bank_simulator_core_rs::stats::summarize;
///
/// let summary = summarize(&[3, 5, 7]).unwrap();
/// assert_eq!(summary.mean, 5.0);
/// assert_eq!(summary.median, 5.0);
/// assert_eq!(summary.max_wait, 7);
///
/// assert!(summarize(&[]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitTimeSummary {
    /// Arithmetic mean wait
    pub mean: f64,
    /// Middle wait (average of the two middle values for even counts)
    pub median: f64,
    /// Most frequent wait; ties broken by the smallest value
    pub mode: usize,
    /// Population standard deviation (divide by N, not N-1)
    pub std_dev: f64,
    /// Longest observed wait
    pub max_wait: usize,
}

/// Arithmetic mean; 0.0 on an empty sample.
pub fn mean(data: &[usize]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: u64 = data.iter().map(|&w| w as u64).sum();
    sum as f64 / data.len() as f64
}

/// Median of a sample sorted ascending; 0.0 on an empty sample.
///
/// Averages the two middle elements for even counts.
pub fn median(sorted_data: &[usize]) -> f64 {
    let n = sorted_data.len();
    if n == 0 {
        return 0.0;
    }
    debug_assert!(sorted_data.windows(2).all(|w| w[0] <= w[1]));

    if n % 2 == 0 {
        let lower = sorted_data[n / 2 - 1];
        let upper = sorted_data[n / 2];
        (lower + upper) as f64 / 2.0
    } else {
        sorted_data[n / 2] as f64
    }
}

/// Most frequent value; 0 on an empty sample.
///
/// Ties are broken by the smallest value: the scan walks candidate values
/// in ascending order and only replaces the current mode on a strictly
/// greater frequency. The tie-break is deliberate, not an artifact of map
/// iteration order — `BTreeMap` iteration is ascending by key.
pub fn mode(data: &[usize]) -> usize {
    if data.is_empty() {
        return 0;
    }

    let mut frequency: BTreeMap<usize, usize> = BTreeMap::new();
    for &value in data {
        *frequency.entry(value).or_insert(0) += 1;
    }

    let mut mode = 0;
    let mut max_freq = 0;
    for (value, freq) in frequency {
        if freq > max_freq {
            max_freq = freq;
            mode = value;
        }
    }
    mode
}

/// Population standard deviation given a precomputed mean; 0.0 on an
/// empty sample.
pub fn std_dev(data: &[usize], mean: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let sum_sq_diff: f64 = data
        .iter()
        .map(|&w| {
            let diff = w as f64 - mean;
            diff * diff
        })
        .sum();
    (sum_sq_diff / data.len() as f64).sqrt()
}

/// Longest wait in a sample sorted ascending; 0 on an empty sample.
pub fn max_wait(sorted_data: &[usize]) -> usize {
    sorted_data.last().copied().unwrap_or(0)
}

/// Compute the full summary over a sample sorted ascending.
///
/// Returns `None` on an empty sample; the caller reports "no statistics
/// available" rather than a row of zeros.
pub fn summarize(sorted_data: &[usize]) -> Option<WaitTimeSummary> {
    if sorted_data.is_empty() {
        return None;
    }

    let mean_value = mean(sorted_data);
    Some(WaitTimeSummary {
        mean: mean_value,
        median: median(sorted_data),
        mode: mode(sorted_data),
        std_dev: std_dev(sorted_data, mean_value),
        max_wait: max_wait(sorted_data),
    })
}
