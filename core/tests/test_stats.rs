//! Fixed-sample statistics tests
//!
//! Every statistic has a closed-form answer on a small fixed sample;
//! these tests pin the exact values, including the empty-sample sentinels
//! and the mode tie-break.

use bank_simulator_core_rs::stats::{self, summarize};

#[test]
fn test_mean_fixed_samples() {
    assert_eq!(stats::mean(&[3, 5, 7]), 5.0);
    assert_eq!(stats::mean(&[2]), 2.0);
    assert_eq!(stats::mean(&[0, 10]), 5.0);
}

#[test]
fn test_median_fixed_samples() {
    assert_eq!(stats::median(&[3, 5, 7]), 5.0);
    assert_eq!(stats::median(&[3, 5, 7, 9]), 6.0);
    assert_eq!(stats::median(&[1]), 1.0);
    assert_eq!(stats::median(&[2, 3]), 2.5);
}

#[test]
fn test_mode_fixed_samples() {
    assert_eq!(stats::mode(&[1, 1, 2, 3]), 1);
    assert_eq!(stats::mode(&[4, 4, 4, 9]), 4);
}

#[test]
fn test_mode_tie_break_smallest_value_wins() {
    assert_eq!(stats::mode(&[1, 1, 3, 3]), 1);
    assert_eq!(stats::mode(&[7, 2, 7, 2]), 2);
    // All singletons tie; the smallest value is the mode
    assert_eq!(stats::mode(&[8, 3, 5]), 3);
}

#[test]
fn test_std_dev_fixed_samples() {
    assert_eq!(stats::std_dev(&[2, 2, 2], 2.0), 0.0);

    // Population std dev of [1, 2, 3, 4]: mean 2.5, variance 1.25
    let data = [1, 2, 3, 4];
    let mean = stats::mean(&data);
    let sd = stats::std_dev(&data, mean);
    assert!((sd - 1.25f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_max_wait_fixed_samples() {
    assert_eq!(stats::max_wait(&[0, 2, 11]), 11);
    assert_eq!(stats::max_wait(&[6]), 6);
}

#[test]
fn test_empty_sample_yields_no_summary() {
    assert!(summarize(&[]).is_none());
}

#[test]
fn test_summary_matches_individual_functions() {
    let sorted = [0, 1, 1, 4, 6];
    let summary = summarize(&sorted).unwrap();

    assert_eq!(summary.mean, stats::mean(&sorted));
    assert_eq!(summary.median, stats::median(&sorted));
    assert_eq!(summary.mode, stats::mode(&sorted));
    assert_eq!(summary.std_dev, stats::std_dev(&sorted, summary.mean));
    assert_eq!(summary.max_wait, stats::max_wait(&sorted));
}

#[test]
fn test_all_zero_sample_is_data_not_absence() {
    // Three customers served instantly: statistics exist and are zero,
    // distinct from "nobody served".
    let summary = summarize(&[0, 0, 0]).unwrap();
    assert_eq!(summary.mean, 0.0);
    assert_eq!(summary.median, 0.0);
    assert_eq!(summary.mode, 0);
    assert_eq!(summary.std_dev, 0.0);
    assert_eq!(summary.max_wait, 0);
}
