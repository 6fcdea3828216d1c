//! RNG determinism and distribution sanity tests
//!
//! The whole simulation hangs off one xorshift64* stream; these tests pin
//! down that the stream replays exactly from a seed and that the Poisson
//! sampler behaves like a Poisson sampler.

use bank_simulator_core_rs::RngManager;

#[test]
fn test_same_seed_same_sequence() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(12345);

    for _ in 0..1000 {
        assert_eq!(rng1.next(), rng2.next());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng1 = RngManager::new(1);
    let mut rng2 = RngManager::new(2);

    let a: Vec<u64> = (0..16).map(|_| rng1.next()).collect();
    let b: Vec<u64> = (0..16).map(|_| rng2.next()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_poisson_stream_replays_from_seed() {
    let mut rng1 = RngManager::new(777);
    let mut rng2 = RngManager::new(777);

    let a: Vec<u64> = (0..500).map(|_| rng1.poisson(2.5)).collect();
    let b: Vec<u64> = (0..500).map(|_| rng2.poisson(2.5)).collect();
    assert_eq!(a, b);
}

#[test]
fn test_poisson_sample_mean_near_lambda() {
    let mut rng = RngManager::new(42);
    let lambda = 4.0;
    let samples = 20_000;

    let total: u64 = (0..samples).map(|_| rng.poisson(lambda)).sum();
    let sample_mean = total as f64 / samples as f64;

    // Std error of the mean is sqrt(4/20000) ~ 0.014; a 0.1 band is wide
    // enough to never flake with a fixed seed.
    assert!(
        (sample_mean - lambda).abs() < 0.1,
        "Poisson sample mean {} too far from lambda {}",
        sample_mean,
        lambda
    );
}

#[test]
fn test_poisson_variance_near_lambda() {
    let mut rng = RngManager::new(42);
    let lambda = 3.0;
    let samples = 20_000;

    let values: Vec<u64> = (0..samples).map(|_| rng.poisson(lambda)).collect();
    let mean = values.iter().sum::<u64>() as f64 / samples as f64;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / samples as f64;

    // For Poisson, variance == mean.
    assert!(
        (variance - lambda).abs() < 0.2,
        "Poisson sample variance {} too far from lambda {}",
        variance,
        lambda
    );
}

#[test]
fn test_poisson_degenerates_to_zero_for_tiny_lambda() {
    let mut rng = RngManager::new(42);

    // With lambda = 1e-9 the chance of any arrival in 10_000 draws is
    // about 1e-5; a fixed seed makes this deterministic regardless.
    let total: u64 = (0..10_000).map(|_| rng.poisson(1e-9)).sum();
    assert_eq!(total, 0);
}

#[test]
fn test_range_covers_full_interval() {
    let mut rng = RngManager::new(9);
    let mut seen = [false; 4];

    for _ in 0..1000 {
        let v = rng.range(0, 4);
        seen[v as usize] = true;
    }
    assert!(seen.iter().all(|&s| s), "range(0, 4) missed a value: {:?}", seen);
}
