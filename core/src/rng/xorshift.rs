//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This matters for:
//! - Debugging (reproduce an exact run)
//! - Testing (verify behavior against a fixed stream)
//!
//! A run that does not need reproducibility seeds itself from the wall
//! clock via [`RngManager::from_entropy`].

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use bank_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let service_ticks = rng.range(2, 4); // [2, 4)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Arguments
    /// * `seed` - Initial seed value (u64)
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create a new RNG seeded from the wall clock
    ///
    /// Used when a run does not ask for reproducibility. Each process start
    /// gets an unpredictable stream.
    pub fn from_entropy() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        Self::new(seed)
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state and returns a random value.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use bank_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let service_ticks = rng.range(2, 4); // 2 or 3
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Get current RNG state (for replaying a run)
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Useful for sampling from probability distributions.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) by dividing by 2^53
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Sample a Poisson-distributed count with mean `lambda`
    ///
    /// Knuth's product-of-uniforms method: multiply uniform(0,1) draws into
    /// a running product until it falls to `e^(-lambda)`; the number of
    /// draws minus one is the sample.
    ///
    /// Contract: `lambda > 0`. The orchestrator validates this before any
    /// sampling happens; a lambda near zero degenerates to returning 0
    /// with probability approaching 1.
    ///
    /// # Example
    /// ```
    /// use bank_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let arrivals = rng.poisson(1.5);
    /// ```
    pub fn poisson(&mut self, lambda: f64) -> u64 {
        debug_assert!(lambda > 0.0, "lambda must be positive");

        let threshold = (-lambda).exp();
        let mut product = 1.0;
        let mut draws: u64 = 0;

        loop {
            draws += 1;
            product *= self.next_f64();
            if product <= threshold {
                return draws - 1;
            }
        }
    }
}
