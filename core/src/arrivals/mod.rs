//! Arrival and service-time generation.
//!
//! This module turns the shared RNG stream into the two random processes
//! the simulation needs: a Poisson-distributed customer count per tick,
//! and a uniform integer service duration per assignment.
//!
//! # Key Principles
//!
//! 1. **Determinism**: same seed + same config → same arrivals
//! 2. **One stream**: both processes draw from the one `RngManager`
//! 3. **Poisson arrivals**: customer count per tick has mean `rate_per_tick`
//! 4. **Bounded service**: durations are uniform on a closed interval, ≥ 1
//!
//! # Example
//!
//! ```
//! use bank_simulator_core_rs::arrivals::{ArrivalConfig, ArrivalGenerator, ServiceTimeConfig};
//! use bank_simulator_core_rs::rng::RngManager;
//!
//! let mut rng = RngManager::new(42);
//! let mut generator = ArrivalGenerator::new(ArrivalConfig { rate_per_tick: 1.5 });
//! let customers = generator.generate(0, &mut rng);
//!
//! let service = ServiceTimeConfig::default(); // [2, 3] ticks
//! let duration = service.sample(&mut rng);
//! assert!(duration == 2 || duration == 3);
//! ```

use crate::models::customer::Customer;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// Configuration for customer arrivals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArrivalConfig {
    /// Expected number of arrivals per tick (Poisson λ parameter)
    pub rate_per_tick: f64,
}

/// Uniform closed interval for service durations, in ticks.
///
/// The reference configuration is [2, 3]: every customer takes two or
/// three simulated minutes at the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTimeConfig {
    /// Minimum service duration (inclusive, ≥ 1)
    min_ticks: usize,
    /// Maximum service duration (inclusive)
    max_ticks: usize,
}

impl ServiceTimeConfig {
    /// Create a service-time interval [min_ticks, max_ticks]
    ///
    /// Returns `None` when the interval is empty or would allow zero-length
    /// service (a teller must stay busy for at least one tick).
    pub fn new(min_ticks: usize, max_ticks: usize) -> Option<Self> {
        if min_ticks == 0 || min_ticks > max_ticks {
            return None;
        }
        Some(Self {
            min_ticks,
            max_ticks,
        })
    }

    /// Minimum service duration (inclusive)
    pub fn min_ticks(&self) -> usize {
        self.min_ticks
    }

    /// Maximum service duration (inclusive)
    pub fn max_ticks(&self) -> usize {
        self.max_ticks
    }

    /// Sample a uniformly-distributed duration from the interval
    pub fn sample(&self, rng: &mut RngManager) -> usize {
        rng.range(self.min_ticks as i64, self.max_ticks as i64 + 1) as usize
    }
}

impl Default for ServiceTimeConfig {
    /// Reference configuration: 2 to 3 ticks per customer
    fn default() -> Self {
        Self {
            min_ticks: 2,
            max_ticks: 3,
        }
    }
}

/// Generator for per-tick customer arrivals.
pub struct ArrivalGenerator {
    /// Arrival configuration
    config: ArrivalConfig,

    /// Running count of customers generated
    total_generated: usize,
}

impl ArrivalGenerator {
    /// Create a new arrival generator.
    ///
    /// The caller (orchestrator config validation) guarantees
    /// `rate_per_tick` is finite and positive before sampling starts.
    pub fn new(config: ArrivalConfig) -> Self {
        Self {
            config,
            total_generated: 0,
        }
    }

    /// Generate the customers arriving at the given tick.
    ///
    /// Samples a Poisson count with mean `rate_per_tick` and stamps each
    /// new customer with the current tick.
    pub fn generate(&mut self, tick: usize, rng: &mut RngManager) -> Vec<Customer> {
        let num_arrivals = rng.poisson(self.config.rate_per_tick);

        let mut customers = Vec::with_capacity(num_arrivals as usize);
        for _ in 0..num_arrivals {
            customers.push(Customer::new(tick));
        }

        self.total_generated += customers.len();
        customers
    }

    /// Total customers generated across all ticks so far
    pub fn total_generated(&self) -> usize {
        self.total_generated
    }
}
