//! Orchestrator Engine
//!
//! Main simulation loop integrating all components:
//! - Teller tick-down (free tellers whose service completed)
//! - Customer arrivals (Poisson sampling)
//! - Teller assignment (index-ordered scan over the pool)
//! - Wait-time collection (one sample per served customer)
//! - Event logging (complete simulation history)
//!
//! # Architecture
//!
//! The Orchestrator implements the per-tick phase order:
//!
//! ```text
//! For each tick t in 0..horizon:
//! 1. Tick down busy tellers (service completed from earlier ticks frees
//!    the teller at the start of this tick, never in the same tick it
//!    was assigned)
//! 2. Sample arrivals and enqueue them with arrival_tick = t
//! 3. Assign waiting customers to idle tellers (an arrival at tick t is
//!    eligible for assignment within tick t)
//! 4. Advance time
//! ```
//!
//! The phase order is a correctness contract, not an implementation
//! convenience: swapping steps 1 and 3 would let a teller serve two
//! customers in overlapping ticks, and swapping 2 and 3 would force every
//! customer to wait at least one tick.
//!
//! # Example
//!
//! ```
//! use bank_simulator_core_rs::orchestrator::{Orchestrator, SimulationConfig};
//!
//! let mut config = SimulationConfig::new(1.5, 3);
//! config.rng_seed = Some(42);
//!
//! let report = Orchestrator::new(config).unwrap().run();
//! assert_eq!(
//!     report.total_arrived,
//!     report.total_served + report.remaining_in_queue
//! );
//! ```

use crate::arrivals::{ArrivalConfig, ArrivalGenerator, ServiceTimeConfig};
use crate::core::time::SimulationClock;
use crate::models::collector::WaitTimeCollector;
use crate::models::event::{Event, EventLog};
use crate::models::queue::CustomerQueue;
use crate::models::teller::TellerPool;
use crate::rng::RngManager;
use crate::stats::{summarize, WaitTimeSummary};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// Reference operating window: 480 ticks, one per minute of an 8-hour day.
pub const DEFAULT_HORIZON_TICKS: usize = 480;

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete simulation configuration
///
/// # Fields
///
/// * `lambda` - Mean customer arrivals per tick (Poisson λ)
/// * `num_tellers` - Fixed number of tellers for the run
/// * `horizon_ticks` - Ticks the run executes (reference: 480)
/// * `service_times` - Uniform closed interval of service durations
/// * `rng_seed` - `Some(seed)` for a reproducible run, `None` to seed from
///   the wall clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Mean arrivals per tick (must be finite and > 0)
    pub lambda: f64,

    /// Number of tellers (must be > 0)
    pub num_tellers: usize,

    /// Number of ticks to simulate (must be > 0)
    pub horizon_ticks: usize,

    /// Service-duration interval in ticks
    pub service_times: ServiceTimeConfig,

    /// RNG seed; None seeds from the wall clock (non-reproducible run)
    pub rng_seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a configuration with the reference horizon and service times
    ///
    /// # Example
    /// ```
    /// use bank_simulator_core_rs::SimulationConfig;
    ///
    /// let config = SimulationConfig::new(2.0, 4);
    /// assert_eq!(config.horizon_ticks, 480);
    /// ```
    pub fn new(lambda: f64, num_tellers: usize) -> Self {
        Self {
            lambda,
            num_tellers,
            horizon_ticks: DEFAULT_HORIZON_TICKS,
            service_times: ServiceTimeConfig::default(),
            rng_seed: None,
        }
    }
}

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// A run parameter failed validation before the simulation started
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The tick loop was driven past its fixed horizon
    #[error("simulation already finished at tick {0}")]
    HorizonReached(usize),
}

/// Result of a single tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    /// Tick number this result describes
    pub tick: usize,

    /// Tellers freed by the tick-down phase
    pub num_tellers_freed: usize,

    /// New customers this tick
    pub num_arrivals: usize,

    /// Customers moved from the queue to a teller this tick
    pub num_service_starts: usize,

    /// Customers still waiting at the end of the tick
    pub queue_len: usize,
}

/// Final report of a completed run
///
/// `summary` is `None` when no customer was served; the caller must report
/// "no statistics available" rather than zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Customers that arrived over the whole run
    pub total_arrived: usize,

    /// Customers whose service started before the horizon
    pub total_served: usize,

    /// Customers still waiting when the run ended
    pub remaining_in_queue: usize,

    /// Every served customer's wait, sorted ascending
    pub wait_times: Vec<usize>,

    /// Wait-time statistics, absent when nothing was served
    pub summary: Option<WaitTimeSummary>,
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Main orchestrator managing simulation state and the tick loop
///
/// The Orchestrator owns the queue, teller pool, collector, clock, and RNG
/// for the run's duration; they are created together and dropped together.
/// There is no sharing across concurrent runs.
///
/// # Determinism
///
/// All randomness flows through one seeded xorshift64* stream. A config
/// with `rng_seed: Some(seed)` replays identically.
pub struct Orchestrator {
    /// Time management
    clock: SimulationClock,

    /// Shared random stream (arrivals and service times)
    rng: RngManager,

    /// Per-tick Poisson arrival sampling
    arrival_generator: ArrivalGenerator,

    /// Service-duration interval
    service_times: ServiceTimeConfig,

    /// The single FIFO line
    queue: CustomerQueue,

    /// Fixed-size teller pool
    tellers: TellerPool,

    /// Wait times of served customers
    collector: WaitTimeCollector,

    /// Event log (all simulation events)
    event_log: EventLog,
}

impl Orchestrator {
    /// Create a new orchestrator from configuration
    ///
    /// Validates every parameter before building any state.
    ///
    /// # Returns
    ///
    /// * `Ok(Orchestrator)` - ready to run
    /// * `Err(SimulationError::InvalidParameter)` - validation failed
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let rng = match config.rng_seed {
            Some(seed) => RngManager::new(seed),
            None => RngManager::from_entropy(),
        };

        Ok(Self {
            clock: SimulationClock::new(config.horizon_ticks),
            rng,
            arrival_generator: ArrivalGenerator::new(ArrivalConfig {
                rate_per_tick: config.lambda,
            }),
            service_times: config.service_times,
            queue: CustomerQueue::new(),
            tellers: TellerPool::new(config.num_tellers),
            collector: WaitTimeCollector::new(),
            event_log: EventLog::new(),
        })
    }

    /// Validate configuration
    fn validate_config(config: &SimulationConfig) -> Result<(), SimulationError> {
        if !config.lambda.is_finite() || config.lambda <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "lambda must be finite and > 0, got {}",
                config.lambda
            )));
        }

        if config.num_tellers == 0 {
            return Err(SimulationError::InvalidParameter(
                "num_tellers must be > 0".to_string(),
            ));
        }

        if config.horizon_ticks == 0 {
            return Err(SimulationError::InvalidParameter(
                "horizon_ticks must be > 0".to_string(),
            ));
        }

        if config.service_times.min_ticks() == 0
            || config.service_times.min_ticks() > config.service_times.max_ticks()
        {
            return Err(SimulationError::InvalidParameter(format!(
                "service interval [{}, {}] must satisfy 1 <= min <= max",
                config.service_times.min_ticks(),
                config.service_times.max_ticks()
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get current tick number
    pub fn current_tick(&self) -> usize {
        self.clock.current_tick()
    }

    /// Whether the run has executed its full horizon
    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }

    /// Customers currently waiting
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Customers arrived so far
    pub fn total_arrivals(&self) -> usize {
        self.arrival_generator.total_generated()
    }

    /// Customers whose service has started so far
    pub fn total_served(&self) -> usize {
        self.collector.len()
    }

    /// Get reference to the event log
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    // ========================================================================
    // Tick Loop Implementation
    // ========================================================================

    /// Execute one simulation tick
    ///
    /// Runs the three phases in their contractual order (tick-down,
    /// arrivals, assignment) and advances the clock.
    ///
    /// # Returns
    ///
    /// * `Ok(TickResult)` - tick executed
    /// * `Err(SimulationError::HorizonReached)` - the run already finished
    pub fn tick(&mut self) -> Result<TickResult, SimulationError> {
        if self.clock.is_finished() {
            return Err(SimulationError::HorizonReached(self.clock.current_tick()));
        }

        let current_tick = self.clock.current_tick();

        // STEP 1: TELLER TICK-DOWN
        // Service that completed frees its teller at the start of this
        // tick, one full tick after the last minute of service.
        let freed = self.tellers.tick_down();
        let num_tellers_freed = freed.len();
        for teller_index in freed {
            self.event_log.log(Event::TellerFreed {
                tick: current_tick,
                teller_index,
            });
        }

        // STEP 2: ARRIVALS
        let new_customers = self.arrival_generator.generate(current_tick, &mut self.rng);
        let num_arrivals = new_customers.len();
        for customer in new_customers {
            self.event_log.log(Event::Arrival { tick: current_tick });
            self.queue.enqueue(customer);
        }

        // STEP 3: ASSIGNMENT
        // One internal index-ordered scan; an arrival from step 2 is
        // already eligible here.
        let starts = self.tellers.start_services(
            &mut self.queue,
            current_tick,
            &self.service_times,
            &mut self.rng,
        );
        let num_service_starts = starts.len();

        for start in starts {
            trace!(
                tick = current_tick,
                teller = start.teller_index,
                wait = start.wait_ticks,
                service = start.service_ticks,
                "service start"
            );
            self.collector.record(start.wait_ticks);
            self.event_log.log(Event::ServiceStart {
                tick: current_tick,
                teller_index: start.teller_index,
                arrival_tick: start.arrival_tick,
                wait_ticks: start.wait_ticks,
                service_ticks: start.service_ticks,
            });
        }

        self.clock.advance_tick();

        debug!(
            tick = current_tick,
            arrivals = num_arrivals,
            service_starts = num_service_starts,
            queue_len = self.queue.len(),
            "tick complete"
        );

        Ok(TickResult {
            tick: current_tick,
            num_tellers_freed,
            num_arrivals,
            num_service_starts,
            queue_len: self.queue.len(),
        })
    }

    /// Run all remaining ticks to the horizon and build the final report
    ///
    /// There is no early termination and no pause: the run always executes
    /// the full fixed horizon.
    pub fn run(mut self) -> SimulationReport {
        // tick() fails only once the horizon is reached, so this executes
        // exactly the remaining ticks.
        while self.tick().is_ok() {}

        let total_arrived = self.arrival_generator.total_generated();
        let remaining_in_queue = self.queue.len();
        let wait_times = self.collector.into_sorted();
        let total_served = wait_times.len();

        // Conservation: every generated customer is either served or
        // still in line.
        debug_assert_eq!(total_arrived, total_served + remaining_in_queue);

        let summary = summarize(&wait_times);

        SimulationReport {
            total_arrived,
            total_served,
            remaining_in_queue,
            wait_times,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config(lambda: f64, num_tellers: usize, horizon: usize) -> SimulationConfig {
        let mut config = SimulationConfig::new(lambda, num_tellers);
        config.horizon_ticks = horizon;
        config.rng_seed = Some(42);
        config
    }

    #[test]
    fn test_rejects_nonpositive_lambda() {
        for lambda in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let config = SimulationConfig::new(lambda, 1);
            assert!(matches!(
                Orchestrator::new(config),
                Err(SimulationError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_rejects_zero_tellers() {
        let config = SimulationConfig::new(1.0, 0);
        assert!(matches!(
            Orchestrator::new(config),
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_zero_horizon() {
        let mut config = SimulationConfig::new(1.0, 1);
        config.horizon_ticks = 0;
        assert!(matches!(
            Orchestrator::new(config),
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_tick_past_horizon_is_an_error() {
        let mut orchestrator = Orchestrator::new(seeded_config(1.0, 1, 2)).unwrap();
        orchestrator.tick().unwrap();
        orchestrator.tick().unwrap();
        assert!(orchestrator.is_finished());
        assert_eq!(
            orchestrator.tick(),
            Err(SimulationError::HorizonReached(2))
        );
    }

    #[test]
    fn test_tick_result_reports_current_tick() {
        let mut orchestrator = Orchestrator::new(seeded_config(1.0, 2, 5)).unwrap();

        let result = orchestrator.tick().unwrap();
        assert_eq!(result.tick, 0);
        assert_eq!(orchestrator.current_tick(), 1);
    }

    #[test]
    fn test_report_wait_times_sorted() {
        let report = Orchestrator::new(seeded_config(2.0, 1, 60)).unwrap().run();
        assert!(report.wait_times.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(report.total_served, report.wait_times.len());
    }
}
