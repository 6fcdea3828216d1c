//! Bank Teller Simulator Core - Rust Engine
//!
//! Discrete-event simulation of customer flow through a multi-teller bank
//! over a fixed operating window, with descriptive statistics on wait times.
//!
//! # Architecture
//!
//! - **core**: Time management (the simulation clock)
//! - **models**: Domain types (Customer, CustomerQueue, TellerPool, WaitTimeCollector)
//! - **arrivals**: Poisson arrival and uniform service-time generation
//! - **orchestrator**: Main simulation loop
//! - **stats**: Post-run wait-time statistics
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All durations are whole ticks (one tick = one simulated minute)
//! 2. All randomness goes through one seeded RNG stream
//! 3. At every tick, total_arrived == total_served + queue length

// Module declarations
pub mod arrivals;
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod stats;

// Re-exports for convenience
pub use arrivals::{ArrivalConfig, ArrivalGenerator, ServiceTimeConfig};
pub use crate::core::time::SimulationClock;
pub use models::{
    collector::WaitTimeCollector,
    customer::Customer,
    event::{Event, EventLog},
    queue::CustomerQueue,
    teller::{ServiceStart, Teller, TellerPool},
};
pub use orchestrator::{
    Orchestrator, SimulationConfig, SimulationError, SimulationReport, TickResult,
};
pub use rng::RngManager;
pub use stats::{summarize, WaitTimeSummary};
