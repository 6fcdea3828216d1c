//! Simulation orchestration
//!
//! The orchestrator owns all run state and drives the tick loop.

mod engine;

pub use engine::{
    Orchestrator, SimulationConfig, SimulationError, SimulationReport, TickResult,
    DEFAULT_HORIZON_TICKS,
};
