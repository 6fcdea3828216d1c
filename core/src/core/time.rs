//! Time management for the simulation
//!
//! The simulation operates in discrete ticks, one tick per simulated minute.
//! A run executes a fixed horizon of ticks (the operating window, e.g. 480
//! ticks for an 8-hour day) and never resets mid-run.

use serde::{Deserialize, Serialize};

/// Manages simulation time in discrete ticks up to a fixed horizon
///
/// # Example
/// ```
/// use bank_simulator_core_rs::SimulationClock;
///
/// let mut clock = SimulationClock::new(480); // 8-hour day
/// assert_eq!(clock.current_tick(), 0);
/// assert!(!clock.is_finished());
///
/// clock.advance_tick();
/// assert_eq!(clock.current_tick(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationClock {
    /// Ticks elapsed since simulation start
    current_tick: usize,
    /// Total ticks in the run (exclusive upper bound)
    horizon_ticks: usize,
}

impl SimulationClock {
    /// Create a new clock running ticks 0..horizon_ticks
    ///
    /// # Arguments
    /// * `horizon_ticks` - Number of ticks the run executes
    pub fn new(horizon_ticks: usize) -> Self {
        assert!(horizon_ticks > 0, "horizon_ticks must be positive");
        Self {
            current_tick: 0,
            horizon_ticks,
        }
    }

    /// Advance time by one tick
    pub fn advance_tick(&mut self) {
        self.current_tick += 1;
    }

    /// Get the current tick (total ticks since start)
    pub fn current_tick(&self) -> usize {
        self.current_tick
    }

    /// Get the run's horizon in ticks
    pub fn horizon_ticks(&self) -> usize {
        self.horizon_ticks
    }

    /// Check whether the run has executed its full horizon
    ///
    /// # Example
    /// ```
    /// use bank_simulator_core_rs::SimulationClock;
    ///
    /// let mut clock = SimulationClock::new(2);
    /// clock.advance_tick();
    /// clock.advance_tick();
    /// assert!(clock.is_finished());
    /// ```
    pub fn is_finished(&self) -> bool {
        self.current_tick >= self.horizon_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "horizon_ticks must be positive")]
    fn test_zero_horizon_panics() {
        SimulationClock::new(0);
    }

    #[test]
    fn test_clock_advances_one_tick_at_a_time() {
        let mut clock = SimulationClock::new(5);
        for expected in 0..5 {
            assert_eq!(clock.current_tick(), expected);
            assert!(!clock.is_finished());
            clock.advance_tick();
        }
        assert!(clock.is_finished());
    }
}
