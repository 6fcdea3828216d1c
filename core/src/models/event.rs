//! Event logging for simulation auditing.
//!
//! The Event enum captures the significant state changes of a run. Events
//! enable:
//! - Debugging (understand what happened and when)
//! - Auditing (verify conservation of customers across phases)
//! - Analysis (extract per-tick patterns beyond the summary report)
//!
//! # Event Types
//!
//! Events are categorized by tick phase:
//! - **TellerFreed**: a teller's service completed at the start of a tick
//! - **Arrival**: a customer joined the queue
//! - **ServiceStart**: a customer left the queue for a teller
//!
//! # Example
//!
//! ```rust
//! use bank_simulator_core_rs::models::event::Event;
//!
//! let event = Event::ServiceStart {
//!     tick: 10,
//!     teller_index: 0,
//!     arrival_tick: 7,
//!     wait_ticks: 3,
//!     service_ticks: 2,
//! };
//!
//! assert_eq!(event.tick(), 10);
//! ```

use serde::{Deserialize, Serialize};

/// Simulation event capturing a state change.
///
/// All events include a tick number for temporal ordering. Events are
/// logged in the order they occur within a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A teller finished its service at the start of this tick
    TellerFreed { tick: usize, teller_index: usize },

    /// A customer arrived and joined the queue
    Arrival { tick: usize },

    /// A customer left the queue and began service at a teller
    ServiceStart {
        tick: usize,
        teller_index: usize,
        arrival_tick: usize,
        wait_ticks: usize,
        service_ticks: usize,
    },
}

impl Event {
    /// Tick at which the event occurred
    pub fn tick(&self) -> usize {
        match self {
            Event::TellerFreed { tick, .. } => *tick,
            Event::Arrival { tick } => *tick,
            Event::ServiceStart { tick, .. } => *tick,
        }
    }
}

/// Append-only log of all simulation events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no event has been logged
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in log order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Count events at a given tick matching a predicate
    pub fn count_at_tick(&self, tick: usize, predicate: impl Fn(&Event) -> bool) -> usize {
        self.events
            .iter()
            .filter(|e| e.tick() == tick && predicate(e))
            .count()
    }
}
