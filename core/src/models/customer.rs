//! Customer model
//!
//! A customer is fully described by the tick at which it joined the queue.
//! No further identity is needed: the wait time is the only thing the
//! simulation ever derives from a customer, and it falls out of the
//! arrival tick alone.

use serde::{Deserialize, Serialize};

/// A customer waiting for (or about to receive) teller service
///
/// # Example
/// ```
/// use bank_simulator_core_rs::Customer;
///
/// let customer = Customer::new(42);
/// assert_eq!(customer.arrival_tick(), 42);
/// assert_eq!(customer.wait_until(45), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Tick at which the customer entered the queue
    arrival_tick: usize,
}

impl Customer {
    /// Create a customer arriving at the given tick
    pub fn new(arrival_tick: usize) -> Self {
        Self { arrival_tick }
    }

    /// Tick at which the customer entered the queue
    pub fn arrival_tick(&self) -> usize {
        self.arrival_tick
    }

    /// Ticks waited if service starts at `service_tick`
    ///
    /// # Panics
    /// Panics in debug builds if `service_tick` precedes the arrival; the
    /// simulation never starts service before a customer exists.
    pub fn wait_until(&self, service_tick: usize) -> usize {
        debug_assert!(service_tick >= self.arrival_tick);
        service_tick - self.arrival_tick
    }
}
