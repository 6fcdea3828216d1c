//! Teller model and fixed-size teller pool
//!
//! Each teller is either idle or busy with some remaining service time.
//! Rather than carrying a separate busy flag next to the counter (and a
//! flag/counter consistency invariant with it), busyness is defined as
//! `remaining_service_time > 0`. A teller therefore cannot be "busy with
//! zero time left" or "idle with time remaining".
//!
//! State machine per teller: Idle → Busy (on assignment, remaining time
//! sampled ≥ 1) → Idle (when the remaining time decrements to 0).
//!
//! The pool is fixed-size for the simulation's lifetime and is always
//! scanned in index order; the lowest-index idle teller picks up the next
//! waiting customer.

use crate::arrivals::ServiceTimeConfig;
use crate::models::customer::Customer;
use crate::models::queue::CustomerQueue;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// A single bank teller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Teller {
    /// Ticks left until this teller is free (0 = idle)
    remaining_service_time: usize,
}

impl Teller {
    /// Create an idle teller
    pub fn new() -> Self {
        Self {
            remaining_service_time: 0,
        }
    }

    /// Whether the teller is currently serving a customer
    pub fn is_busy(&self) -> bool {
        self.remaining_service_time > 0
    }

    /// Ticks left until this teller is free
    pub fn remaining_service_time(&self) -> usize {
        self.remaining_service_time
    }

    /// Count down one tick of service; idle tellers are untouched
    ///
    /// Never decrements below zero. When the counter reaches exactly 0 the
    /// teller is idle again.
    pub fn tick_down(&mut self) {
        if self.remaining_service_time > 0 {
            self.remaining_service_time -= 1;
        }
    }

    /// Occupy the teller for `service_ticks` ticks
    ///
    /// # Panics
    /// Panics in debug builds if `service_ticks` is 0 or the teller is
    /// already busy; the pool only assigns sampled times ≥ 1 to idle
    /// tellers.
    pub fn begin_service(&mut self, service_ticks: usize) {
        debug_assert!(service_ticks > 0, "service time must be at least one tick");
        debug_assert!(!self.is_busy(), "cannot assign a busy teller");
        self.remaining_service_time = service_ticks;
    }
}

/// Record of one customer moving from the queue to a teller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceStart {
    /// Index of the teller that took the customer
    pub teller_index: usize,
    /// Tick the customer originally joined the queue
    pub arrival_tick: usize,
    /// Ticks the customer spent waiting in the queue
    pub wait_ticks: usize,
    /// Sampled duration of the service now starting
    pub service_ticks: usize,
}

/// Fixed-size pool of tellers, scanned in index order
///
/// # Example
/// ```
/// use bank_simulator_core_rs::{Customer, CustomerQueue, RngManager, ServiceTimeConfig, TellerPool};
///
/// let mut pool = TellerPool::new(2);
/// let mut queue = CustomerQueue::new();
/// queue.enqueue(Customer::new(0));
///
/// let mut rng = RngManager::new(42);
/// let starts = pool.start_services(&mut queue, 3, &ServiceTimeConfig::default(), &mut rng);
///
/// assert_eq!(starts.len(), 1);
/// assert_eq!(starts[0].teller_index, 0);
/// assert_eq!(starts[0].wait_ticks, 3);
/// ```
#[derive(Debug, Clone)]
pub struct TellerPool {
    tellers: Vec<Teller>,
}

impl TellerPool {
    /// Create a pool of `num_tellers` idle tellers
    pub fn new(num_tellers: usize) -> Self {
        assert!(num_tellers > 0, "num_tellers must be positive");
        Self {
            tellers: vec![Teller::new(); num_tellers],
        }
    }

    /// Number of tellers in the pool
    pub fn len(&self) -> usize {
        self.tellers.len()
    }

    /// A pool is never empty; present for API completeness
    pub fn is_empty(&self) -> bool {
        self.tellers.is_empty()
    }

    /// Number of tellers currently serving a customer
    pub fn num_busy(&self) -> usize {
        self.tellers.iter().filter(|t| t.is_busy()).count()
    }

    /// Read access to a teller by index
    pub fn teller(&self, index: usize) -> Option<&Teller> {
        self.tellers.get(index)
    }

    /// Count down one tick of service for every busy teller
    ///
    /// Returns the indices of tellers freed by this tick (service that
    /// completed at the start of the tick), in index order.
    pub fn tick_down(&mut self) -> Vec<usize> {
        let mut freed = Vec::new();
        for (index, teller) in self.tellers.iter_mut().enumerate() {
            if teller.is_busy() {
                teller.tick_down();
                if !teller.is_busy() {
                    freed.push(index);
                }
            }
        }
        freed
    }

    /// Assign waiting customers to idle tellers, in index order
    ///
    /// Each idle teller takes at most one customer per tick; multiple idle
    /// tellers may each claim one customer within the same tick, lower
    /// index first. Service times are sampled fresh per assignment.
    ///
    /// Returns one [`ServiceStart`] per assignment, in assignment order.
    pub fn start_services(
        &mut self,
        queue: &mut CustomerQueue,
        current_tick: usize,
        service_times: &ServiceTimeConfig,
        rng: &mut RngManager,
    ) -> Vec<ServiceStart> {
        let mut starts = Vec::new();

        for (teller_index, teller) in self.tellers.iter_mut().enumerate() {
            if teller.is_busy() {
                continue;
            }

            let customer: Customer = match queue.dequeue() {
                Some(c) => c,
                None => break, // nobody left waiting
            };

            let wait_ticks = customer.wait_until(current_tick);
            let service_ticks = service_times.sample(rng);
            teller.begin_service(service_ticks);

            starts.push(ServiceStart {
                teller_index,
                arrival_tick: customer.arrival_tick(),
                wait_ticks,
                service_ticks,
            });
        }

        starts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "num_tellers must be positive")]
    fn test_zero_tellers_panics() {
        TellerPool::new(0);
    }

    #[test]
    fn test_new_pool_all_idle() {
        let pool = TellerPool::new(3);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.num_busy(), 0);
        for i in 0..3 {
            let teller = pool.teller(i).unwrap();
            assert!(!teller.is_busy());
            assert_eq!(teller.remaining_service_time(), 0);
        }
    }

    #[test]
    fn test_tick_down_frees_teller_at_exactly_zero() {
        let mut teller = Teller::new();
        teller.begin_service(2);
        assert!(teller.is_busy());

        teller.tick_down();
        assert!(teller.is_busy());
        assert_eq!(teller.remaining_service_time(), 1);

        teller.tick_down();
        assert!(!teller.is_busy());
        assert_eq!(teller.remaining_service_time(), 0);
    }

    #[test]
    fn test_tick_down_never_underflows_idle_teller() {
        let mut teller = Teller::new();
        teller.tick_down();
        teller.tick_down();
        assert_eq!(teller.remaining_service_time(), 0);
        assert!(!teller.is_busy());
    }

    #[test]
    fn test_pool_tick_down_reports_freed_count() {
        let mut pool = TellerPool::new(3);
        let mut queue = CustomerQueue::new();
        queue.enqueue(Customer::new(0));
        queue.enqueue(Customer::new(0));

        // Fixed 1-tick services so both assignments free on the next tick
        let config = ServiceTimeConfig::new(1, 1).unwrap();
        let mut rng = RngManager::new(1);
        let starts = pool.start_services(&mut queue, 0, &config, &mut rng);
        assert_eq!(starts.len(), 2);
        assert_eq!(pool.num_busy(), 2);

        assert_eq!(pool.tick_down(), vec![0, 1]);
        assert_eq!(pool.num_busy(), 0);
        assert!(pool.tick_down().is_empty());
    }

    #[test]
    fn test_lowest_index_idle_teller_wins() {
        let mut pool = TellerPool::new(3);
        let mut queue = CustomerQueue::new();
        let config = ServiceTimeConfig::default();
        let mut rng = RngManager::new(42);

        // Occupy teller 0, leave 1 and 2 idle
        queue.enqueue(Customer::new(0));
        pool.start_services(&mut queue, 0, &config, &mut rng);
        assert!(pool.teller(0).unwrap().is_busy());

        // Single waiting customer goes to teller 1, not 2
        queue.enqueue(Customer::new(1));
        let starts = pool.start_services(&mut queue, 1, &config, &mut rng);
        assert_eq!(starts.len(), 1);
        assert_eq!(starts[0].teller_index, 1);
        assert!(!pool.teller(2).unwrap().is_busy());
    }

    #[test]
    fn test_one_customer_per_idle_teller_per_tick() {
        let mut pool = TellerPool::new(2);
        let mut queue = CustomerQueue::new();
        let config = ServiceTimeConfig::default();
        let mut rng = RngManager::new(42);

        for _ in 0..5 {
            queue.enqueue(Customer::new(0));
        }

        let starts = pool.start_services(&mut queue, 0, &config, &mut rng);
        assert_eq!(starts.len(), 2, "two idle tellers take exactly two customers");
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_wait_computed_from_arrival_tick() {
        let mut pool = TellerPool::new(1);
        let mut queue = CustomerQueue::new();
        queue.enqueue(Customer::new(4));

        let config = ServiceTimeConfig::default();
        let mut rng = RngManager::new(42);
        let starts = pool.start_services(&mut queue, 10, &config, &mut rng);

        assert_eq!(starts[0].wait_ticks, 6);
        assert_eq!(starts[0].arrival_tick, 4);
        assert!(starts[0].service_ticks >= 2 && starts[0].service_ticks <= 3);
    }
}
