//! Customer queue (FIFO)
//!
//! Single shared line in front of the tellers. Insertion order is arrival
//! order, so the head always carries the earliest arrival tick of any
//! waiting customer.
//!
//! Backed by a `VecDeque` with owned storage: enqueue and dequeue are O(1)
//! with no per-customer allocation. This keeps the whole simulation at
//! O(ticks × tellers) rather than O(ticks × queue length).

use crate::models::customer::Customer;
use std::collections::VecDeque;

/// FIFO queue of waiting customers
///
/// # Example
/// ```
/// use bank_simulator_core_rs::{Customer, CustomerQueue};
///
/// let mut queue = CustomerQueue::new();
/// queue.enqueue(Customer::new(3));
/// queue.enqueue(Customer::new(4));
///
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.dequeue().unwrap().arrival_tick(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CustomerQueue {
    customers: VecDeque<Customer>,
}

impl CustomerQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            customers: VecDeque::new(),
        }
    }

    /// Add a customer to the rear of the queue
    pub fn enqueue(&mut self, customer: Customer) {
        self.customers.push_back(customer);
    }

    /// Remove and return the customer at the front of the queue
    ///
    /// Returns `None` on an empty queue; never blocks, never fails.
    pub fn dequeue(&mut self) -> Option<Customer> {
        self.customers.pop_front()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Number of customers currently waiting
    pub fn len(&self) -> usize {
        self.customers.len()
    }
}
