//! Wait-time collection
//!
//! Growable sequence of served customers' wait durations, in the order
//! customers were served. Sorting happens once, in the analysis phase,
//! never during the run.
//!
//! Growth is amortized O(1) (Vec doubling). Allocation failure is uniformly
//! fatal through the global allocator; the sample is never silently
//! truncated, so statistics always describe every served customer.

use serde::{Deserialize, Serialize};

/// Initial capacity for the wait-time sample; a tuning parameter, not a
/// semantic contract.
const INITIAL_CAPACITY: usize = 100;

/// Growable store of served customers' wait times (in ticks)
///
/// # Example
/// ```
/// use bank_simulator_core_rs::WaitTimeCollector;
///
/// let mut collector = WaitTimeCollector::new();
/// collector.record(5);
/// collector.record(2);
///
/// assert_eq!(collector.len(), 2);
/// assert_eq!(collector.into_sorted(), vec![2, 5]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitTimeCollector {
    /// Wait durations in served order (unsorted until analysis)
    wait_times: Vec<usize>,
}

impl WaitTimeCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self {
            wait_times: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append one served customer's wait duration
    pub fn record(&mut self, wait_ticks: usize) {
        self.wait_times.push(wait_ticks);
    }

    /// Number of wait times recorded (customers served so far)
    pub fn len(&self) -> usize {
        self.wait_times.len()
    }

    /// Check if no customer has been served yet
    pub fn is_empty(&self) -> bool {
        self.wait_times.is_empty()
    }

    /// Read-only view of the sample in served order
    pub fn as_slice(&self) -> &[usize] {
        &self.wait_times
    }

    /// Consume the collector and return the sample sorted ascending
    ///
    /// The analysis phase needs ascending order for median and max; the
    /// other statistics are order-independent.
    pub fn into_sorted(self) -> Vec<usize> {
        let mut sorted = self.wait_times;
        sorted.sort_unstable();
        sorted
    }
}

impl Default for WaitTimeCollector {
    fn default() -> Self {
        Self::new()
    }
}
