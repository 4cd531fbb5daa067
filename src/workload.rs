//! Random process-set generation.
//!
//! Produces valid workloads (unique IDs and names, non-negative arrivals,
//! positive bursts) for experiments and property checks. Generation is
//! reproducible from a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Parameters for a random workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival (inclusive).
    pub max_arrival: i64,
    /// Shortest possible burst (clamped to at least 1).
    pub min_burst: i64,
    /// Longest possible burst (inclusive).
    pub max_burst: i64,
    /// Priorities are drawn from `1..=max_priority`.
    pub max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Generates a process set with the given RNG.
    ///
    /// Processes are numbered from 1 and named `P1..Pn`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_arrival = self.max_arrival.max(0);
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);
        let max_priority = self.max_priority.max(1);

        (1..=self.count)
            .map(|i| {
                Process::new(i as u32)
                    .with_arrival(rng.random_range(0..=max_arrival))
                    .with_burst(rng.random_range(min_burst..=max_burst))
                    .with_priority(rng.random_range(1..=max_priority))
            })
            .collect()
    }

    /// Generates a process set from a fixed seed.
    pub fn generate_seeded(&self, seed: u64) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}
