//! Process model.
//!
//! A process is a unit of CPU work with a known arrival time and a known
//! total burst. Processes are plain data: the engine borrows them and never
//! writes back into the caller's collection.
//!
//! # Time Representation
//! All times are integral ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique, caller-assigned identifier.
    pub id: u32,
    /// Display label. Keys timeline events, so it must be unique within a set.
    pub name: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Accepted for completeness; no implemented policy consults it.
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a process named `P{id}` arriving at t=0 with a one-tick burst.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: format!("P{id}"),
            arrival_time: 0,
            burst_time: 1,
            priority: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Response ratio at `time`: `(waited + burst) / burst`.
    pub fn response_ratio(&self, time: i64) -> f64 {
        let waited = (time - self.arrival_time).max(0);
        (waited + self.burst_time) as f64 / self.burst_time as f64
    }
}
