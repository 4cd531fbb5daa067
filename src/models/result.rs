//! Scheduling result model.
//!
//! A result is the complete output of one policy run: the per-process
//! metrics, the execution timeline, and the averaged metrics. Every policy
//! returns the same shape so consumers can treat them uniformly.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | End of the process's last timeline event |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |

use serde::{Deserialize, Serialize};

use super::{Algorithm, Process, Timeline};

/// A process together with the metrics one run derived for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledProcess {
    /// The input descriptor (a copy; the caller's set is untouched).
    #[serde(flatten)]
    pub process: Process,
    /// First dispatch.
    pub start_time: i64,
    /// End of the final slice.
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
    /// start - arrival.
    pub response_time: i64,
}

impl ScheduledProcess {
    /// Process name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.process.name
    }
}

/// Output of one policy invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Policy that produced this result.
    pub algorithm: Algorithm,
    /// Time quantum, for Round Robin runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
    /// Per-process metrics, in the caller's input order.
    pub processes: Vec<ScheduledProcess>,
    /// Chronological CPU allocation, idle gaps included.
    pub timeline: Timeline,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean response time.
    pub average_response_time: f64,
}

impl SchedulingResult {
    /// End of the last timeline event (the playback horizon).
    pub fn max_time(&self) -> i64 {
        self.timeline.max_time()
    }

    /// Fraction of `[0, max_time)` during which the CPU was busy.
    ///
    /// Returns 0.0 for an empty timeline.
    pub fn cpu_utilization(&self) -> f64 {
        let horizon = self.max_time();
        if horizon <= 0 {
            return 0.0;
        }
        self.timeline.busy_time() as f64 / horizon as f64
    }

    /// Number of dispatches that switch from one process to a different one.
    ///
    /// Idle gaps are skipped, so `A idle B` counts as one switch.
    pub fn context_switches(&self) -> usize {
        let mut previous: Option<&str> = None;
        let mut switches = 0;
        for event in self.timeline.iter().filter(|e| !e.is_idle()) {
            if let Some(prev) = previous {
                if prev != event.process_name {
                    switches += 1;
                }
            }
            previous = Some(&event.process_name);
        }
        switches
    }

    /// Looks up a process's metrics by name.
    pub fn process(&self, name: &str) -> Option<&ScheduledProcess> {
        self.processes.iter().find(|p| p.name() == name)
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
