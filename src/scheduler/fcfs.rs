//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (ties keep input order).
//! 2. Walk the sorted list with a clock, inserting idle time whenever the
//!    next process has not arrived yet.
//! 3. Run each process for its full burst.
//!
//! # Complexity
//! O(n log n).

use log::{debug, trace};

use super::{arrival_order, metrics};
use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, SchedulingResult, Timeline};
use crate::validation::validate_processes;

/// Runs FCFS over `processes`.
///
/// # Example
///
/// ```
/// use sched_sim::models::Process;
/// use sched_sim::scheduler::fcfs;
///
/// let processes = vec![
///     Process::new(1).with_arrival(0).with_burst(3),
///     Process::new(2).with_arrival(1).with_burst(2),
/// ];
/// let result = fcfs(&processes).unwrap();
/// assert_eq!(result.process("P2").unwrap().waiting_time, 2);
/// ```
pub fn fcfs(processes: &[Process]) -> Result<SchedulingResult, ScheduleError> {
    validate_processes(processes)?;
    debug!("FCFS: scheduling {} processes", processes.len());

    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;

    for idx in arrival_order(processes) {
        let process = &processes[idx];
        if process.arrival_time > clock {
            timeline.push_idle(clock, process.arrival_time);
            clock = process.arrival_time;
        }

        trace!("t={clock}: dispatch {} for {}", process.name, process.burst_time);
        timeline.push(&process.name, clock, clock + process.burst_time);
        clock += process.burst_time;
    }

    metrics::derive(Algorithm::Fcfs, None, processes, timeline)
}
