//! Round Robin.
//!
//! # Algorithm
//!
//! Two queues: processes that have not arrived (sorted by arrival, ties in
//! input order) and a FIFO ready queue.
//!
//! 1. Move every process with `arrival <= clock` to the back of the ready
//!    queue. If the ready queue is still empty, idle until the next arrival.
//! 2. Pop the front process and run it for `min(quantum, remaining)`.
//! 3. If it still needs CPU, first admit everything that arrived during
//!    the slice, then re-enqueue it. A process arriving exactly when the
//!    quantum expires therefore runs before the preempted one.
//!
//! # Complexity
//! O(total_burst / quantum + n log n).

use std::collections::VecDeque;

use log::{debug, trace};

use super::state::Progress;
use super::{arrival_order, metrics};
use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, SchedulingResult, Timeline};
use crate::validation::validate_input;

/// Runs Round Robin over `processes` with the given time quantum.
pub fn round_robin(processes: &[Process], quantum: i64) -> Result<SchedulingResult, ScheduleError> {
    validate_input(processes, Some(quantum))?;
    debug!(
        "RR: scheduling {} processes with quantum {}",
        processes.len(),
        quantum
    );

    let (timeline, progress) = simulate(processes, quantum);
    let result = metrics::derive(Algorithm::RoundRobin, Some(quantum), processes, timeline)?;
    metrics::reconcile(&result, &progress)?;
    Ok(result)
}

fn simulate(processes: &[Process], quantum: i64) -> (Timeline, Vec<Progress>) {
    let mut progress: Vec<Progress> = processes
        .iter()
        .map(|p| Progress::new(p.burst_time))
        .collect();
    let mut incoming: VecDeque<usize> = arrival_order(processes).into();
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;

    while !incoming.is_empty() || !ready.is_empty() {
        admit(processes, &mut incoming, &mut ready, clock);

        let Some(current) = ready.pop_front() else {
            if let Some(&next) = incoming.front() {
                let next_arrival = processes[next].arrival_time;
                timeline.push_idle(clock, next_arrival);
                clock = next_arrival;
            }
            continue;
        };

        let process = &processes[current];
        let slice = quantum.min(progress[current].remaining());
        trace!("t={clock}: dispatch {} for {slice}", process.name);

        timeline.push(&process.name, clock, clock + slice);
        let finished = progress[current].advance(clock, slice);
        clock += slice;

        if !finished {
            admit(processes, &mut incoming, &mut ready, clock);
            ready.push_back(current);
        }
    }

    (timeline, progress)
}

/// Moves every process that has arrived by `clock` onto the ready queue.
fn admit(
    processes: &[Process],
    incoming: &mut VecDeque<usize>,
    ready: &mut VecDeque<usize>,
    clock: i64,
) {
    while let Some(&next) = incoming.front() {
        if !processes[next].has_arrived(clock) {
            break;
        }
        incoming.pop_front();
        ready.push_back(next);
    }
}
