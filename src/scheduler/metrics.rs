//! Per-process and aggregate metrics derivation.
//!
//! Turns a finished timeline into a [`SchedulingResult`]. Every policy
//! funnels through [`derive`], so all five report metrics the same way.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Start | Start of the process's first timeline event |
//! | Completion | End of its last timeline event |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | start - arrival |
//!
//! Averages are arithmetic means over all processes.

use log::debug;

use super::state::Progress;
use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, ScheduledProcess, SchedulingResult, Timeline};

/// Computes metrics for `processes` from a completed `timeline`.
///
/// Fails with [`ScheduleError::InternalInconsistency`] if a process never
/// appears on the timeline.
pub(crate) fn derive(
    algorithm: Algorithm,
    quantum: Option<i64>,
    processes: &[Process],
    timeline: Timeline,
) -> Result<SchedulingResult, ScheduleError> {
    let mut scheduled = Vec::with_capacity(processes.len());
    // Per-process values fit in i64; their sums may not.
    let mut total_waiting: i128 = 0;
    let mut total_turnaround: i128 = 0;
    let mut total_response: i128 = 0;

    for process in processes {
        let (first, last) = match (
            timeline.first_for(&process.name),
            timeline.last_for(&process.name),
        ) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(ScheduleError::InternalInconsistency {
                    process: process.name.clone(),
                    message: "process has no timeline event".to_string(),
                })
            }
        };

        let start_time = first.start_time;
        let completion_time = last.end_time;
        let turnaround_time = completion_time - process.arrival_time;
        let waiting_time = turnaround_time - process.burst_time;
        let response_time = start_time - process.arrival_time;

        total_waiting += i128::from(waiting_time);
        total_turnaround += i128::from(turnaround_time);
        total_response += i128::from(response_time);

        scheduled.push(ScheduledProcess {
            process: process.clone(),
            start_time,
            completion_time,
            turnaround_time,
            waiting_time,
            response_time,
        });
    }

    let count = processes.len() as f64;
    let result = SchedulingResult {
        algorithm,
        quantum,
        processes: scheduled,
        timeline,
        average_waiting_time: total_waiting as f64 / count,
        average_turnaround_time: total_turnaround as f64 / count,
        average_response_time: total_response as f64 / count,
    };

    debug!(
        "{} finished at t={}: avg waiting {:.2}, avg turnaround {:.2}, avg response {:.2}",
        algorithm,
        result.max_time(),
        result.average_waiting_time,
        result.average_turnaround_time,
        result.average_response_time
    );

    Ok(result)
}

/// Cross-checks derived metrics against a preemptive policy's own
/// bookkeeping. Both must agree on every start and completion.
pub(crate) fn reconcile(
    result: &SchedulingResult,
    progress: &[Progress],
) -> Result<(), ScheduleError> {
    for (scheduled, state) in result.processes.iter().zip(progress) {
        match *state {
            Progress::Finished {
                started_at,
                completed_at,
            } if started_at == scheduled.start_time
                && completed_at == scheduled.completion_time => {}
            Progress::Finished {
                started_at,
                completed_at,
            } => {
                return Err(ScheduleError::InternalInconsistency {
                    process: scheduled.name().to_string(),
                    message: format!(
                        "tracked [{started_at}, {completed_at}) but timeline shows [{}, {})",
                        scheduled.start_time, scheduled.completion_time
                    ),
                })
            }
            _ => {
                return Err(ScheduleError::InternalInconsistency {
                    process: scheduled.name().to_string(),
                    message: format!("{} ticks never executed", state.remaining()),
                })
            }
        }
    }
    Ok(())
}
