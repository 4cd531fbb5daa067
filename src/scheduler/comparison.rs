//! Running several policies over the same process set.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, SchedulingResult};

/// Results of several policies over one process set, in run order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Quantum used for Round Robin.
    pub quantum: i64,
    /// One result per algorithm.
    pub results: Vec<SchedulingResult>,
}

impl Comparison {
    /// Result for `algorithm`, if it was run.
    pub fn get(&self, algorithm: Algorithm) -> Option<&SchedulingResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }

    /// Iterates over results.
    pub fn iter(&self) -> std::slice::Iter<'_, SchedulingResult> {
        self.results.iter()
    }

    /// Result with the lowest average waiting time. Earlier results win ties.
    pub fn best_by_average_waiting(&self) -> Option<&SchedulingResult> {
        self.results.iter().fold(None, |best, r| match best {
            Some(b) if b.average_waiting_time <= r.average_waiting_time => Some(b),
            _ => Some(r),
        })
    }

    /// Result with the lowest average response time. Earlier results win ties.
    pub fn best_by_average_response(&self) -> Option<&SchedulingResult> {
        self.results.iter().fold(None, |best, r| match best {
            Some(b) if b.average_response_time <= r.average_response_time => Some(b),
            _ => Some(r),
        })
    }
}

/// Runs `algorithms` in order over the same process set.
///
/// Each run works on its own copy; the first failure aborts the batch.
pub fn run_selected(
    processes: &[Process],
    quantum: i64,
    algorithms: &[Algorithm],
) -> Result<Comparison, ScheduleError> {
    let results = algorithms
        .iter()
        .map(|algorithm| algorithm.run(processes, quantum))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "compared {} algorithms over {} processes",
        results.len(),
        processes.len()
    );
    Ok(Comparison { quantum, results })
}

/// Runs all five algorithms over the same process set.
///
/// # Example
///
/// ```
/// use sched_sim::models::{Algorithm, Process};
/// use sched_sim::scheduler::run_all;
///
/// let processes = vec![
///     Process::new(1).with_arrival(0).with_burst(5),
///     Process::new(2).with_arrival(1).with_burst(1),
/// ];
/// let comparison = run_all(&processes, 2).unwrap();
/// assert_eq!(comparison.results.len(), 5);
/// assert!(comparison.get(Algorithm::Srt).is_some());
/// ```
pub fn run_all(processes: &[Process], quantum: i64) -> Result<Comparison, ScheduleError> {
    run_selected(processes, quantum, &Algorithm::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tests::classic_processes;

    #[test]
    fn test_run_all_order() {
        let c = run_all(&classic_processes(), 2).unwrap();
        let order: Vec<Algorithm> = c.iter().map(|r| r.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
        assert_eq!(c.quantum, 2);
    }

    #[test]
    fn test_best_by_average_waiting() {
        // FCFS 5.75, RR 7.25, SPN 4.0, SRT 3.5, HRRN 4.25
        let c = run_all(&classic_processes(), 2).unwrap();
        assert_eq!(c.best_by_average_waiting().unwrap().algorithm, Algorithm::Srt);
    }

    #[test]
    fn test_run_selected_subset() {
        let c = run_selected(&classic_processes(), 2, &[Algorithm::Hrrn, Algorithm::Fcfs]).unwrap();
        assert_eq!(c.results.len(), 2);
        assert!(c.get(Algorithm::Srt).is_none());
        assert_eq!(c.results[0].algorithm, Algorithm::Hrrn);
    }

    #[test]
    fn test_invalid_quantum_aborts_batch() {
        assert!(run_all(&classic_processes(), 0).is_err());
        // Quantum is ignored when Round Robin is not selected
        assert!(run_selected(&classic_processes(), 0, &[Algorithm::Spn]).is_ok());
    }

    #[test]
    fn test_empty_comparison_has_no_best() {
        let c = Comparison {
            quantum: 1,
            results: Vec::new(),
        };
        assert!(c.best_by_average_waiting().is_none());
        assert!(c.best_by_average_response().is_none());
    }
}
