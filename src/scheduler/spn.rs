//! Shortest Process Next.
//!
//! # Algorithm
//!
//! At each dispatch point, among processes that have arrived, run the one
//! with the smallest burst to completion. Ties go to the process listed
//! first in the input.
//!
//! # Complexity
//! O(n²).

use log::debug;

use super::{metrics, non_preemptive};
use crate::dispatching::{rules, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, SchedulingResult};
use crate::validation::validate_processes;

/// Runs SPN over `processes`.
pub fn spn(processes: &[Process]) -> Result<SchedulingResult, ScheduleError> {
    validate_processes(processes)?;
    debug!("SPN: scheduling {} processes", processes.len());

    let engine = RuleEngine::new().with_rule(rules::Spn);
    let timeline = non_preemptive::run_to_completion(processes, &engine);
    metrics::derive(Algorithm::Spn, None, processes, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tests::{classic_processes, events};

    #[test]
    fn test_classic_scenario() {
        let r = spn(&classic_processes()).unwrap();
        // t=0 only P1; at t=5 P4 (2) < P2 (3) < P3 (8)
        assert_eq!(
            events(&r),
            vec![("P1", 0, 5), ("P4", 5, 7), ("P2", 7, 10), ("P3", 10, 18)]
        );
        let waits: Vec<i64> = r.processes.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waits, vec![0, 6, 8, 2]);
        assert!((r.average_waiting_time - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_burst_ties_go_to_input_order() {
        let processes = vec![
            Process::new(1).with_arrival(0).with_burst(2),
            Process::new(2).with_name("B").with_arrival(1).with_burst(3),
            Process::new(3).with_name("C").with_arrival(0).with_burst(3),
        ];
        // At t=2 both 3-tick processes are ready; B is listed first even
        // though C arrived earlier.
        let r = spn(&processes).unwrap();
        assert_eq!(
            events(&r),
            vec![("P1", 0, 2), ("B", 2, 5), ("C", 5, 8)]
        );
    }

    #[test]
    fn test_idle_to_earliest_future_arrival() {
        let processes = vec![
            Process::new(1).with_arrival(9).with_burst(1),
            Process::new(2).with_arrival(4).with_burst(5),
        ];
        let r = spn(&processes).unwrap();
        assert_eq!(events(&r), vec![("idle", 0, 4), ("P2", 4, 9), ("P1", 9, 10)]);
    }

    #[test]
    fn test_does_not_preempt() {
        let processes = vec![
            Process::new(1).with_arrival(0).with_burst(10),
            Process::new(2).with_arrival(1).with_burst(1),
        ];
        let r = spn(&processes).unwrap();
        assert_eq!(events(&r), vec![("P1", 0, 10), ("P2", 10, 11)]);
    }
}
