//! Highest Response Ratio Next.
//!
//! # Algorithm
//!
//! At each dispatch point, among arrived processes, run the one with the
//! largest `(clock - arrival + burst) / burst` to completion. Ties go to
//! the process listed first in the input.
//!
//! # Reference
//! Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

use log::debug;

use super::{metrics, non_preemptive};
use crate::dispatching::{rules, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, SchedulingResult};
use crate::validation::validate_processes;

/// Runs HRRN over `processes`.
pub fn hrrn(processes: &[Process]) -> Result<SchedulingResult, ScheduleError> {
    validate_processes(processes)?;
    debug!("HRRN: scheduling {} processes", processes.len());

    let engine = RuleEngine::new().with_rule(rules::Hrrn);
    let timeline = non_preemptive::run_to_completion(processes, &engine);
    metrics::derive(Algorithm::Hrrn, None, processes, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tests::{classic_processes, events};

    #[test]
    fn test_classic_scenario() {
        let r = hrrn(&classic_processes()).unwrap();
        // t=5: P2 7/3, P3 11/8, P4 4/2 → P2
        // t=8: P3 14/8, P4 7/2 → P4
        assert_eq!(
            events(&r),
            vec![("P1", 0, 5), ("P2", 5, 8), ("P4", 8, 10), ("P3", 10, 18)]
        );
        assert!((r.average_waiting_time - 4.25).abs() < 1e-10);
    }

    #[test]
    fn test_aging_beats_shorter_burst() {
        // At t=10, A waited 9 with burst 3 → 4.0; B waited 0 with burst 1 → 1.0
        let processes = vec![
            Process::new(1).with_name("long").with_arrival(0).with_burst(10),
            Process::new(2).with_name("A").with_arrival(1).with_burst(3),
            Process::new(3).with_name("B").with_arrival(10).with_burst(1),
        ];
        let r = hrrn(&processes).unwrap();
        assert_eq!(
            events(&r),
            vec![("long", 0, 10), ("A", 10, 13), ("B", 13, 14)]
        );
    }

    #[test]
    fn test_equal_ratios_go_to_input_order() {
        // At t=4: Y (4 + 4) / 4 = 2.0, X (2 + 2) / 2 = 2.0
        let processes = vec![
            Process::new(1).with_arrival(0).with_burst(4),
            Process::new(2).with_name("Y").with_arrival(0).with_burst(4),
            Process::new(3).with_name("X").with_arrival(2).with_burst(2),
        ];
        let r = hrrn(&processes).unwrap();
        assert_eq!(events(&r), vec![("P1", 0, 4), ("Y", 4, 8), ("X", 8, 10)]);
    }

    #[test]
    fn test_nearly_equal_ratios_pick_larger() {
        // At t=10: A (1 + 100000) / 100000 beats B (1 + 100001) / 100001
        let processes = vec![
            Process::new(1).with_name("X").with_arrival(0).with_burst(10),
            Process::new(2).with_name("B").with_arrival(9).with_burst(100_001),
            Process::new(3).with_name("A").with_arrival(9).with_burst(100_000),
        ];
        let r = hrrn(&processes).unwrap();
        assert_eq!(
            events(&r),
            vec![("X", 0, 10), ("A", 10, 100_010), ("B", 100_010, 200_011)]
        );
    }
}
