//! Shortest Remaining Time.
//!
//! # Algorithm
//!
//! 1. Among arrived, unfinished processes pick the one with the least
//!    remaining time (ties go to the process listed first).
//! 2. Run it until the earlier of its completion or the next arrival
//!    strictly after the clock.
//! 3. Repeat. Consecutive slices of the same process coalesce into one
//!    timeline event.
//!
//! Only new arrivals bound a slice. Any already-arrived process with less
//! remaining time would have been picked at the previous decision point,
//! and remaining times of waiting processes do not change while another
//! runs.
//!
//! # Complexity
//! O(n²): each iteration retires a process or passes an arrival.

use log::{debug, trace};

use super::metrics;
use super::state::Progress;
use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, SchedulingResult, Timeline};
use crate::validation::validate_processes;

/// Runs SRT over `processes`.
pub fn srt(processes: &[Process]) -> Result<SchedulingResult, ScheduleError> {
    validate_processes(processes)?;
    debug!("SRT: scheduling {} processes", processes.len());

    let (timeline, progress) = simulate(processes);
    let result = metrics::derive(Algorithm::Srt, None, processes, timeline)?;
    metrics::reconcile(&result, &progress)?;
    Ok(result)
}

fn simulate(processes: &[Process]) -> (Timeline, Vec<Progress>) {
    let engine = RuleEngine::new().with_rule(rules::Srt);
    let mut progress: Vec<Progress> = processes
        .iter()
        .map(|p| Progress::new(p.burst_time))
        .collect();
    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;

    loop {
        let unfinished: Vec<usize> = (0..processes.len())
            .filter(|&i| !progress[i].is_finished())
            .collect();
        if unfinished.is_empty() {
            break;
        }

        let available: Vec<usize> = unfinished
            .iter()
            .copied()
            .filter(|&i| processes[i].has_arrived(clock))
            .collect();

        if available.is_empty() {
            if let Some(next_arrival) = unfinished.iter().map(|&i| processes[i].arrival_time).min() {
                timeline.push_idle(clock, next_arrival);
                clock = next_arrival;
            }
            continue;
        }

        let candidates: Vec<&Process> = available.iter().map(|&i| &processes[i]).collect();
        let context = DispatchContext::at_time(clock).with_remaining_times(
            available
                .iter()
                .map(|&i| (processes[i].id, progress[i].remaining())),
        );
        let Some(pick) = engine.select_best(&candidates, &context) else {
            break;
        };
        let current = available[pick];

        let completion = clock + progress[current].remaining();
        let horizon = unfinished
            .iter()
            .map(|&i| processes[i].arrival_time)
            .filter(|&arrival| arrival > clock)
            .min()
            .map_or(completion, |arrival| arrival.min(completion));

        trace!(
            "t={clock}: run {} until {horizon} ({} left)",
            processes[current].name,
            progress[current].remaining()
        );
        timeline.push(&processes[current].name, clock, horizon);
        progress[current].advance(clock, horizon - clock);
        clock = horizon;
    }

    (timeline, progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tests::{classic_processes, events};

    #[test]
    fn test_classic_scenario() {
        let r = srt(&classic_processes()).unwrap();
        // P2 preempts P1 at t=1; P2's slices across the t=2 and t=3
        // arrivals coalesce.
        assert_eq!(
            events(&r),
            vec![
                ("P1", 0, 1),
                ("P2", 1, 4),
                ("P4", 4, 6),
                ("P1", 6, 10),
                ("P3", 10, 18),
            ]
        );

        let waits: Vec<i64> = r.processes.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waits, vec![5, 0, 8, 1]);
        assert!((r.average_waiting_time - 3.5).abs() < 1e-10);

        let responses: Vec<i64> = r.processes.iter().map(|p| p.response_time).collect();
        assert_eq!(responses, vec![0, 0, 8, 1]);
    }

    #[test]
    fn test_equal_remaining_goes_to_input_order() {
        // At t=2, P1 has 2 left and P2 needs 2: whichever is listed first runs.
        let running_first = vec![
            Process::new(1).with_arrival(0).with_burst(4),
            Process::new(2).with_arrival(2).with_burst(2),
        ];
        let r = srt(&running_first).unwrap();
        assert_eq!(events(&r), vec![("P1", 0, 4), ("P2", 4, 6)]);

        let arrival_first = vec![
            Process::new(2).with_arrival(2).with_burst(2),
            Process::new(1).with_arrival(0).with_burst(4),
        ];
        let r = srt(&arrival_first).unwrap();
        assert_eq!(
            events(&r),
            vec![("P1", 0, 2), ("P2", 2, 4), ("P1", 4, 6)]
        );
    }

    #[test]
    fn test_strictly_shorter_arrival_preempts() {
        let processes = vec![
            Process::new(1).with_arrival(0).with_burst(6),
            Process::new(2).with_arrival(2).with_burst(1),
        ];
        let r = srt(&processes).unwrap();
        assert_eq!(events(&r), vec![("P1", 0, 2), ("P2", 2, 3), ("P1", 3, 7)]);
        let p1 = r.process("P1").unwrap();
        assert_eq!(p1.start_time, 0);
        assert_eq!(p1.completion_time, 7);
    }

    #[test]
    fn test_idle_between_bursts() {
        let processes = vec![
            Process::new(1).with_arrival(1).with_burst(2),
            Process::new(2).with_arrival(5).with_burst(1),
        ];
        let r = srt(&processes).unwrap();
        assert_eq!(
            events(&r),
            vec![("idle", 0, 1), ("P1", 1, 3), ("idle", 3, 5), ("P2", 5, 6)]
        );
    }

    #[test]
    fn test_deterministic() {
        let processes = classic_processes();
        let first = srt(&processes).unwrap();
        let second = srt(&processes).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
