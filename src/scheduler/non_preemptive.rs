//! Shared loop for rule-driven, non-preemptive policies (SPN, HRRN).
//!
//! At each dispatch point the rule engine picks one arrived process, which
//! then runs to completion. With nothing arrived, the CPU idles until the
//! earliest future arrival.

use log::trace;

use crate::dispatching::{DispatchContext, RuleEngine};
use crate::models::{Process, Timeline};

/// Runs every process to completion in the order chosen by `engine`.
///
/// Candidates are offered to the engine in input order, so full ties go to
/// the process listed first.
pub(crate) fn run_to_completion(processes: &[Process], engine: &RuleEngine) -> Timeline {
    let mut remaining: Vec<&Process> = processes.iter().collect();
    let mut timeline = Timeline::new();
    let mut clock: i64 = 0;

    while !remaining.is_empty() {
        let available: Vec<usize> = remaining
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_arrived(clock))
            .map(|(i, _)| i)
            .collect();

        if available.is_empty() {
            if let Some(next_arrival) = remaining.iter().map(|p| p.arrival_time).min() {
                timeline.push_idle(clock, next_arrival);
                clock = next_arrival;
            }
            continue;
        }

        let candidates: Vec<&Process> = available.iter().map(|&i| remaining[i]).collect();
        let context = DispatchContext::at_time(clock);
        let Some(pick) = engine.select_best(&candidates, &context) else {
            break;
        };

        let process = remaining.remove(available[pick]);
        trace!("t={clock}: dispatch {} for {}", process.name, process.burst_time);
        timeline.push(&process.name, clock, clock + process.burst_time);
        clock += process.burst_time;
    }

    timeline
}
