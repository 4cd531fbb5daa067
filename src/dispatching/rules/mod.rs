//! Built-in dispatching rules.
//!
//! | Rule | Score | Policy |
//! |------|-------|--------|
//! | FIFO | arrival time | FCFS ordering |
//! | SPN | burst time | Shortest Process Next |
//! | SRT | remaining time | Shortest Remaining Time |
//! | HRRN | -response ratio | Highest Response Ratio Next |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//! Scores are for inspection; selection goes through
//! [`DispatchingRule::compare`], which every rule here implements on exact
//! integer arithmetic.

use std::cmp::Ordering;

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::Process;

/// First In First Out.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.arrival_time as f64
    }

    fn compare(&self, a: &Process, b: &Process, _context: &DispatchContext) -> Ordering {
        a.arrival_time.cmp(&b.arrival_time)
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Process Next.
///
/// Prioritizes processes with the shortest total burst.
/// Minimizes mean waiting time among non-preemptive policies.
#[derive(Debug, Clone, Copy)]
pub struct Spn;

impl DispatchingRule for Spn {
    fn name(&self) -> &'static str {
        "SPN"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.burst_time as f64
    }

    fn compare(&self, a: &Process, b: &Process, _context: &DispatchContext) -> Ordering {
        a.burst_time.cmp(&b.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Process Next"
    }
}

/// Shortest Remaining Time.
///
/// Uses `context.remaining_time` if present, falls back to the full burst
/// for processes that have not run yet.
#[derive(Debug, Clone, Copy)]
pub struct Srt;

impl DispatchingRule for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, process: &Process, context: &DispatchContext) -> RuleScore {
        remaining(process, context) as f64
    }

    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext) -> Ordering {
        remaining(a, context).cmp(&remaining(b, context))
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Highest Response Ratio Next.
///
/// `ratio = (waited + burst) / burst`. Long waits raise the ratio, so long
/// processes cannot starve behind a stream of short ones.
#[derive(Debug, Clone, Copy)]
pub struct Hrrn;

impl DispatchingRule for Hrrn {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn evaluate(&self, process: &Process, context: &DispatchContext) -> RuleScore {
        -process.response_ratio(context.current_time)
    }

    /// Compares `(w_a + s_a) / s_a` with `(w_b + s_b) / s_b` by
    /// cross-multiplying in `i128`; the larger ratio runs first.
    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext) -> Ordering {
        let (num_a, den_a) = ratio_terms(a, context.current_time);
        let (num_b, den_b) = ratio_terms(b, context.current_time);
        (num_b * den_a).cmp(&(num_a * den_b))
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }
}

fn remaining(process: &Process, context: &DispatchContext) -> i64 {
    context
        .remaining_time
        .get(&process.id)
        .copied()
        .unwrap_or(process.burst_time)
}

/// Numerator and denominator of the response ratio at `time`.
fn ratio_terms(process: &Process, time: i64) -> (i128, i128) {
    let waited = (i128::from(time) - i128::from(process.arrival_time)).max(0);
    let burst = i128::from(process.burst_time);
    (waited + burst, burst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_score() {
        let p = Process::new(1).with_arrival(4);
        assert!((Fifo.evaluate(&p, &DispatchContext::at_time(10)) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_spn_score() {
        let p = Process::new(1).with_burst(8);
        assert!((Spn.evaluate(&p, &DispatchContext::at_time(0)) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_srt_uses_remaining() {
        let p = Process::new(1).with_burst(8);
        let ctx = DispatchContext::at_time(3).with_remaining_time(1, 5);
        assert!((Srt.evaluate(&p, &ctx) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_srt_falls_back_to_burst() {
        let p = Process::new(1).with_burst(8);
        assert!((Srt.evaluate(&p, &DispatchContext::at_time(3)) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_hrrn_prefers_long_waiters() {
        // At t=8: waited 7 with burst 2 → 4.5; waited 0 with burst 1 → 1.0
        let waiter = Process::new(1).with_arrival(1).with_burst(2);
        let fresh = Process::new(2).with_arrival(8).with_burst(1);
        let ctx = DispatchContext::at_time(8);
        assert!(Hrrn.evaluate(&waiter, &ctx) < Hrrn.evaluate(&fresh, &ctx));
        assert!((Hrrn.evaluate(&waiter, &ctx) + 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_hrrn_compare_is_exact() {
        // 100001/100000 vs 100002/100001 differ by about 1e-10
        let a = Process::new(1).with_arrival(9).with_burst(100_000);
        let b = Process::new(2).with_arrival(9).with_burst(100_001);
        let ctx = DispatchContext::at_time(10);
        assert_eq!(Hrrn.compare(&a, &b, &ctx), Ordering::Less);
        assert_eq!(Hrrn.compare(&b, &a, &ctx), Ordering::Greater);
        assert_eq!(Hrrn.compare(&a, &a, &ctx), Ordering::Equal);
    }

    #[test]
    fn test_integer_rules_compare_beyond_f64_precision() {
        let big = 1_i64 << 53;
        let a = Process::new(1).with_arrival(big).with_burst(big);
        let b = Process::new(2).with_arrival(big + 1).with_burst(big + 1);
        let ctx = DispatchContext::at_time(0)
            .with_remaining_time(1, big + 1)
            .with_remaining_time(2, big);
        assert_eq!(Fifo.compare(&a, &b, &ctx), Ordering::Less);
        assert_eq!(Spn.compare(&a, &b, &ctx), Ordering::Less);
        assert_eq!(Srt.compare(&a, &b, &ctx), Ordering::Greater);
    }

    #[test]
    fn test_names() {
        assert_eq!(Fifo.name(), "FIFO");
        assert_eq!(Spn.description(), "Shortest Process Next");
        assert_eq!(Hrrn.description(), "Highest Response Ratio Next");
    }
}
