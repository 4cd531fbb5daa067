//! Rule engine for process selection.
//!
//! Applies dispatching rules in sequence: the first rule decides, later
//! rules only break its ties. When every rule ties, the process that comes
//! first in the candidate slice wins, so callers control the final
//! tie-break through candidate order (input order throughout this crate).

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::Process;

/// A composable rule engine for process prioritization.
///
/// # Example
/// ```
/// use sched_sim::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Srt)
///     .with_rule(rules::Fifo);
/// assert_eq!(engine.rule_names(), vec!["SRT", "FIFO"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. The first rule added is the primary criterion.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, primary first.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidates by priority (highest priority first).
    ///
    /// Returns indices into `candidates`. The sort is stable: fully tied
    /// candidates keep their relative order.
    pub fn sort_indices(&self, candidates: &[&Process], context: &DispatchContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..candidates.len()).collect();
        indices.sort_by(|&a, &b| self.compare(candidates[a], candidates[b], context));
        indices
    }

    /// Returns the index of the highest-priority candidate.
    ///
    /// Ties go to the earliest candidate in the slice.
    pub fn select_best(&self, candidates: &[&Process], context: &DispatchContext) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, candidate) in candidates.iter().enumerate() {
            match best {
                Some(b) if self.compare(candidate, candidates[b], context) != Ordering::Less => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process, context: &DispatchContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.compare(a, b, context))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn make_process(id: u32, arrival: i64, burst: i64) -> Process {
        Process::new(id).with_arrival(arrival).with_burst(burst)
    }

    #[test]
    fn test_spn_ordering() {
        let long = make_process(1, 0, 5);
        let short = make_process(2, 0, 1);
        let medium = make_process(3, 0, 3);
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spn);

        let indices = engine.sort_indices(&[&long, &short, &medium], &ctx);
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn test_stable_sort_keeps_input_order_on_ties() {
        let a = make_process(1, 2, 5);
        let b = make_process(2, 0, 5);
        let c = make_process(3, 2, 1);
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Fifo);

        // b first; a and c tie on arrival and keep input order
        assert_eq!(engine.sort_indices(&[&a, &b, &c], &ctx), vec![1, 0, 2]);
    }

    #[test]
    fn test_select_best_first_encountered_wins_ties() {
        let a = make_process(1, 0, 3);
        let b = make_process(2, 0, 3);
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spn);

        assert_eq!(engine.select_best(&[&a, &b], &ctx), Some(0));
        assert_eq!(engine.select_best(&[&b, &a], &ctx), Some(0));
    }

    #[test]
    fn test_secondary_rule_breaks_ties() {
        let late = make_process(1, 3, 2);
        let early = make_process(2, 1, 2);
        let ctx = DispatchContext::at_time(5);
        let engine = RuleEngine::new()
            .with_rule(rules::Spn)
            .with_rule(rules::Fifo);

        assert_eq!(engine.select_best(&[&late, &early], &ctx), Some(1));
    }

    #[test]
    fn test_srt_with_context() {
        let a = make_process(1, 0, 10);
        let b = make_process(2, 0, 4);
        let ctx = DispatchContext::at_time(6)
            .with_remaining_time(1, 2)
            .with_remaining_time(2, 4);
        let engine = RuleEngine::new().with_rule(rules::Srt);

        assert_eq!(engine.select_best(&[&a, &b], &ctx), Some(0));
    }

    #[test]
    fn test_empty_candidates() {
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spn);
        assert!(engine.sort_indices(&[], &ctx).is_empty());
        assert!(engine.select_best(&[], &ctx).is_none());
    }

    #[test]
    fn test_evaluate_scores() {
        let p = make_process(1, 2, 3);
        let ctx = DispatchContext::at_time(5);
        let engine = RuleEngine::new()
            .with_rule(rules::Spn)
            .with_rule(rules::Hrrn);

        let scores = engine.evaluate(&p, &ctx);
        assert_eq!(scores.len(), 2);
        assert!((scores[0] - 3.0).abs() < 1e-10);
        assert!((scores[1] + 2.0).abs() < 1e-10); // (3 + 3) / 3
    }

    #[test]
    fn test_close_response_ratios_pick_true_maximum() {
        // At t=10: A 100001/100000 > B 100002/100001, about 1e-10 apart
        let b = make_process(1, 9, 100_001);
        let a = make_process(2, 9, 100_000);
        let ctx = DispatchContext::at_time(10);
        let engine = RuleEngine::new().with_rule(rules::Hrrn);

        assert_eq!(engine.select_best(&[&b, &a], &ctx), Some(1));
    }

    #[test]
    fn test_bursts_beyond_f64_precision_stay_distinct() {
        let big = 1_i64 << 53;
        let longer = make_process(1, 0, big + 1);
        let shorter = make_process(2, 0, big);
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spn);

        assert_eq!(engine.select_best(&[&longer, &shorter], &ctx), Some(1));
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new().with_rule(rules::Hrrn);
        assert!(format!("{engine:?}").contains("HRRN"));
    }
}
