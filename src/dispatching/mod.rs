//! Dispatching rules and rule engine for process selection.
//!
//! Every policy that picks "the best arrived process" (FCFS ordering, SPN,
//! SRT, HRRN) expresses its choice as a [`DispatchingRule`] evaluated by a
//! [`RuleEngine`].
//!
//! # Usage
//!
//! ```
//! use sched_sim::dispatching::{rules, DispatchContext, RuleEngine};
//! use sched_sim::models::Process;
//!
//! let engine = RuleEngine::new().with_rule(rules::Spn);
//! let a = Process::new(1).with_burst(8);
//! let b = Process::new(2).with_burst(3);
//!
//! let context = DispatchContext::at_time(0);
//! assert_eq!(engine.select_best(&[&a, &b], &context), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates how urgently a process should run.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that maximize a quantity
/// (e.g. response ratio) return its negation.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPN", "HRRN").
    fn name(&self) -> &'static str;

    /// Evaluates a process given the current simulation state.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process, context: &DispatchContext) -> RuleScore;

    /// Orders two processes; `Less` means `a` runs first.
    ///
    /// Defaults to comparing [`evaluate`](Self::evaluate) scores. Rules over
    /// integral quantities override this so that values `f64` cannot tell
    /// apart still order correctly.
    fn compare(&self, a: &Process, b: &Process, context: &DispatchContext) -> Ordering {
        self.evaluate(a, context)
            .partial_cmp(&self.evaluate(b, context))
            .unwrap_or(Ordering::Equal)
    }

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
