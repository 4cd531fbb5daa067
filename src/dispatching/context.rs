//! Simulation state passed to dispatching rules.

use std::collections::HashMap;

/// Runtime state visible to dispatching rules at a decision point.
#[derive(Debug, Clone, Default)]
pub struct DispatchContext {
    /// Current simulation clock.
    pub current_time: i64,
    /// Remaining CPU time per process (process id → ticks).
    pub remaining_time: HashMap<u32, i64>,
}

impl DispatchContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self {
            current_time,
            ..Default::default()
        }
    }

    /// Sets remaining time for a process.
    pub fn with_remaining_time(mut self, process_id: u32, remaining: i64) -> Self {
        self.remaining_time.insert(process_id, remaining);
        self
    }

    /// Sets remaining times for several processes.
    pub fn with_remaining_times(mut self, entries: impl IntoIterator<Item = (u32, i64)>) -> Self {
        self.remaining_time.extend(entries);
        self
    }
}
