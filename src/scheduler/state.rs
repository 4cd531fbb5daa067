//! Per-process working state for preemptive policies.

/// Lifecycle of one process inside a preemptive simulation.
///
/// Lives only in a policy's working copy; the caller's processes never
/// carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Progress {
    /// Not dispatched yet.
    Pending { remaining: i64 },
    /// Dispatched at least once, CPU time still owed.
    Running { started_at: i64, remaining: i64 },
    /// All CPU time consumed.
    Finished { started_at: i64, completed_at: i64 },
}

impl Progress {
    pub(crate) fn new(burst_time: i64) -> Self {
        Progress::Pending {
            remaining: burst_time,
        }
    }

    pub(crate) fn remaining(&self) -> i64 {
        match *self {
            Progress::Pending { remaining } | Progress::Running { remaining, .. } => remaining,
            Progress::Finished { .. } => 0,
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        matches!(self, Progress::Finished { .. })
    }

    /// Records `ran` ticks of CPU starting at `now`. Returns `true` when
    /// this slice finishes the process.
    pub(crate) fn advance(&mut self, now: i64, ran: i64) -> bool {
        let (started_at, remaining) = match *self {
            Progress::Pending { remaining } => (now, remaining),
            Progress::Running {
                started_at,
                remaining,
            } => (started_at, remaining),
            Progress::Finished { .. } => return true,
        };

        let left = remaining - ran;
        *self = if left <= 0 {
            Progress::Finished {
                started_at,
                completed_at: now + ran,
            }
        } else {
            Progress::Running {
                started_at,
                remaining: left,
            }
        };
        self.is_finished()
    }
}
