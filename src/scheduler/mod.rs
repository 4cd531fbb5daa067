//! Scheduling policies and metrics derivation.
//!
//! Five independent policies, each a pure function from a borrowed process
//! set to a [`SchedulingResult`]:
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`fcfs`] | no | earliest arrival |
//! | [`round_robin`] | yes | FIFO queue, fixed quantum |
//! | [`spn`] | no | shortest burst |
//! | [`srt`] | yes | shortest remaining time |
//! | [`hrrn`] | no | highest response ratio |
//!
//! Every policy validates its input, simulates on private working state,
//! and derives metrics from the finished timeline. Policies share no state
//! and may run on separate threads.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod comparison;
mod fcfs;
mod hrrn;
mod metrics;
mod non_preemptive;
mod round_robin;
mod spn;
mod srt;
mod state;

pub use comparison::{run_all, run_selected, Comparison};
pub use fcfs::fcfs;
pub use hrrn::hrrn;
pub use round_robin::round_robin;
pub use spn::spn;
pub use srt::srt;

use crate::dispatching::{rules, DispatchContext, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{Algorithm, Process, SchedulingResult};

impl Algorithm {
    /// Runs this algorithm. `quantum` is only consulted by Round Robin.
    pub fn run(&self, processes: &[Process], quantum: i64) -> Result<SchedulingResult, ScheduleError> {
        match self {
            Algorithm::Fcfs => fcfs(processes),
            Algorithm::RoundRobin => round_robin(processes, quantum),
            Algorithm::Spn => spn(processes),
            Algorithm::Srt => srt(processes),
            Algorithm::Hrrn => hrrn(processes),
        }
    }
}

/// Indices of `processes` sorted by arrival; ties keep input order.
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let candidates: Vec<&Process> = processes.iter().collect();
    RuleEngine::new()
        .with_rule(rules::Fifo)
        .sort_indices(&candidates, &DispatchContext::at_time(0))
}
