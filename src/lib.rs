//! Uniprocessor CPU-scheduling simulator.
//!
//! Replays a fully-known process set under classic scheduling disciplines
//! and reports the execution timeline plus waiting, turnaround and response
//! metrics. Simulation is offline and deterministic.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `TimelineEvent`, `Timeline`,
//!   `ScheduledProcess`, `SchedulingResult`, `Algorithm`
//! - **`scheduler`**: The five policies (`fcfs`, `round_robin`, `spn`, `srt`,
//!   `hrrn`) and multi-policy comparison
//! - **`dispatching`**: Selection rules and the rule engine the policies use
//! - **`validation`**: Input checks (empty sets, bad bursts, duplicate names)
//! - **`config`**: JSON-loadable run configuration
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use sched_sim::models::Process;
//! use sched_sim::scheduler::round_robin;
//!
//! let processes = vec![
//!     Process::new(1).with_arrival(0).with_burst(5),
//!     Process::new(2).with_arrival(1).with_burst(3),
//! ];
//! let result = round_robin(&processes, 2).unwrap();
//! assert_eq!(result.max_time(), 8);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
