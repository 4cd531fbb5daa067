//! Simulation configuration.
//!
//! A [`SimulationConfig`] bundles everything one "run" needs: the process
//! set, the Round Robin quantum, and which algorithms to execute. It can be
//! built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "quantum": 2,
//!   "algorithms": ["fcfs", "round_robin"],
//!   "processes": [
//!     { "id": 1, "name": "P1", "arrival_time": 0, "burst_time": 5 }
//!   ]
//! }
//! ```
//!
//! `quantum` defaults to 2 and an empty or missing `algorithms` list means
//! all five.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Algorithm, Process};
use crate::scheduler::{run_selected, Comparison};

/// Default Round Robin time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Round Robin time quantum.
    #[serde(default = "default_quantum")]
    pub quantum: i64,
    /// Algorithms to run. Empty = all.
    #[serde(default)]
    pub algorithms: Vec<Algorithm>,
}

impl SimulationConfig {
    /// Creates a configuration for `processes` with default settings.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            quantum: DEFAULT_QUANTUM,
            algorithms: Vec::new(),
        }
    }

    /// The classic four-process textbook workload with quantum 2.
    pub fn sample() -> Self {
        Self::new(vec![
            Process::new(1).with_arrival(0).with_burst(5).with_priority(1),
            Process::new(2).with_arrival(1).with_burst(3).with_priority(2),
            Process::new(3).with_arrival(2).with_burst(8).with_priority(1),
            Process::new(4).with_arrival(3).with_burst(2).with_priority(3),
        ])
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Restricts the run to `algorithms`.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Algorithms this configuration runs, in order.
    pub fn selected_algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }

    /// Next unused process ID (max + 1, or 1 for an empty set).
    pub fn next_process_id(&self) -> u32 {
        self.processes.iter().map(|p| p.id).max().map_or(1, |id| id + 1)
    }

    /// Runs the selected algorithms.
    pub fn run(&self) -> Result<Comparison, ScheduleError> {
        run_selected(&self.processes, self.quantum, &self.selected_algorithms())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults() {
        let json = r#"{
            "processes": [
                { "id": 1, "name": "A", "arrival_time": 0, "burst_time": 3 }
            ]
        }"#;
        let config = SimulationConfig::from_json(json).unwrap();
        assert_eq!(config.quantum, DEFAULT_QUANTUM);
        assert_eq!(config.selected_algorithms(), Algorithm::ALL.to_vec());
        assert_eq!(config.processes[0].name, "A");
    }

    #[test]
    fn test_from_json_with_algorithms() {
        let json = r#"{
            "quantum": 4,
            "algorithms": ["srt", "round_robin"],
            "processes": [
                { "id": 1, "name": "A", "arrival_time": 0, "burst_time": 3, "priority": 2 }
            ]
        }"#;
        let config = SimulationConfig::from_json(json).unwrap();
        assert_eq!(config.quantum, 4);
        assert_eq!(
            config.selected_algorithms(),
            vec![Algorithm::Srt, Algorithm::RoundRobin]
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_algorithm() {
        let json = r#"{ "algorithms": ["lottery"], "processes": [] }"#;
        assert!(SimulationConfig::from_json(json).is_err());
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new(Vec::new())
            .with_process(Process::new(3).with_burst(2))
            .with_quantum(5)
            .with_algorithms(vec![Algorithm::Fcfs]);
        assert_eq!(config.quantum, 5);
        assert_eq!(config.next_process_id(), 4);
        assert_eq!(config.run().unwrap().results.len(), 1);
    }

    #[test]
    fn test_next_process_id_empty() {
        assert_eq!(SimulationConfig::new(Vec::new()).next_process_id(), 1);
    }

    #[test]
    fn test_sample_runs_all() {
        let comparison = SimulationConfig::sample().run().unwrap();
        assert_eq!(comparison.results.len(), 5);
        let fcfs = comparison.get(Algorithm::Fcfs).unwrap();
        assert!((fcfs.average_waiting_time - 5.75).abs() < 1e-10);
    }

    #[test]
    fn test_empty_processes_rejected_on_run() {
        let config = SimulationConfig::new(Vec::new());
        assert!(matches!(config.run(), Err(ScheduleError::InvalidInput(_))));
    }

    #[test]
    fn test_json_round_trip_preserves_config() {
        let config = SimulationConfig::sample().with_algorithms(vec![Algorithm::Hrrn]);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SimulationConfig::from_json(&json).unwrap(), config);
    }
}
