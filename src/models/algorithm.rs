//! Scheduling algorithm identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five supported uniprocessor scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served (non-preemptive).
    Fcfs,
    /// Round Robin with a fixed time quantum (preemptive).
    RoundRobin,
    /// Shortest Process Next (non-preemptive).
    Spn,
    /// Shortest Remaining Time (preemptive).
    Srt,
    /// Highest Response Ratio Next (non-preemptive).
    Hrrn,
}

impl Algorithm {
    /// All algorithms in canonical order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::RoundRobin,
        Algorithm::Spn,
        Algorithm::Srt,
        Algorithm::Hrrn,
    ];

    /// Short name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::RoundRobin => "RR",
            Algorithm::Spn => "SPN",
            Algorithm::Srt => "SRT",
            Algorithm::Hrrn => "HRRN",
        }
    }

    /// Full name.
    pub fn full_name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come-First-Served",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::Spn => "Shortest Process Next",
            Algorithm::Srt => "Shortest Remaining Time",
            Algorithm::Hrrn => "Highest Response Ratio Next",
        }
    }

    /// One-line description of the selection rule.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "Runs processes to completion in order of arrival.",
            Algorithm::RoundRobin => {
                "Cycles through ready processes, preempting each after a fixed time quantum."
            }
            Algorithm::Spn => "Runs the arrived process with the shortest burst to completion.",
            Algorithm::Srt => {
                "Always runs the arrived process with the least remaining time, preempting on arrival."
            }
            Algorithm::Hrrn => {
                "Runs the arrived process with the highest (waiting + burst) / burst ratio to completion."
            }
        }
    }

    /// Whether the running process can be interrupted before completion.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin | Algorithm::Srt)
    }

    /// Whether the algorithm needs a time quantum.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling algorithm '{}'", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "rr" | "round_robin" | "round-robin" => Ok(Algorithm::RoundRobin),
            "spn" | "sjf" => Ok(Algorithm::Spn),
            "srt" | "srtf" => Ok(Algorithm::Srt),
            "hrrn" => Ok(Algorithm::Hrrn),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
