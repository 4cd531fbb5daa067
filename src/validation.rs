//! Input validation for simulation runs.
//!
//! Checks a process set (and, for Round Robin, the quantum) before any
//! policy runs. Detects:
//! - Empty process sets
//! - Negative arrival times and non-positive burst times
//! - Duplicate IDs and names
//! - Names that collide with the idle sentinel
//! - Non-positive quanta
//! - Workloads whose end time cannot be represented as `i64`
//!
//! All problems are collected, not just the first.

use crate::models::{Process, IDLE_LABEL};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending input field (e.g. "burst_time").
    pub field: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// Arrival time is below zero.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Two processes share an ID.
    DuplicateId,
    /// Two processes share a name.
    DuplicateName,
    /// A process name is empty or equals the idle sentinel.
    ReservedName,
    /// Latest arrival plus total burst does not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. `arrival_time >= 0`
/// 3. `burst_time > 0`
/// 4. No duplicate IDs
/// 5. No duplicate names (names key the timeline)
/// 6. No empty names and no use of the idle label
/// 7. `max(arrival) + sum(burst)` fits in `i64`, which bounds every clock
///    value a policy can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "processes",
            "at least one process is required",
        ));
    }

    let mut ids = HashSet::new();
    let mut names = HashSet::new();

    for p in processes {
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                "arrival_time",
                format!("process '{}' arrives at {}", p.name, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                "burst_time",
                format!("process '{}' has burst time {}", p.name, p.burst_time),
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                "id",
                format!("duplicate process ID: {}", p.id),
            ));
        }

        if p.name.is_empty() || p.name == IDLE_LABEL {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedName,
                "name",
                format!("process {} uses reserved name '{}'", p.id, p.name),
            ));
        } else if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                "name",
                format!("duplicate process name: {}", p.name),
            ));
        }
    }

    if let Some(error) = check_horizon(processes) {
        errors.push(error);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_horizon(processes: &[Process]) -> Option<ValidationError> {
    let mut total_burst: i64 = 0;
    for p in processes.iter().filter(|p| p.burst_time > 0) {
        total_burst = match total_burst.checked_add(p.burst_time) {
            Some(total) => total,
            None => {
                return Some(ValidationError::new(
                    ValidationErrorKind::TimeOverflow,
                    "burst_time",
                    "total burst time overflows i64",
                ))
            }
        };
    }

    let latest = processes
        .iter()
        .map(|p| p.arrival_time)
        .max()
        .unwrap_or(0)
        .max(0);
    if latest.checked_add(total_burst).is_none() {
        return Some(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "arrival_time",
            format!("arrival at {latest} plus total burst {total_burst} overflows i64"),
        ));
    }
    None
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            "quantum",
            format!("time quantum must be positive, got {quantum}"),
        )])
    }
}

/// Validates a process set together with an optional quantum.
pub fn validate_input(processes: &[Process], quantum: Option<i64>) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();
    if let Some(q) = quantum {
        if let Err(mut quantum_errors) = validate_quantum(q) {
            errors.append(&mut quantum_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
