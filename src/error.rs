//! Engine error type.

use std::fmt;

use crate::validation::ValidationError;

/// Why a policy run was rejected or aborted.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The caller's input failed validation. Carries every detected issue.
    InvalidInput(Vec<ValidationError>),
    /// A scheduling loop produced a timeline that does not account for a
    /// process. Indicates an engine defect, not bad input.
    InternalInconsistency {
        /// Name of the process that could not be resolved.
        process: String,
        /// Human-readable description.
        message: String,
    },
}

impl ScheduleError {
    /// Validation issues, if this is an input error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ScheduleError::InvalidInput(errors) => errors,
            ScheduleError::InternalInconsistency { .. } => &[],
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{e}")?;
                }
                Ok(())
            }
            ScheduleError::InternalInconsistency { process, message } => {
                write!(f, "internal inconsistency for process '{process}': {message}")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::InvalidInput(errors)
    }
}
