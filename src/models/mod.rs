//! CPU scheduling domain models.
//!
//! Provides the data types consumed and produced by the scheduling engine.
//!
//! # Domain Mappings
//!
//! | sched-sim | Textbook term | Output of |
//! |-----------|---------------|-----------|
//! | Process | Job / PCB | caller |
//! | TimelineEvent | Gantt chart bar | policy run |
//! | SchedulingResult | Schedule + metrics table | policy run |

mod algorithm;
mod process;
mod result;
mod timeline;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use process::Process;
pub use result::{ScheduledProcess, SchedulingResult};
pub use timeline::{Timeline, TimelineEvent, IDLE_LABEL};
