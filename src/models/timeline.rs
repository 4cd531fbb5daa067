//! Execution timeline.
//!
//! A timeline is the chronological record of CPU ownership for one run:
//! contiguous `[start, end)` intervals, each labelled with the running
//! process's name or the idle sentinel.
//!
//! # Invariants
//! - Events are ordered by start time and do not overlap.
//! - Adjacent events never carry the same label; [`Timeline::push`]
//!   extends the previous event instead of appending a duplicate.

use serde::{Deserialize, Serialize};

/// Label reserved for intervals where no process holds the CPU.
pub const IDLE_LABEL: &str = "idle";

/// One contiguous interval of CPU ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Running process name, or [`IDLE_LABEL`].
    pub process_name: String,
    /// Inclusive start tick.
    pub start_time: i64,
    /// Exclusive end tick.
    pub end_time: i64,
}

impl TimelineEvent {
    /// Creates an event for `process_name` over `[start_time, end_time)`.
    pub fn new(process_name: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            process_name: process_name.into(),
            start_time,
            end_time,
        }
    }

    /// Creates an idle event.
    pub fn idle(start_time: i64, end_time: i64) -> Self {
        Self::new(IDLE_LABEL, start_time, end_time)
    }

    /// Whether this event is an idle gap.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_name == IDLE_LABEL
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether `time` falls inside `[start_time, end_time)`.
    #[inline]
    pub fn contains(&self, time: i64) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

/// Ordered, coalesced sequence of [`TimelineEvent`]s.
///
/// Serializes as a plain array of events. Deserialization replays each
/// event through [`Timeline::push`], so loaded timelines are coalesced too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TimelineEvent>", into = "Vec<TimelineEvent>")]
pub struct Timeline {
    events: Vec<TimelineEvent>,
}

impl From<Vec<TimelineEvent>> for Timeline {
    fn from(events: Vec<TimelineEvent>) -> Self {
        let mut timeline = Timeline::new();
        for event in &events {
            timeline.push(&event.process_name, event.start_time, event.end_time);
        }
        timeline
    }
}

impl From<Timeline> for Vec<TimelineEvent> {
    fn from(timeline: Timeline) -> Self {
        timeline.events
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `[start, end)` for `label`.
    ///
    /// Empty intervals are dropped. An interval that continues the previous
    /// event under the same label extends it.
    pub fn push(&mut self, label: &str, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.events.last_mut() {
            if last.process_name == label && last.end_time == start {
                last.end_time = end;
                return;
            }
        }
        self.events.push(TimelineEvent::new(label, start, end));
    }

    /// Appends an idle gap.
    pub fn push_idle(&mut self, start: i64, end: i64) {
        self.push(IDLE_LABEL, start, end);
    }

    /// All events in chronological order.
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events were recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over events.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEvent> {
        self.events.iter()
    }

    /// End of the last event; 0 for an empty timeline.
    pub fn max_time(&self) -> i64 {
        self.events.last().map(|e| e.end_time).unwrap_or(0)
    }

    /// First event labelled `name`.
    pub fn first_for(&self, name: &str) -> Option<&TimelineEvent> {
        self.events.iter().find(|e| e.process_name == name)
    }

    /// Last event labelled `name`.
    pub fn last_for(&self, name: &str) -> Option<&TimelineEvent> {
        self.events.iter().rev().find(|e| e.process_name == name)
    }

    /// Event covering `time`, if any.
    pub fn active_at(&self, time: i64) -> Option<&TimelineEvent> {
        self.events.iter().find(|e| e.contains(time))
    }

    /// Start of the first event beginning strictly after `time`.
    pub fn next_start_after(&self, time: i64) -> Option<i64> {
        self.events
            .iter()
            .map(|e| e.start_time)
            .find(|&start| start > time)
    }

    /// Start of the last event beginning strictly before `time`.
    pub fn previous_start_before(&self, time: i64) -> Option<i64> {
        self.events
            .iter()
            .rev()
            .map(|e| e.start_time)
            .find(|&start| start < time)
    }

    /// Total time some process held the CPU.
    pub fn busy_time(&self) -> i64 {
        self.events
            .iter()
            .filter(|e| !e.is_idle())
            .map(TimelineEvent::duration)
            .sum()
    }

    /// Total idle time.
    pub fn idle_time(&self) -> i64 {
        self.events
            .iter()
            .filter(|e| e.is_idle())
            .map(TimelineEvent::duration)
            .sum()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEvent;
    type IntoIter = std::slice::Iter<'a, TimelineEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
