//! Date span model.
//!
//! A span is the inclusive `[start, end]` date interval a task occupies
//! on the chart. Group spans are built from member spans via
//! [`DateSpan::union`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date interval `[start, end]`.
///
/// Invariant: `end >= start`. A zero-length span (`start == end`)
/// represents a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// First occupied date.
    pub start: NaiveDate,
    /// Last occupied date.
    pub end: NaiveDate,
}

impl DateSpan {
    /// Creates a new span.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Length of this span in days.
    #[inline]
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether a date falls within this span.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether two spans share at least one date.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The smallest span covering both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
