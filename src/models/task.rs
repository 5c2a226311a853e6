//! Task model.
//!
//! A task is the atomic schedulable unit: a named bar on the chart with
//! a date span, a working duration, and predecessor dependencies. A
//! group is a container task whose span is derived from its members and
//! never authored directly.
//!
//! # Time Representation
//! Dates are calendar days (`NaiveDate`); durations are whole days.
//! A zero-duration task is a milestone (`start == end`).

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::DateSpan;

/// Classification of a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// A directly schedulable unit of work.
    #[serde(rename = "leaf-task")]
    Leaf,
    /// A container whose dates are derived from its member tasks.
    #[serde(rename = "group")]
    Group,
}

/// A schedulable task.
///
/// Leaf tasks obey `end = start + duration_days`; group tasks carry the
/// aggregate span of their members. The `order` key records the position
/// a task was scheduled in and is used only for stable presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, derived from the name with whitespace stripped.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Leaf or group.
    pub kind: TaskKind,
    /// First scheduled date.
    pub start: NaiveDate,
    /// Last scheduled date. Invariant: `end >= start`.
    pub end: NaiveDate,
    /// Working duration in days. Zero is a milestone.
    pub duration_days: u32,
    /// IDs of tasks that must complete before this one starts.
    pub dependencies: Vec<String>,
    /// ID of the owning group, if any.
    pub group_id: Option<String>,
    /// Completion ratio, carried through for display only.
    pub progress: f64,
    /// Display-order key, strictly increasing in schedule order.
    pub order: u32,
}

impl Task {
    /// Derives the stable ID for a name by stripping whitespace.
    ///
    /// Distinct names that collapse to the same ID are rejected at
    /// catalog validation.
    pub fn id_for(name: &str) -> String {
        name.split_whitespace().collect()
    }

    /// Creates a leaf task starting at `start`, ending `duration_days` later.
    pub fn leaf(name: impl Into<String>, start: NaiveDate, duration_days: u32) -> Self {
        let name = name.into();
        Self {
            id: Self::id_for(&name),
            kind: TaskKind::Leaf,
            start,
            end: start + Days::new(u64::from(duration_days)),
            duration_days,
            dependencies: Vec::new(),
            group_id: None,
            progress: 0.0,
            order: 0,
            name,
        }
    }

    /// Creates a group task with a zero-length placeholder span at `anchor`.
    ///
    /// The real span is filled in by rollup once members are scheduled.
    pub fn group(name: impl Into<String>, anchor: NaiveDate) -> Self {
        let name = name.into();
        Self {
            id: Self::id_for(&name),
            kind: TaskKind::Group,
            start: anchor,
            end: anchor,
            duration_days: 0,
            dependencies: Vec::new(),
            group_id: None,
            progress: 0.0,
            order: 0,
            name,
        }
    }

    /// Adds a predecessor task ID.
    pub fn with_dependency(mut self, id: impl Into<String>) -> Self {
        self.dependencies.push(id.into());
        self
    }

    /// Sets the full predecessor ID list.
    pub fn with_dependencies(mut self, ids: Vec<String>) -> Self {
        self.dependencies = ids;
        self
    }

    /// Assigns this task to a group.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Sets the completion ratio.
    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the display-order key.
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// The dates occupied by this task.
    #[inline]
    pub fn span(&self) -> DateSpan {
        DateSpan::new(self.start, self.end)
    }

    /// Whether this is a group record.
    #[inline]
    pub fn is_group(&self) -> bool {
        self.kind == TaskKind::Group
    }

    /// Whether this is a zero-duration milestone.
    #[inline]
    pub fn is_milestone(&self) -> bool {
        self.kind == TaskKind::Leaf && self.duration_days == 0
    }
}
