//! Single-task edit reconciliation.
//!
//! Accepts external edits coming back from the chart (date change,
//! progress change, deletion) and produces a new, fully consistent
//! plan. A date change re-rolls the owning group's span exactly once;
//! nothing else moves.
//!
//! Known limitation: dependents of an edited task are NOT rescheduled,
//! so a successor can end up starting before its shifted predecessor
//! finishes. Cascading re-scheduling is live incremental planning,
//! which this core does not attempt; callers who need it re-run the
//! forward scheduler on a corrected catalog.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::models::{ProjectPlan, Task};
use crate::scheduler::rollup::apply_group_span;

/// A rejected edit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// No task record carries the given ID.
    #[error("unknown task id '{0}'")]
    UnknownTask(String),
    /// The edited dates violate `end >= start`.
    #[error("invalid span: end {end} precedes start {start}")]
    InvalidSpan { start: NaiveDate, end: NaiveDate },
    /// The target is a group record, whose span is derived.
    #[error("'{0}' is a group; its span is derived from members and cannot be edited or removed directly")]
    GroupTask(String),
}

impl ProjectPlan {
    /// Applies a date edit to a leaf task and re-rolls its owning group.
    ///
    /// Returns the reconciled plan; `self` is untouched. Only the edited
    /// task and, when its aggregate span moved, the owning group record
    /// differ from the input — no other task's dates change.
    pub fn with_task_dates(
        &self,
        id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ProjectPlan, EditError> {
        if end < start {
            return Err(EditError::InvalidSpan { start, end });
        }

        let mut tasks = self.tasks().to_vec();
        let task = find_leaf_mut(&mut tasks, id)?;

        task.start = start;
        task.end = end;
        task.duration_days = (end - start).num_days() as u32;
        let group_id = task.group_id.clone();
        debug!(task = %id, %start, %end, "applied date edit");

        if let Some(group_id) = group_id {
            apply_group_span(&mut tasks, &group_id);
        }

        Ok(ProjectPlan::new(tasks))
    }

    /// Updates a task's completion ratio.
    ///
    /// Pure pass-through: no dates move and no rollup runs.
    pub fn with_task_progress(&self, id: &str, progress: f64) -> Result<ProjectPlan, EditError> {
        let mut tasks = self.tasks().to_vec();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| EditError::UnknownTask(id.to_string()))?;

        task.progress = progress;
        Ok(ProjectPlan::new(tasks))
    }

    /// Removes a leaf task from the plan.
    ///
    /// Group records are never removed, and removal does not re-roll the
    /// former group's span (deletion is a pass-through mutation).
    pub fn without_task(&self, id: &str) -> Result<ProjectPlan, EditError> {
        match self.task(id) {
            None => Err(EditError::UnknownTask(id.to_string())),
            Some(task) if task.is_group() => Err(EditError::GroupTask(id.to_string())),
            Some(_) => Ok(ProjectPlan::new(
                self.tasks().iter().filter(|t| t.id != id).cloned().collect(),
            )),
        }
    }
}

fn find_leaf_mut<'a>(tasks: &'a mut [Task], id: &str) -> Result<&'a mut Task, EditError> {
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| EditError::UnknownTask(id.to_string()))?;
    if task.is_group() {
        return Err(EditError::GroupTask(id.to_string()));
    }
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn sample_plan() -> ProjectPlan {
        ProjectPlan::new(vec![
            Task::group("Job", d(1)).with_order(1),
            Task::leaf("A", d(1), 3).with_group("Job").with_order(2),
            Task::leaf("B", d(4), 2)
                .with_dependency("A")
                .with_group("Job")
                .with_order(3),
            Task::leaf("Loose", d(1), 1).with_order(4),
        ])
    }

    fn rolled_sample_plan() -> ProjectPlan {
        // Re-applying A's own dates triggers rollup, so the group span
        // starts out consistent with its members: 1 → 6.
        sample_plan().with_task_dates("A", d(1), d(4)).unwrap()
    }

    #[test]
    fn test_date_edit_updates_task_and_group() {
        let plan = sample_plan();
        let edited = plan.with_task_dates("B", d(4), d(9)).unwrap();

        let b = edited.task("B").unwrap();
        assert_eq!(b.end, d(9));
        assert_eq!(b.duration_days, 5);

        let group = edited.task("Job").unwrap();
        assert_eq!(group.start, d(1));
        assert_eq!(group.end, d(9));
    }

    #[test]
    fn test_date_edit_locality() {
        let plan = rolled_sample_plan();
        let edited = plan.with_task_dates("B", d(4), d(9)).unwrap();

        // Only B and its owning group moved.
        for (before, after) in plan.tasks().iter().zip(edited.tasks()) {
            assert_eq!(before.id, after.id);
            if after.id == "B" || after.id == "Job" {
                continue;
            }
            assert_eq!(before.start, after.start);
            assert_eq!(before.end, after.end);
        }
    }

    #[test]
    fn test_date_edit_is_a_snapshot() {
        let plan = sample_plan();
        let _edited = plan.with_task_dates("B", d(4), d(9)).unwrap();
        // The original plan still shows the pre-edit state.
        assert_eq!(plan.task("B").unwrap().end, d(6));
    }

    #[test]
    fn test_date_edit_without_group() {
        let plan = sample_plan();
        let edited = plan.with_task_dates("Loose", d(2), d(5)).unwrap();
        assert_eq!(edited.task("Loose").unwrap().start, d(2));
        // Group untouched.
        assert_eq!(edited.task("Job").unwrap().end, plan.task("Job").unwrap().end);
    }

    #[test]
    fn test_date_edit_rejects_inverted_span() {
        let err = sample_plan().with_task_dates("A", d(5), d(2)).unwrap_err();
        assert_eq!(
            err,
            EditError::InvalidSpan {
                start: d(5),
                end: d(2)
            }
        );
    }

    #[test]
    fn test_date_edit_rejects_group_target() {
        let err = sample_plan().with_task_dates("Job", d(1), d(9)).unwrap_err();
        assert_eq!(err, EditError::GroupTask("Job".to_string()));
    }

    #[test]
    fn test_date_edit_unknown_task() {
        let err = sample_plan().with_task_dates("Nope", d(1), d(2)).unwrap_err();
        assert_eq!(err, EditError::UnknownTask("Nope".to_string()));
    }

    #[test]
    fn test_progress_edit_is_pass_through() {
        let plan = rolled_sample_plan();
        let edited = plan.with_task_progress("A", 75.0).unwrap();

        assert_eq!(edited.task("A").unwrap().progress, 75.0);
        // No dates moved anywhere.
        for (before, after) in plan.tasks().iter().zip(edited.tasks()) {
            assert_eq!(before.start, after.start);
            assert_eq!(before.end, after.end);
        }
    }

    #[test]
    fn test_delete_leaf() {
        let plan = sample_plan();
        let edited = plan.without_task("Loose").unwrap();
        assert_eq!(edited.len(), plan.len() - 1);
        assert!(edited.task("Loose").is_none());
    }

    #[test]
    fn test_delete_does_not_reroll_group() {
        let plan = rolled_sample_plan();
        let group_end = plan.task("Job").unwrap().end;

        // B defines the group's max end; removing it leaves the span as-is.
        let edited = plan.without_task("B").unwrap();
        assert_eq!(edited.task("Job").unwrap().end, group_end);
    }

    #[test]
    fn test_delete_rejects_group() {
        let err = sample_plan().without_task("Job").unwrap_err();
        assert_eq!(err, EditError::GroupTask("Job".to_string()));
    }

    #[test]
    fn test_delete_unknown_task() {
        let err = sample_plan().without_task("Nope").unwrap_err();
        assert_eq!(err, EditError::UnknownTask("Nope".to_string()));
    }
}
