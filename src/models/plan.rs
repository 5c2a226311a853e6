//! Project plan (scheduling output).
//!
//! An ordered snapshot of every task record, including synthesized
//! group records, ready to hand to a chart-rendering collaborator.
//! Plans are immutable snapshots: edit operations (see the scheduler's
//! reconciliation module) take `&self` and return a new plan, so a
//! consumer observes either the pre-edit or the fully reconciled
//! post-edit state, never a half-updated mix.

use serde::{Deserialize, Serialize};

use super::{DateSpan, Task};

/// A fully dated, ordered task collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPlan {
    tasks: Vec<Task>,
}

impl ProjectPlan {
    /// Creates a plan from task records.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// All task records, in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Consumes the plan, yielding the records.
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Looks up a task by ID.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Member tasks of a group (the group record itself excluded).
    pub fn members_of(&self, group_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.group_id.as_deref() == Some(group_id))
            .collect()
    }

    /// The overall span covered by the plan, if it has any tasks.
    pub fn span(&self) -> Option<DateSpan> {
        let mut span: Option<DateSpan> = None;
        for task in &self.tasks {
            let s = task.span();
            span = Some(match span {
                Some(acc) => acc.union(&s),
                None => s,
            });
        }
        span
    }

    /// Number of task records, group records included.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the plan has no records.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn sample_plan() -> ProjectPlan {
        ProjectPlan::new(vec![
            Task::group("Template", d(1)).with_order(1),
            Task::leaf("Excavate", d(1), 3)
                .with_group("Template")
                .with_order(2),
            Task::leaf("Pour", d(4), 2)
                .with_dependency("Excavate")
                .with_group("Template")
                .with_order(3),
            Task::leaf("Survey", d(1), 1).with_order(4),
        ])
    }

    #[test]
    fn test_task_lookup() {
        let plan = sample_plan();
        assert_eq!(plan.task("Pour").unwrap().start, d(4));
        assert!(plan.task("Missing").is_none());
    }

    #[test]
    fn test_members_of_group() {
        let plan = sample_plan();
        let members = plan.members_of("Template");
        assert_eq!(members.len(), 2);
        assert!(members.iter().all(|t| !t.is_group()));

        assert!(plan.members_of("Nope").is_empty());
    }

    #[test]
    fn test_overall_span() {
        let plan = sample_plan();
        let span = plan.span().unwrap();
        assert_eq!(span.start, d(1));
        assert_eq!(span.end, d(6));

        assert!(ProjectPlan::default().span().is_none());
    }

    #[test]
    fn test_len() {
        let plan = sample_plan();
        assert_eq!(plan.len(), 4);
        assert!(!plan.is_empty());
    }
}
