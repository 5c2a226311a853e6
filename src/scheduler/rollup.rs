//! Group span rollup.
//!
//! Computes the aggregate `[min start, max end]` span over a group's
//! member tasks and patches the group record to match. Runs once when a
//! plan is first scheduled and once per accepted date edit, keeping the
//! displayed group span consistent with its children.
//!
//! Aggregation is one level deep: groups contain leaf tasks only, so no
//! bottom-up cascade is needed.

use tracing::{debug, warn};

use crate::models::{DateSpan, Task};

/// Aggregate span of the tasks belonging to `group_id`.
///
/// Single O(n) pass over `tasks`. Returns `None` for a group with no
/// members rather than a sentinel span; the caller decides whether an
/// empty group is an error. A `warn!` event is emitted either way.
pub fn group_span(tasks: &[Task], group_id: &str) -> Option<DateSpan> {
    let mut span: Option<DateSpan> = None;

    for task in tasks {
        if task.group_id.as_deref() != Some(group_id) {
            continue;
        }
        let s = task.span();
        span = Some(match span {
            Some(acc) => acc.union(&s),
            None => s,
        });
    }

    if span.is_none() {
        warn!(group = %group_id, "group has no member tasks");
    }
    span
}

/// Recomputes a group record's span from its members, in place.
///
/// Returns `true` if the record changed. An empty group (or a missing
/// group record) keeps the collection as it was.
pub(crate) fn apply_group_span(tasks: &mut [Task], group_id: &str) -> bool {
    let Some(span) = group_span(tasks, group_id) else {
        return false;
    };
    let Some(group) = tasks.iter_mut().find(|t| t.is_group() && t.id == group_id) else {
        return false;
    };
    if group.span() == span {
        return false;
    }

    debug!(group = %group_id, start = %span.start, end = %span.end, "rolled up group span");
    group.start = span.start;
    group.end = span.end;
    group.duration_days = span.duration_days() as u32;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::group("Job", d(1)).with_order(1),
            Task::leaf("A", d(2), 3).with_group("Job").with_order(2),
            Task::leaf("B", d(4), 4).with_group("Job").with_order(3),
            Task::leaf("Loose", d(1), 9).with_order(4),
        ]
    }

    #[test]
    fn test_span_is_min_start_max_end() {
        let tasks = sample_tasks();
        let span = group_span(&tasks, "Job").unwrap();
        assert_eq!(span.start, d(2));
        assert_eq!(span.end, d(8));
    }

    #[test]
    fn test_ungrouped_tasks_are_ignored() {
        let tasks = sample_tasks();
        // "Loose" runs 1 → 10 but belongs to no group.
        let span = group_span(&tasks, "Job").unwrap();
        assert!(span.end < d(10));
    }

    #[test]
    fn test_empty_group_returns_none() {
        let tasks = sample_tasks();
        assert!(group_span(&tasks, "Nobody").is_none());
    }

    #[test]
    fn test_single_member_group() {
        let tasks = vec![Task::leaf("Only", d(5), 2).with_group("Job")];
        let span = group_span(&tasks, "Job").unwrap();
        assert_eq!(span, DateSpan::new(d(5), d(7)));
    }

    #[test]
    fn test_apply_patches_group_record() {
        let mut tasks = sample_tasks();
        assert!(apply_group_span(&mut tasks, "Job"));

        let group = &tasks[0];
        assert_eq!(group.start, d(2));
        assert_eq!(group.end, d(8));
        assert_eq!(group.duration_days, 6);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut tasks = sample_tasks();
        assert!(apply_group_span(&mut tasks, "Job"));
        // Second application finds the span already correct.
        assert!(!apply_group_span(&mut tasks, "Job"));
    }

    #[test]
    fn test_apply_leaves_empty_group_untouched() {
        let mut tasks = vec![Task::group("Job", d(1))];
        assert!(!apply_group_span(&mut tasks, "Job"));
        assert_eq!(tasks[0].start, d(1));
        assert_eq!(tasks[0].end, d(1));
    }
}
