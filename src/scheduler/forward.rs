//! Dependency-ordered forward scheduler.
//!
//! # Algorithm
//!
//! 1. Validate the catalog (duplicate names, unknown references, cycles).
//! 2. Emit a record for each declared group.
//! 3. Ready-pass loop: scan entries in catalog order and schedule every
//!    entry whose predecessors have all been placed; repeat until done.
//!    A task with no predecessors starts at the anchor date; otherwise
//!    it starts when its last-finishing predecessor ends.
//! 4. Roll every group's span up from its members.
//!
//! A full pass that places nothing while entries remain aborts with the
//! partial result. With a validated catalog that cannot happen, so the
//! loop is bounded by one pass per entry.
//!
//! # Reference
//! Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Catalog, CatalogEntry, ProjectPlan, Task};
use crate::scheduler::rollup::apply_group_span;
use crate::validation::{validate_catalog, ValidationError};

/// Scheduling failure.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The catalog failed structural validation; nothing was scheduled.
    #[error("catalog validation failed with {} error(s)", .0.len())]
    InvalidCatalog(Vec<ValidationError>),
    /// A scheduling pass made no progress while tasks remained.
    ///
    /// Carries everything placed so far plus the names that could not
    /// be placed, so the caller can inspect the broken remainder.
    #[error("dependency graph could not be fully resolved; {} task(s) unscheduled", .unscheduled.len())]
    Unresolved {
        /// Tasks placed before the stall, group records included.
        scheduled: Vec<Task>,
        /// Entry names that could not be placed.
        unscheduled: Vec<String>,
    },
}

/// Forward-pass scheduler: every task starts as early as its
/// predecessors allow.
#[derive(Debug, Clone)]
pub struct ForwardScheduler {
    anchor: NaiveDate,
}

impl ForwardScheduler {
    /// Creates a scheduler anchored at the given date.
    ///
    /// Tasks without predecessors start at the anchor.
    pub fn new(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    /// The anchor date for dependency-free tasks.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Schedules a catalog into a fully dated plan.
    ///
    /// Group records come first in display order (each gets the next
    /// `order` value before any leaf), then leaves in the order they
    /// were placed. Re-running on an unchanged catalog yields an
    /// identical plan.
    pub fn schedule(&self, catalog: &Catalog) -> Result<ProjectPlan, ScheduleError> {
        validate_catalog(catalog).map_err(ScheduleError::InvalidCatalog)?;

        let mut tasks = self.run_passes(catalog)?;

        for group in catalog.groups() {
            apply_group_span(&mut tasks, &Task::id_for(group));
        }

        Ok(ProjectPlan::new(tasks))
    }

    /// Ready-pass loop over the catalog entries.
    ///
    /// Terminates after at most one pass per entry: either a pass places
    /// something, or the stall is reported as [`ScheduleError::Unresolved`].
    fn run_passes(&self, catalog: &Catalog) -> Result<Vec<Task>, ScheduleError> {
        let mut tasks: Vec<Task> = Vec::with_capacity(catalog.groups().len() + catalog.len());
        let mut next_order: u32 = 1;

        for group in catalog.groups() {
            tasks.push(Task::group(group, self.anchor).with_order(next_order));
            next_order += 1;
        }

        // Entry name → index of its placed task record.
        let mut placed: HashMap<&str, usize> = HashMap::new();
        let mut remaining = catalog.len();

        while remaining > 0 {
            let mut progressed = false;

            for entry in catalog.entries() {
                if placed.contains_key(entry.name.as_str()) {
                    continue;
                }
                let Some(start) = self.earliest_start(entry, &placed, &tasks) else {
                    continue;
                };

                let dependencies = entry
                    .predecessors
                    .iter()
                    .map(|p| Task::id_for(p))
                    .collect();
                let mut task = Task::leaf(&entry.name, start, entry.duration_days)
                    .with_dependencies(dependencies)
                    .with_order(next_order);
                if let Some(group) = &entry.group {
                    task = task.with_group(Task::id_for(group));
                }

                debug!(task = %task.id, start = %task.start, end = %task.end, "placed task");
                placed.insert(entry.name.as_str(), tasks.len());
                tasks.push(task);
                next_order += 1;
                remaining -= 1;
                progressed = true;
            }

            if !progressed {
                let unscheduled: Vec<String> = catalog
                    .entries()
                    .iter()
                    .filter(|e| !placed.contains_key(e.name.as_str()))
                    .map(|e| e.name.clone())
                    .collect();
                warn!(
                    count = unscheduled.len(),
                    "scheduling pass made no progress; aborting"
                );
                return Err(ScheduleError::Unresolved {
                    scheduled: tasks,
                    unscheduled,
                });
            }
        }

        Ok(tasks)
    }

    /// Earliest start for an entry: the anchor, pushed out to the latest
    /// end among its predecessors. `None` while a predecessor is unplaced.
    fn earliest_start(
        &self,
        entry: &CatalogEntry,
        placed: &HashMap<&str, usize>,
        tasks: &[Task],
    ) -> Option<NaiveDate> {
        let mut start = self.anchor;
        for pred in &entry.predecessors {
            let &idx = placed.get(pred.as_str())?;
            start = start.max(tasks[idx].end);
        }
        Some(start)
    }
}

/// First day of the given date's month — the conventional anchor choice.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
