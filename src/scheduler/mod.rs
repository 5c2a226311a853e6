//! Forward scheduling, span rollup, and edit reconciliation.
//!
//! # Components
//!
//! - [`ForwardScheduler`]: one-shot dependency-ordered forward pass
//!   over a catalog, producing a fully dated [`ProjectPlan`]
//! - [`group_span`]: min-start/max-end aggregation over a group's
//!   member tasks
//! - Edit reconciliation: `ProjectPlan::with_task_dates`,
//!   `with_task_progress`, and `without_task` — snapshot operations
//!   that keep the owning group's span consistent after an edit
//!
//! Scheduling is deterministic and synchronous: the same catalog and
//! anchor always produce the same plan, and cycle handling bounds the
//! pass loop at one pass per task.
//!
//! [`ProjectPlan`]: crate::models::ProjectPlan

mod edit;
mod forward;
mod rollup;

pub use edit::EditError;
pub use forward::{month_start, ForwardScheduler, ScheduleError};
pub use rollup::group_span;
