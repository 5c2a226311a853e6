//! Project scheduling core for Gantt task lists.
//!
//! Computes consistent start/end dates for a catalog of tasks with
//! durations and predecessor dependencies, then rolls member spans up
//! into aggregate group spans. The output is a flat, ordered task
//! collection ready for a chart-rendering front end; painting the chart
//! is the renderer's job.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TaskKind`, `DateSpan`,
//!   `Catalog`, `CatalogEntry`, `ProjectPlan`
//! - **`scheduler`**: `ForwardScheduler` (dependency-ordered forward
//!   pass), group span rollup, single-task edit reconciliation
//! - **`validation`**: Catalog integrity checks (duplicate names/IDs,
//!   unknown predecessors, DAG cycles)
//! - **`sample`**: A reference construction-project catalog
//!
//! # Scope
//!
//! One-shot forward scheduling plus span rollup. Editing a task's dates
//! re-aggregates its owning group but does not reschedule dependents;
//! live incremental re-planning is out of scope, as are resource
//! leveling and backward-pass slack computation.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use gantt_core::models::{Catalog, CatalogEntry};
//! use gantt_core::scheduler::ForwardScheduler;
//!
//! let catalog = Catalog::new()
//!     .with_group("Foundation")
//!     .with_entry(CatalogEntry::new("Excavate", 3).with_group("Foundation"))
//!     .with_entry(
//!         CatalogEntry::new("Pour Footings", 2)
//!             .with_predecessor("Excavate")
//!             .with_group("Foundation"),
//!     );
//!
//! let anchor = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let plan = ForwardScheduler::new(anchor).schedule(&catalog).unwrap();
//!
//! let pour = plan.task("PourFootings").unwrap();
//! assert_eq!(pour.start, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
//! assert_eq!(plan.task("Foundation").unwrap().span().duration_days(), 5);
//! ```
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod sample;
pub mod scheduler;
pub mod validation;
