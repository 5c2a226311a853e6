//! Scheduling input catalog.
//!
//! The catalog is the raw material handed to the scheduler: an ordered
//! list of task definitions (name, duration, predecessor names) plus the
//! declared group containers. Entries keep insertion order, which is
//! what breaks ties between simultaneously ready tasks during
//! scheduling.

use serde::{Deserialize, Serialize};

/// A single task definition.
///
/// References other entries and groups by display name; IDs are derived
/// later, when the scheduler materializes `Task` records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name. The task ID is derived from it.
    pub name: String,
    /// Working duration in days (zero = milestone).
    pub duration_days: u32,
    /// Names of tasks that must finish before this one starts.
    pub predecessors: Vec<String>,
    /// Name of the declared group this task belongs to, if any.
    pub group: Option<String>,
}

impl CatalogEntry {
    /// Creates an entry with no predecessors and no group.
    pub fn new(name: impl Into<String>, duration_days: u32) -> Self {
        Self {
            name: name.into(),
            duration_days,
            predecessors: Vec::new(),
            group: None,
        }
    }

    /// Adds a predecessor name.
    pub fn with_predecessor(mut self, name: impl Into<String>) -> Self {
        self.predecessors.push(name.into());
        self
    }

    /// Sets the full predecessor name list.
    pub fn with_predecessors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predecessors = names.into_iter().map(Into::into).collect();
        self
    }

    /// Assigns this entry to a declared group.
    pub fn with_group(mut self, name: impl Into<String>) -> Self {
        self.group = Some(name.into());
        self
    }
}

/// An ordered task catalog.
///
/// # Example
///
/// ```
/// use gantt_core::models::{Catalog, CatalogEntry};
///
/// let catalog = Catalog::new()
///     .with_group("Foundation")
///     .with_entry(CatalogEntry::new("Excavate", 3).with_group("Foundation"))
///     .with_entry(
///         CatalogEntry::new("Pour Footings", 2)
///             .with_predecessor("Excavate")
///             .with_group("Foundation"),
///     );
/// assert_eq!(catalog.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    groups: Vec<String>,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a group container.
    pub fn with_group(mut self, name: impl Into<String>) -> Self {
        self.groups.push(name.into());
        self
    }

    /// Appends a task definition.
    pub fn with_entry(mut self, entry: CatalogEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Declared group names, in declaration order.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Task definitions, in insertion order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of task definitions (groups not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no task definitions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_builder() {
        let entry = CatalogEntry::new("Electrical Rough", 3)
            .with_predecessors(["Plumbing Top Out", "HVAC Rough"])
            .with_group("Template");

        assert_eq!(entry.name, "Electrical Rough");
        assert_eq!(entry.duration_days, 3);
        assert_eq!(entry.predecessors.len(), 2);
        assert_eq!(entry.group.as_deref(), Some("Template"));
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let catalog = Catalog::new()
            .with_entry(CatalogEntry::new("B", 1))
            .with_entry(CatalogEntry::new("A", 1))
            .with_entry(CatalogEntry::new("C", 1));

        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.groups().is_empty());
    }
}
