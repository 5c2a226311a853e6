//! Input validation for task catalogs.
//!
//! Checks structural integrity of a catalog before scheduling. Detects:
//! - Duplicate task/group names and derived-ID collisions
//! - Predecessor references to names absent from the catalog
//! - References to undeclared groups
//! - Circular dependencies (DAG validation)
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::{Catalog, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entries (or an entry and a group) share a name.
    DuplicateName,
    /// Two distinct names collapse to the same derived ID.
    DuplicateId,
    /// An entry references a predecessor name absent from the catalog.
    UnknownPredecessor,
    /// An entry references a group that was never declared.
    UnknownGroup,
    /// Precedence graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog before scheduling.
///
/// Checks:
/// 1. No duplicate group or task names
/// 2. No two names deriving the same task ID
/// 3. All predecessor references point to task entries in the catalog
/// 4. All group references point to declared groups
/// 5. No circular precedence dependencies
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    // Names and derived IDs, across groups and entries alike.
    let mut names: HashSet<&str> = HashSet::new();
    let mut ids: HashMap<String, &str> = HashMap::new();

    let all_names = catalog
        .groups()
        .iter()
        .map(|g| (g.as_str(), "group"))
        .chain(catalog.entries().iter().map(|e| (e.name.as_str(), "task")));

    for (name, what) in all_names {
        if !names.insert(name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate {what} name: '{name}'"),
            ));
            continue;
        }
        let id = Task::id_for(name);
        if let Some(prior) = ids.insert(id.clone(), name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Names '{prior}' and '{name}' derive the same ID '{id}'"),
            ));
        }
    }

    // Predecessors resolve against task entry names only.
    let entry_names: HashSet<&str> = catalog
        .entries()
        .iter()
        .map(|e| e.name.as_str())
        .collect();

    for entry in catalog.entries() {
        for pred in &entry.predecessors {
            if !entry_names.contains(pred.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPredecessor,
                    format!(
                        "Task '{}' references unknown predecessor '{pred}'",
                        entry.name
                    ),
                ));
            }
        }
    }

    // Group references must be declared up front.
    let group_names: HashSet<&str> = catalog.groups().iter().map(|g| g.as_str()).collect();
    for entry in catalog.entries() {
        if let Some(group) = &entry.group {
            if !group_names.contains(group.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownGroup,
                    format!("Task '{}' references undeclared group '{group}'", entry.name),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(catalog) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the precedence graph using DFS.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists.
fn detect_cycles(catalog: &Catalog) -> Option<ValidationError> {
    // Adjacency list: predecessor name → successor names.
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut all_names: Vec<&str> = Vec::new();

    for entry in catalog.entries() {
        all_names.push(&entry.name);
        for pred in &entry.predecessors {
            adj.entry(pred.as_str()).or_default().push(&entry.name);
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for &node in &all_names {
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving task '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
