use serde::Serialize;

use super::model::ToDo;

const MIN_VALUE_LENGTH: usize = 5;

/// Message attached to the minimum-length rule.
pub const VALUE_TOO_SHORT: &str = "value must be non-empty and at least 5 characters long";

/// A single broken validation rule, serialized as-is into 400 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

/// Check a to-do against the schema rules.
///
/// Returns one violation per broken rule; an empty list means the item may be
/// persisted. Only one rule exists today, but each rule appends independently
/// so more can be added without touching callers.
pub fn validate(todo: &ToDo) -> Vec<Violation> {
    let mut violations = Vec::new();

    if todo.value.is_empty() || todo.value.chars().count() < MIN_VALUE_LENGTH {
        violations.push(Violation {
            field: "value".to_string(),
            message: VALUE_TOO_SHORT.to_string(),
        });
    }

    violations
}
