use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry.
///
/// The id is chosen by whoever constructs the item, not by the repository.
/// Request bodies that omit it get a fresh v4 UUID during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDo {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub value: String,
}

impl ToDo {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            value: value.into(),
        }
    }
}
