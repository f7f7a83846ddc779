use std::collections::hash_map::Entry;
use std::collections::HashMap;

use uuid::Uuid;

use super::model::ToDo;

/// In-memory store of to-do items keyed by id.
///
/// Mutations on absent ids are silent no-ops; `update` and `delete` report
/// whether anything happened so the route layer can surface a 404 without a
/// second lookup. The repository is not synchronized internally - the route
/// layer wraps it in a lock.
#[derive(Debug, Default)]
pub struct ToDoRepository {
    items: HashMap<Uuid, ToDo>,
}

impl ToDoRepository {
    /// Repository pre-populated with a single sample entry.
    pub fn seeded() -> Self {
        let mut repo = Self::default();
        repo.create(ToDo::new("Learn minimal APIs"));
        repo
    }

    /// Insert or overwrite at `todo.id`. Repeated creates with the same id
    /// silently replace the stored item; there is no uniqueness error.
    pub fn create(&mut self, todo: ToDo) {
        self.items.insert(todo.id, todo);
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<ToDo> {
        self.items.get(&id).cloned()
    }

    /// Snapshot of all stored items, in no particular order.
    pub fn get_all(&self) -> Vec<ToDo> {
        self.items.values().cloned().collect()
    }

    /// Overwrite the entry at `todo.id` if one exists. Returns false and
    /// stores nothing when the id is unknown.
    pub fn update(&mut self, todo: ToDo) -> bool {
        match self.items.entry(todo.id) {
            Entry::Occupied(mut entry) => {
                entry.insert(todo);
                true
            }
            Entry::Vacant(_) => false,
        }
    }

    /// Remove the entry at `id` if present. Returns whether anything was
    /// removed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        self.items.remove(&id).is_some()
    }
}
