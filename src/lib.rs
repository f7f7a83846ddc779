pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod todos;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::ApiError;
use crate::todos::ToDoRepository;

/// Process-wide shared state: the single repository instance, created once at
/// startup and handed to every handler through axum's `State` extractor.
///
/// The repository itself is unsynchronized, so concurrent request handling
/// goes through this lock.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<RwLock<ToDoRepository>>,
}

impl AppState {
    pub fn new(repository: ToDoRepository) -> Self {
        Self {
            repository: Arc::new(RwLock::new(repository)),
        }
    }

    pub fn read_repository(&self) -> Result<RwLockReadGuard<'_, ToDoRepository>, ApiError> {
        self.repository
            .read()
            .map_err(|_| ApiError::internal("repository lock poisoned"))
    }

    pub fn write_repository(&self) -> Result<RwLockWriteGuard<'_, ToDoRepository>, ApiError> {
        self.repository
            .write()
            .map_err(|_| ApiError::internal("repository lock poisoned"))
    }
}
