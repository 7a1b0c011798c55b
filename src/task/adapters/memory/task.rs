//! In-memory repository for task record tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Field, NewTask, PersistedTaskData, Task, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Substitutable for the `PostgreSQL` adapter in tests; mirrors its
/// constraint behaviour, including rejection of explicit nulls for
/// non-nullable fields. Listing follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    insertion_order: Vec<TaskId>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rejects patches that would write a null into a non-nullable field,
/// matching the store-level constraint of the `PostgreSQL` adapter.
fn check_constraints(patch: &TaskPatch) -> TaskRepositoryResult<()> {
    if patch.title().is_null() {
        return Err(TaskRepositoryError::ConstraintViolation(
            "null value in column \"title\"".to_owned(),
        ));
    }
    if patch.status().is_null() {
        return Err(TaskRepositoryError::ConstraintViolation(
            "null value in column \"status\"".to_owned(),
        ));
    }
    Ok(())
}

/// Builds the patched record from the stored one, leaving absent fields
/// unchanged.
fn apply_patch(task: &Task, patch: &TaskPatch) -> Task {
    let title = patch
        .title()
        .value()
        .cloned()
        .unwrap_or_else(|| task.title().to_owned());
    let description = match patch.description() {
        Field::Absent => task.description().map(ToOwned::to_owned),
        Field::Null => None,
        Field::Set(description) => Some(description.clone()),
    };
    let status = patch.status().value().copied().unwrap_or(task.status());

    Task::from_persisted(PersistedTaskData {
        id: task.id(),
        title,
        description,
        status,
    })
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, new_task: NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        let task = Task::new(new_task);
        state.insertion_order.push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn get(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self, skip: i64, limit: i64) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        let skip = usize::try_from(skip).unwrap_or_default();
        let limit = usize::try_from(limit).unwrap_or_default();
        Ok(state
            .insertion_order
            .iter()
            .skip(skip)
            .take(limit)
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect())
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        let Some(existing) = state.tasks.get(&id) else {
            return Ok(None);
        };

        check_constraints(&patch)?;
        let updated = apply_patch(existing, &patch);
        state.tasks.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.remove(&id).is_none() {
            return Ok(false);
        }
        state.insertion_order.retain(|stored| *stored != id);
        Ok(true)
    }
}
