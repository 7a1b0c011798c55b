//! Repository port for task persistence, lookup, and deletion.

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// The sole owner of durable-store access. Absence is reported through
/// `Option`/`bool` return values, never as an error; every mutating call
/// commits atomically on its own and no transaction spans repository
/// calls.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a new task record with a fresh identifier.
    ///
    /// Applies the status default when the payload omits one and returns
    /// the stored representation including the assigned identifier.
    ///
    /// # Errors
    ///
    /// Store rejections propagate unchanged as
    /// [`TaskRepositoryError::ConstraintViolation`] or
    /// [`TaskRepositoryError::Unavailable`].
    async fn create(&self, new_task: NewTask) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns at most `limit` tasks after skipping `skip`, in the
    /// adapter's stable natural ordering. Negative `skip` or `limit`
    /// values are treated as zero. Each call re-queries the store.
    async fn list(&self, skip: i64, limit: i64) -> TaskRepositoryResult<Vec<Task>>;

    /// Applies the supplied patch fields to an existing record.
    ///
    /// Returns `None` without side effects when no record matches `id`;
    /// absence resolves before any constraint check, so an invalid patch
    /// against a missing record still reports absence.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::ConstraintViolation`] when the patch
    /// would produce an invalid record, such as an explicit null for a
    /// non-nullable column; the prior record stays unchanged.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Option<Task>>;

    /// Removes the record matching `id`.
    ///
    /// Returns whether a record existed and was removed.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The store rejected a write that violates a durable constraint.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Connectivity or transaction failure in the store layer.
    #[error("store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a lower-level store failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
