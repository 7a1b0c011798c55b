//! Service layer for task creation, lookup, update, and deletion.
//!
//! The sole entry point for transport adapters. Enforces input validation
//! ahead of any store access and translates repository outcomes into the
//! error kinds a transport maps onto response statuses.

use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Caller-supplied data failed validation before any store access.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// The referenced task has no corresponding record.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed; constraint and availability failures
    /// pass through typed but unmodified.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Coarse classification of a service error.
///
/// Transport adapters map each kind onto a distinct response status
/// without matching on error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskErrorKind {
    /// Recoverable by resubmitting corrected input.
    InvalidInput,
    /// The referenced record does not exist.
    NotFound,
    /// The store rejected a write that violates a durable constraint.
    ConstraintViolation,
    /// The store could not serve the request; fatal for this request.
    StoreUnavailable,
}

impl TaskServiceError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> TaskErrorKind {
        match self {
            Self::Validation(_) => TaskErrorKind::InvalidInput,
            Self::NotFound(_) => TaskErrorKind::NotFound,
            Self::Repository(TaskRepositoryError::ConstraintViolation(_)) => {
                TaskErrorKind::ConstraintViolation
            }
            Self::Repository(TaskRepositoryError::Unavailable(_)) => {
                TaskErrorKind::StoreUnavailable
            }
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Owns no state across requests; every call is a single pass through the
/// repository.
#[derive(Clone)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and persists a new task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for an empty title, before
    /// any repository access; store rejections pass through.
    pub async fn create_task(&self, new_task: NewTask) -> TaskServiceResult<Task> {
        if let Err(err) = new_task.validate() {
            error!("attempted to create task with empty title");
            return Err(err.into());
        }
        let task = self.repository.create(new_task).await?;
        info!(id = %task.id(), "created task");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no record matches.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let Some(task) = self.repository.get(id).await? else {
            warn!(%id, "task not found");
            return Err(TaskServiceError::NotFound(id));
        };
        info!(%id, "retrieved task");
        Ok(task)
    }

    /// Lists tasks with offset pagination.
    ///
    /// An empty sequence is a valid success.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store cannot
    /// serve the query.
    pub async fn list_tasks(&self, skip: i64, limit: i64) -> TaskServiceResult<Vec<Task>> {
        debug!(skip, limit, "listing tasks");
        let tasks = self.repository.list(skip, limit).await?;
        info!(count = tasks.len(), skip, limit, "retrieved tasks");
        Ok(tasks)
    }

    /// Applies a partial update to an existing task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no record matches;
    /// constraint failures pass through as a distinct kind.
    pub async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        let Some(task) = self.repository.update(id, patch).await? else {
            warn!(%id, "task not found for update");
            return Err(TaskServiceError::NotFound(id));
        };
        info!(%id, "updated task");
        Ok(task)
    }

    /// Permanently removes a task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no record matches.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        if !self.repository.delete(id).await? {
            warn!(%id, "task not found for deletion");
            return Err(TaskServiceError::NotFound(id));
        }
        info!(%id, "deleted task");
        Ok(())
    }
}
