//! `PostgreSQL` repository implementation for task record storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskPatch, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, info, warn};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::unavailable)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::unavailable)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, new_task: NewTask) -> TaskRepositoryResult<Task> {
        debug!(title = new_task.title(), "creating task");
        let task = Task::new(new_task);
        let new_row = NewTaskRow::from_task(&task);

        let row = self
            .run_blocking(move |connection| {
                diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)
                    .map_err(map_write_error)
            })
            .await?;

        let stored = row_to_task(row)?;
        info!(id = %stored.id(), "task created");
        Ok(stored)
    }

    async fn get(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        debug!(%id, "fetching task");
        let row = self
            .run_blocking(move |connection| {
                tasks::table
                    .find(id.into_inner())
                    .select(TaskRow::as_select())
                    .first::<TaskRow>(connection)
                    .optional()
                    .map_err(TaskRepositoryError::unavailable)
            })
            .await?;

        if row.is_none() {
            warn!(%id, "task not found");
        }
        row.map(row_to_task).transpose()
    }

    async fn list(&self, skip: i64, limit: i64) -> TaskRepositoryResult<Vec<Task>> {
        debug!(skip, limit, "fetching tasks");
        // PostgreSQL rejects negative OFFSET/LIMIT; the port treats
        // negative pagination values as zero.
        let skip = skip.max(0);
        let limit = limit.max(0);
        let rows = self
            .run_blocking(move |connection| {
                tasks::table
                    .order(tasks::id.asc())
                    .offset(skip)
                    .limit(limit)
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection)
                    .map_err(TaskRepositoryError::unavailable)
            })
            .await?;

        info!(count = rows.len(), "tasks fetched");
        rows.into_iter().map(row_to_task).collect()
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Option<Task>> {
        debug!(%id, "updating task");

        // Diesel rejects a changeset with no fields, and an empty patch
        // must leave the record untouched anyway.
        if patch.is_empty() {
            return self.get(id).await;
        }

        // Absence resolves before the constraint: an update on a missing
        // row affects nothing, so no integrity check can fire for it.
        if let Err(violation) = check_patch_constraints(&patch) {
            if self.get(id).await?.is_none() {
                warn!(%id, "task not found for update");
                return Ok(None);
            }
            return Err(violation);
        }

        let changeset = TaskChangeset::from_patch(&patch);
        let row = self
            .run_blocking(move |connection| {
                diesel::update(tasks::table.find(id.into_inner()))
                    .set(&changeset)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)
                    .optional()
                    .map_err(map_write_error)
            })
            .await?;

        if row.is_none() {
            warn!(%id, "task not found for update");
        } else {
            info!(%id, "task updated");
        }
        row.map(row_to_task).transpose()
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        debug!(%id, "deleting task");
        let removed = self
            .run_blocking(move |connection| {
                diesel::delete(tasks::table.find(id.into_inner()))
                    .execute(connection)
                    .map_err(TaskRepositoryError::unavailable)
            })
            .await?;

        if removed == 0 {
            warn!(%id, "task not found for deletion");
            return Ok(false);
        }
        info!(%id, "task deleted");
        Ok(true)
    }
}

/// Rejects explicit nulls for non-nullable columns.
///
/// The typed schema cannot emit `NULL` into `title` or `status`, so the
/// not-null constraint is enforced here with the same error kind the
/// database would report, before any write is issued.
fn check_patch_constraints(patch: &TaskPatch) -> TaskRepositoryResult<()> {
    if patch.title().is_null() {
        return Err(TaskRepositoryError::ConstraintViolation(
            "null value in column \"title\" violates not-null constraint".to_owned(),
        ));
    }
    if patch.status().is_null() {
        return Err(TaskRepositoryError::ConstraintViolation(
            "null value in column \"status\" violates not-null constraint".to_owned(),
        ));
    }
    Ok(())
}

fn map_write_error(err: DieselError) -> TaskRepositoryError {
    match err {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::CheckViolation,
            info,
        ) => TaskRepositoryError::ConstraintViolation(info.message().to_owned()),
        _ => TaskRepositoryError::unavailable(err),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status: persisted_status,
    } = row;

    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::unavailable)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        status,
    }))
}
