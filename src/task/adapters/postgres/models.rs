//! Diesel row models for task record persistence.

use super::schema::tasks;
use crate::task::domain::{Field, Task, TaskPatch};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Task status in storage representation.
    pub status: String,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Task status in storage representation.
    pub status: String,
}

impl NewTaskRow {
    /// Builds an insert row from a freshly constructed task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            status: task.status().as_str().to_owned(),
        }
    }
}

/// Changeset applying only the fields present in a patch.
///
/// `None` skips a column; `Some(None)` writes an explicit null into the
/// nullable description column.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title, when supplied.
    pub title: Option<String>,
    /// Replacement or cleared description, when supplied.
    pub description: Option<Option<String>>,
    /// Replacement status in storage representation, when supplied.
    pub status: Option<String>,
}

impl TaskChangeset {
    /// Builds a changeset from the supplied patch fields.
    ///
    /// Explicit nulls for the non-nullable `title` and `status` columns
    /// cannot be expressed through the typed schema; callers must reject
    /// them as constraint violations before building the changeset.
    pub fn from_patch(patch: &TaskPatch) -> Self {
        let description = match patch.description() {
            Field::Absent => None,
            Field::Null => Some(None),
            Field::Set(description) => Some(Some(description.clone())),
        };

        Self {
            title: patch.title().value().cloned(),
            description,
            status: patch.status().value().map(|status| status.as_str().to_owned()),
        }
    }
}
