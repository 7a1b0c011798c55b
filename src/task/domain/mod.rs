//! Domain model for task records.
//!
//! The task domain models record creation, status membership, and
//! partial-update payloads while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod patch;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use patch::{Field, TaskPatch};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task};
