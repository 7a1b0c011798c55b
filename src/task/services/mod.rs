//! Application services for task record orchestration.

mod tasks;

pub use tasks::{TaskErrorKind, TaskService, TaskServiceError, TaskServiceResult};
