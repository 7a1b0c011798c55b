//! In-memory adapter implementing the task repository port.

mod task;

pub use task::InMemoryTaskRepository;
