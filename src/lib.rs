//! Taskman: task-tracking service core.
//!
//! This crate provides the request-to-persistence pipeline for a networked
//! task tracker: service-layer validation and orchestration, the repository
//! data-access contract, and the task status model.
//!
//! # Architecture
//!
//! Taskman follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data shapes and validation with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`,
//!   in-memory)
//!
//! The HTTP transport layer is an external collaborator: it maps verbs and
//! paths onto [`task::services::TaskService`] calls and serialises the
//! results.

pub mod task;
