//! Task record management for Taskman.
//!
//! This module implements the full lifecycle of a task record: creation
//! with server-assigned identifiers, lookup, paginated listing, partial
//! update with explicit field presence, and permanent deletion. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
