//! Unit and integration tests for task record management.

mod service_tests;
