//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repositories share one store, so cascading deletes and
//! the code/email uniqueness constraints behave the way the database does.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
