//! SeaORM entities
//!
//! Table models for the persistence adapters. Domain code never sees these;
//! the adapters convert them into `domain::entities` types.

pub mod departments;
pub mod employees;
