//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod department;
pub mod employee;

pub use department::{Department, DepartmentId, NewDepartment};
pub use employee::{valid_period, Employee, EmployeeId, EmploymentStatus};
