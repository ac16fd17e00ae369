//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Every method that returns a `Department` returns it with its employee
//! collection fully loaded.

use async_trait::async_trait;

use crate::domain::entities::{Department, DepartmentId, Employee, EmployeeId, NewDepartment};
use crate::error::DomainError;

/// Repository for Department entities
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Find a department by ID
    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, DomainError>;

    /// Find a department by code, ignoring case
    async fn find_by_code(&self, code: &str) -> Result<Option<Department>, DomainError>;

    /// Check whether any department owns the code, ignoring case
    async fn exists_by_code(&self, code: &str) -> Result<bool, DomainError>;

    /// List every department
    async fn find_all(&self) -> Result<Vec<Department>, DomainError>;

    /// Departments whose name or code contains `fragment`, ignoring case
    async fn search(&self, fragment: &str) -> Result<Vec<Department>, DomainError>;

    /// Persist a new department; a code collision is `AlreadyExists`
    async fn create(&self, department: &NewDepartment) -> Result<Department, DomainError>;

    /// Persist the mutable fields of an existing department
    async fn update(&self, department: &Department) -> Result<Department, DomainError>;

    /// Delete a department and, atomically, all of its employees
    async fn delete(&self, id: &DepartmentId) -> Result<(), DomainError>;
}

/// Repository for Employee entities
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by ID
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError>;

    /// Find an employee by email, ignoring case
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError>;

    /// Persist a new employee; an email collision is `AlreadyExists`
    async fn create(&self, employee: &Employee) -> Result<Employee, DomainError>;

    /// Delete an employee
    async fn delete(&self, id: &EmployeeId) -> Result<(), DomainError>;
}
